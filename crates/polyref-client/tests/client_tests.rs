//! HTTP-level tests for both clients against a mock upstream.

use chrono::NaiveDate;
use polyref_client::endpoints::markets::MarketStatus;
use polyref_client::endpoints::news::TickerNews;
use polyref_client::endpoints::stocks::Dividends;
use polyref_client::endpoints::tickers::Tickers;
use polyref_client::{blocking, Config, ReferenceClient};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server: &MockServer) -> Config {
  Config::default_with_key("test_key".to_string()).with_base_url(server.uri())
}

#[tokio::test]
async fn bearer_credential_on_every_request() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v1/marketstatus/now"))
    .and(header("authorization", "Bearer test_key"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"market": "open"})))
    .expect(1)
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();
  let status = client.get(&MarketStatus).await.unwrap();
  assert_eq!(status["market"], "open");
}

#[tokio::test]
async fn structured_date_matches_preformatted_string() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v3/reference/tickers"))
    .and(query_param("date", "2021-06-28"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
    .expect(2)
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();

  let structured = Tickers {
    date: Some(NaiveDate::from_ymd_opt(2021, 6, 28).unwrap().into()),
    ..Tickers::new()
  };
  let preformatted = Tickers { date: Some("2021-06-28".into()), ..Tickers::new() };

  client.get(&structured).await.unwrap();
  client.get(&preformatted).await.unwrap();
}

#[tokio::test]
async fn unset_parameters_absent_from_query() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/reference/news"))
    .and(query_param("ticker", "AMD"))
    .and(query_param_is_missing("limit"))
    .and(query_param_is_missing("order"))
    .and(query_param_is_missing("published_utc"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
    .expect(1)
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();
  let req = TickerNews { ticker: Some("AMD".to_string()), ..TickerNews::new() };
  client.get(&req).await.unwrap();
}

#[tokio::test]
async fn symbol_path_segment_uppercased() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/v2/reference/dividends/AAPL"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
    .expect(1)
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();
  client.get(&Dividends::new("aapl")).await.unwrap();
}

#[tokio::test]
async fn pagination_follows_next_url_exactly() {
  let server = MockServer::start().await;
  let next = format!("{}/v3/reference/tickers?cursor=2", server.uri());

  Mock::given(method("GET"))
    .and(path("/v3/reference/tickers"))
    .and(query_param_is_missing("cursor"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"results": [1], "next_url": next})),
    )
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/v3/reference/tickers"))
    .and(query_param("cursor", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": [2]})))
    .expect(1)
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();

  let first = client.get(&Tickers::new()).await.unwrap();
  let second = client.next_page(&first).await.unwrap().expect("expected a second page");
  assert_eq!(second["results"], json!([2]));

  // Second page has no cursor: exhaustion, and no further request goes out.
  let requests_so_far = server.received_requests().await.unwrap().len();
  assert!(client.next_page(&second).await.unwrap().is_none());
  assert_eq!(server.received_requests().await.unwrap().len(), requests_so_far);
}

#[tokio::test]
async fn decoded_equals_decoding_raw() {
  let server = MockServer::start().await;
  let body = json!({"status": "OK", "results": [{"ticker": "AAPL"}]});
  Mock::given(method("GET"))
    .and(path("/v3/reference/tickers"))
    .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();

  let decoded = client.get(&Tickers::new()).await.unwrap();
  let raw = client.get_raw(&Tickers::new()).await.unwrap();
  let from_raw: serde_json::Value = serde_json::from_str(&raw.text().await.unwrap()).unwrap();

  assert_eq!(decoded, from_raw);
  assert_eq!(decoded, body);
}

#[tokio::test]
async fn decoded_mode_ignores_error_status() {
  let server = MockServer::start().await;
  let body = json!({"status": "ERROR", "error": "Unknown API Key"});
  Mock::given(method("GET"))
    .and(path("/v1/marketstatus/now"))
    .respond_with(ResponseTemplate::new(401).set_body_json(body.clone()))
    .mount(&server)
    .await;

  let client = ReferenceClient::new(test_config(&server)).unwrap();

  // The error body decodes like any other; the raw form exposes the status.
  let decoded = client.get(&MarketStatus).await.unwrap();
  assert_eq!(decoded, body);

  let raw = client.get_raw(&MarketStatus).await.unwrap();
  assert_eq!(raw.status(), 401);
}

#[test]
fn blocking_client_mirrors_async_semantics() {
  let rt = tokio::runtime::Runtime::new().unwrap();
  let server = rt.block_on(MockServer::start());
  let next = format!("{}/v2/reference/news?cursor=abc", server.uri());

  rt.block_on(
    Mock::given(method("GET"))
      .and(path("/v2/reference/news"))
      .and(query_param_is_missing("cursor"))
      .and(header("authorization", "Bearer test_key"))
      .respond_with(
        ResponseTemplate::new(200).set_body_json(json!({"results": [], "next_url": next})),
      )
      .expect(1)
      .mount(&server),
  );
  rt.block_on(
    Mock::given(method("GET"))
      .and(path("/v2/reference/news"))
      .and(query_param("cursor", "abc"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
      .expect(1)
      .mount(&server),
  );

  let client = blocking::ReferenceClient::new(test_config(&server)).unwrap();

  let first = client.get(&TickerNews::new()).unwrap();
  let second = client.next_page(&first).unwrap().expect("expected a second page");
  assert!(client.next_page(&second).unwrap().is_none());
}

#[test]
fn blocking_client_released_on_scope_exit() {
  let rt = tokio::runtime::Runtime::new().unwrap();
  let server = rt.block_on(MockServer::start());
  rt.block_on(
    Mock::given(method("GET"))
      .and(path("/v2/reference/locales"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": []})))
      .mount(&server),
  );

  {
    let client = blocking::ReferenceClient::new(test_config(&server)).unwrap();
    client.get(&polyref_client::endpoints::markets::Locales).unwrap();
    // Client dropped here; the connection pool goes with it.
  }

  // A fresh client still works against the same server.
  let client = blocking::ReferenceClient::new(test_config(&server)).unwrap();
  client.get(&polyref_client::endpoints::markets::Locales).unwrap();
}
