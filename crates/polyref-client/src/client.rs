//! Async reference-data client.

use crate::endpoints::Endpoint;
use crate::transport;
use polyref_core::{Config, Result};
use reqwest::Response;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Async client for the Polygon reference-data API.
///
/// Holds the base URL and one `reqwest::Client` carrying the bearer
/// credential; both are fixed at construction. The underlying connection
/// pool is released when the client is dropped, on every exit path.
///
/// Each call is one GET. Pagination is caller-driven through
/// [`next_page`](ReferenceClient::next_page); the client never aggregates
/// pages on its own.
///
/// # Examples
///
/// ```rust,no_run
/// use polyref_client::ReferenceClient;
/// use polyref_client::endpoints::tickers::Tickers;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ReferenceClient::from_key("your_api_key")?;
///
///     let req = Tickers { search: Some("micro".into()), ..Tickers::new() };
///     let mut page = client.get(&req).await?;
///     while let Some(next) = client.next_page(&page).await? {
///         page = next;
///     }
///     Ok(())
/// }
/// ```
pub struct ReferenceClient {
  http: reqwest::Client,
  base_url: String,
}

impl ReferenceClient {
  /// Create a client from a full configuration.
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created or the API key
  /// is not a valid header value.
  pub fn new(config: Config) -> Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(transport::USER_AGENT)
      .default_headers(transport::auth_headers(&config.api_key)?)
      .build()?;

    Ok(Self { http, base_url: config.base_url })
  }

  /// Create a client for the production API from an API key alone
  pub fn from_key(api_key: impl Into<String>) -> Result<Self> {
    Self::new(Config::default_with_key(api_key.into()))
  }

  /// The base URL requests are issued against
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Issue the endpoint's GET and decode the JSON body.
  ///
  /// The HTTP status is not inspected: error responses decode best-effort
  /// like any other body. Callers that need status or headers should use
  /// [`get_raw`](ReferenceClient::get_raw).
  #[instrument(skip(self, endpoint), fields(path = %endpoint.path()))]
  pub async fn get<E: Endpoint>(&self, endpoint: &E) -> Result<Value> {
    let url = transport::request_url(&self.base_url, endpoint)?;
    debug!("GET {url}");
    let body = self.http.get(url).send().await?.text().await?;
    Ok(serde_json::from_str(&body)?)
  }

  /// Issue the endpoint's GET and return the raw transport response,
  /// status and headers included, body undecoded.
  #[instrument(skip(self, endpoint), fields(path = %endpoint.path()))]
  pub async fn get_raw<E: Endpoint>(&self, endpoint: &E) -> Result<Response> {
    let url = transport::request_url(&self.base_url, endpoint)?;
    debug!("GET {url}");
    Ok(self.http.get(url).send().await?)
  }

  /// GET an absolute URL (as handed back in a `next_url` cursor) and decode
  /// the JSON body. No query parameters are added; the upstream forms the
  /// URL completely.
  pub async fn get_url(&self, url: &str) -> Result<Value> {
    let body = self.get_url_raw(url).await?.text().await?;
    Ok(serde_json::from_str(&body)?)
  }

  /// GET an absolute URL and return the raw transport response
  pub async fn get_url_raw(&self, url: &str) -> Result<Response> {
    let url = url::Url::parse(url)?;
    debug!("GET {url}");
    Ok(self.http.get(url).send().await?)
  }

  /// Fetch the page after `prev`, a previously decoded response.
  ///
  /// Returns `Ok(None)` when `prev` carries no `next_url` cursor; all pages
  /// have been received (or the endpoint does not paginate) and no request
  /// is issued.
  pub async fn next_page(&self, prev: &Value) -> Result<Option<Value>> {
    match transport::next_page_url(prev) {
      Some(url) => Ok(Some(self.get_url(url).await?)),
      None => Ok(None),
    }
  }

  /// Like [`next_page`](ReferenceClient::next_page), returning the raw
  /// transport response for the next page.
  pub async fn next_page_raw(&self, prev: &Value) -> Result<Option<Response>> {
    match transport::next_page_url(prev) {
      Some(url) => Ok(Some(self.get_url_raw(url).await?)),
      None => Ok(None),
    }
  }
}

impl std::fmt::Debug for ReferenceClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ReferenceClient").field("base_url", &self.base_url).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_key("test_key".to_string());
    let client = ReferenceClient::new(config).expect("Failed to create client");
    assert_eq!(client.base_url(), polyref_core::POLYGON_BASE_URL);
  }

  #[tokio::test]
  async fn test_next_page_exhausted_without_request() {
    let client = ReferenceClient::from_key("test_key").unwrap();
    let prev = json!({"results": [], "status": "OK"});
    let next = client.next_page(&prev).await.unwrap();
    assert!(next.is_none());
  }
}
