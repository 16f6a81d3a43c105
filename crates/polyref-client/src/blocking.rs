//! Blocking reference-data client.
//!
//! Same surface and semantics as the async [`ReferenceClient`]; the one
//! difference is that each call occupies the calling thread for the network
//! round trip instead of yielding to the runtime.
//!
//! [`ReferenceClient`]: crate::ReferenceClient

use crate::endpoints::Endpoint;
use crate::transport;
use polyref_core::{Config, Result};
use reqwest::blocking::Response;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument};

/// Blocking client for the Polygon reference-data API.
///
/// The underlying connection pool is owned by the client value and released
/// when it is dropped, on every exit path, early returns and errors
/// included.
///
/// # Examples
///
/// ```rust,no_run
/// use polyref_client::blocking::ReferenceClient;
/// use polyref_client::endpoints::markets::MarketStatus;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = ReferenceClient::from_key("your_api_key")?;
///     let status = client.get(&MarketStatus)?;
///     println!("market: {}", status["market"]);
///     Ok(())
/// }
/// ```
pub struct ReferenceClient {
  http: reqwest::blocking::Client,
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
    let http = reqwest::blocking::Client::builder()
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
  pub fn get<E: Endpoint>(&self, endpoint: &E) -> Result<Value> {
    let url = transport::request_url(&self.base_url, endpoint)?;
    debug!("GET {url}");
    let body = self.http.get(url).send()?.text()?;
    Ok(serde_json::from_str(&body)?)
  }

  /// Issue the endpoint's GET and return the raw transport response,
  /// status and headers included, body undecoded.
  #[instrument(skip(self, endpoint), fields(path = %endpoint.path()))]
  pub fn get_raw<E: Endpoint>(&self, endpoint: &E) -> Result<Response> {
    let url = transport::request_url(&self.base_url, endpoint)?;
    debug!("GET {url}");
    Ok(self.http.get(url).send()?)
  }

  /// GET an absolute URL (as handed back in a `next_url` cursor) and decode
  /// the JSON body. No query parameters are added; the upstream forms the
  /// URL completely.
  pub fn get_url(&self, url: &str) -> Result<Value> {
    let body = self.get_url_raw(url)?.text()?;
    Ok(serde_json::from_str(&body)?)
  }

  /// GET an absolute URL and return the raw transport response
  pub fn get_url_raw(&self, url: &str) -> Result<Response> {
    let url = url::Url::parse(url)?;
    debug!("GET {url}");
    Ok(self.http.get(url).send()?)
  }

  /// Fetch the page after `prev`, a previously decoded response.
  ///
  /// Returns `Ok(None)` when `prev` carries no `next_url` cursor; all pages
  /// have been received (or the endpoint does not paginate) and no request
  /// is issued.
  pub fn next_page(&self, prev: &Value) -> Result<Option<Value>> {
    match transport::next_page_url(prev) {
      Some(url) => Ok(Some(self.get_url(url)?)),
      None => Ok(None),
    }
  }

  /// Like [`next_page`](ReferenceClient::next_page), returning the raw
  /// transport response for the next page.
  pub fn next_page_raw(&self, prev: &Value) -> Result<Option<Response>> {
    match transport::next_page_url(prev) {
      Some(url) => Ok(Some(self.get_url_raw(url)?)),
      None => Ok(None),
    }
  }
}

impl std::fmt::Debug for ReferenceClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ReferenceClient").field("base_url", &self.base_url).finish()
  }
}
