//! Transport-agnostic request building shared by the blocking and async
//! clients.
//!
//! The clients themselves are thin adapters: everything that decides what
//! goes on the wire (credential header, URL construction, pagination cursor
//! extraction) lives here, once.

use crate::endpoints::Endpoint;
use polyref_core::{Error, Result, NEXT_URL_KEY};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use url::Url;

/// User agent reported by both clients
pub(crate) const USER_AGENT: &str = concat!("polyref-client/", env!("CARGO_PKG_VERSION"));

/// Default headers carrying the bearer credential.
///
/// Installed on the HTTP client at construction, so every outbound request
/// carries it; there is no per-request credential override.
pub(crate) fn auth_headers(api_key: &str) -> Result<HeaderMap> {
  let mut value = HeaderValue::from_str(&format!("Bearer {api_key}"))
    .map_err(|_| Error::ApiKey("API key contains invalid header characters".to_string()))?;
  value.set_sensitive(true);

  let mut headers = HeaderMap::new();
  headers.insert(AUTHORIZATION, value);
  Ok(headers)
}

/// Build the full request URL for an endpoint descriptor: base URL plus the
/// descriptor's path, with its present query parameters appended.
pub(crate) fn request_url<E: Endpoint>(base_url: &str, endpoint: &E) -> Result<Url> {
  let mut url = Url::parse(&format!("{}{}", base_url, endpoint.path()))?;

  let query = endpoint.query();
  if !query.is_empty() {
    let mut pairs = url.query_pairs_mut();
    for (key, value) in query.pairs() {
      pairs.append_pair(key, value);
    }
  }

  Ok(url)
}

/// Extract the pagination cursor from a decoded response body.
///
/// `None` means the last page has been reached (or the endpoint does not
/// paginate); that is a normal terminal condition, not an error.
pub fn next_page_url(body: &Value) -> Option<&str> {
  body.get(NEXT_URL_KEY).and_then(Value::as_str)
}
