//! Declarative endpoint descriptors for the Polygon reference-data API.
//!
//! Each logical API operation is one descriptor struct implementing
//! [`Endpoint`]: a path template plus the query parameters the operation
//! accepts. Both the blocking and the async client consume descriptors
//! through the same generic request routine, so query construction lives
//! in exactly one place.

pub mod markets;
pub mod news;
pub mod stocks;
pub mod tickers;

use polyref_core::DateParam;

/// One logical API operation: a URL path below the API root and the query
/// parameters to transmit with it.
pub trait Endpoint {
  /// URL path below the API root. Symbol segments are upper-cased here,
  /// regardless of input case.
  fn path(&self) -> String;

  /// Query parameters for the request. Parameters left unset never appear.
  fn query(&self) -> Query {
    Query::new()
  }
}

/// An ordered list of query parameters with all unset values dropped.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query(Vec<(&'static str, String)>);

impl Query {
  /// Create an empty query
  pub fn new() -> Self {
    Query(Vec::new())
  }

  /// Append a required parameter
  pub fn push(&mut self, key: &'static str, value: impl ToString) {
    self.0.push((key, value.to_string()));
  }

  /// Append a parameter if it is set; unset parameters are dropped, not
  /// sent as empty
  pub fn push_opt<T: ToString>(&mut self, key: &'static str, value: Option<&T>) {
    if let Some(v) = value {
      self.0.push((key, v.to_string()));
    }
  }

  /// Append a date parameter if set, normalized to `YYYY-MM-DD`
  pub fn push_date(&mut self, key: &'static str, value: Option<&DateParam>) {
    if let Some(d) = value {
      self.0.push((key, d.format()));
    }
  }

  /// Whether any parameter is set
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// The parameters as key/value pairs, in insertion order
  pub fn pairs(&self) -> &[(&'static str, String)] {
    &self.0
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  #[test]
  fn test_push_opt_drops_unset() {
    let mut q = Query::new();
    q.push("limit", 100u32);
    q.push_opt::<String>("market", None);
    q.push_opt("sort", Some(&"ticker"));
    assert_eq!(q.pairs(), &[("limit", "100".to_string()), ("sort", "ticker".to_string())]);
  }

  #[test]
  fn test_push_date_normalizes() {
    let mut q = Query::new();
    let date: DateParam = NaiveDate::from_ymd_opt(2021, 6, 28).unwrap().into();
    q.push_date("date", Some(&date));
    q.push_date("published_utc", None);
    assert_eq!(q.pairs(), &[("date", "2021-06-28".to_string())]);
  }
}
