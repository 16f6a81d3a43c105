//! Shared parameter types used when building endpoint queries

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A calendar-date query parameter.
///
/// Endpoints that filter on a date accept either a pre-formatted
/// `YYYY-MM-DD` string or a structured chrono value; both transmit as the
/// same `YYYY-MM-DD` text.
#[derive(Debug, Clone, PartialEq)]
pub enum DateParam {
  /// A pre-formatted date string, passed through as-is
  Raw(String),
  /// A calendar date
  Date(NaiveDate),
  /// A date-time, truncated to its calendar date on the wire
  DateTime(NaiveDateTime),
}

impl DateParam {
  /// The `YYYY-MM-DD` text transmitted in the query string
  pub fn format(&self) -> String {
    match self {
      DateParam::Raw(s) => s.clone(),
      DateParam::Date(d) => d.format("%Y-%m-%d").to_string(),
      DateParam::DateTime(dt) => dt.format("%Y-%m-%d").to_string(),
    }
  }
}

impl From<&str> for DateParam {
  fn from(s: &str) -> Self {
    DateParam::Raw(s.to_string())
  }
}

impl From<String> for DateParam {
  fn from(s: String) -> Self {
    DateParam::Raw(s)
  }
}

impl From<NaiveDate> for DateParam {
  fn from(d: NaiveDate) -> Self {
    DateParam::Date(d)
  }
}

impl From<NaiveDateTime> for DateParam {
  fn from(dt: NaiveDateTime) -> Self {
    DateParam::DateTime(dt)
  }
}

impl From<DateTime<Utc>> for DateParam {
  fn from(dt: DateTime<Utc>) -> Self {
    DateParam::DateTime(dt.naive_utc())
  }
}

/// Sort direction for listing endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Order {
  /// Ascending
  Asc,
  /// Descending
  Desc,
}

impl std::fmt::Display for Order {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Order::Asc => write!(f, "asc"),
      Order::Desc => write!(f, "desc"),
    }
  }
}

/// Tick category for the condition-mappings endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TickType {
  /// Trade conditions
  Trades,
  /// Quote conditions
  Quotes,
}

impl std::fmt::Display for TickType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      TickType::Trades => write!(f, "trades"),
      TickType::Quotes => write!(f, "quotes"),
    }
  }
}
