//! Per-symbol corporate action endpoints: dividends, financials and splits.

use super::{Endpoint, Query};

/// Historical dividends for a stock (`/v2/reference/dividends/{SYMBOL}`)
#[derive(Debug, Clone)]
pub struct Dividends {
  /// The ticker symbol of the stock/equity
  pub symbol: String,
}

impl Dividends {
  /// Dividend history for `symbol`
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into() }
  }
}

impl Endpoint for Dividends {
  fn path(&self) -> String {
    format!("/v2/reference/dividends/{}", self.symbol.to_uppercase())
  }
}

/// Historical financial data for a stock
/// (`/v2/reference/financials/{SYMBOL}`).
#[derive(Debug, Clone)]
pub struct Financials {
  /// The ticker symbol of the stock/equity
  pub symbol: String,
  /// Result-count limit
  pub limit: Option<u32>,
  /// Report type: `Y`, `YA`, `Q`, `QA`, `T` or `TA`
  pub report_type: Option<String>,
  /// Sort field: `reportPeriod`, `-reportPeriod`, `calendarDate` or
  /// `-calendarDate`
  pub sort: Option<String>,
}

impl Financials {
  /// Financials for `symbol`, with no filters set
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into(), limit: None, report_type: None, sort: None }
  }
}

impl Endpoint for Financials {
  fn path(&self) -> String {
    format!("/v2/reference/financials/{}", self.symbol.to_uppercase())
  }

  fn query(&self) -> Query {
    let mut q = Query::new();
    q.push_opt("limit", self.limit.as_ref());
    q.push_opt("type", self.report_type.as_ref());
    q.push_opt("sort", self.sort.as_ref());
    q
  }
}

/// Historical stock splits for a ticker, including execution and payment
/// dates and the split ratio (`/v2/reference/splits/{SYMBOL}`).
#[derive(Debug, Clone)]
pub struct Splits {
  /// The ticker symbol of the stock/equity
  pub symbol: String,
}

impl Splits {
  /// Split history for `symbol`
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into() }
  }
}

impl Endpoint for Splits {
  fn path(&self) -> String {
    format!("/v2/reference/splits/{}", self.symbol.to_uppercase())
  }
}
