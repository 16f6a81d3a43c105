//! Ticker reference endpoints: symbol search, ticker types and per-ticker
//! details.

use super::{Endpoint, Query};
use polyref_core::{DateParam, Order};

/// Query all ticker symbols supported by the API (`/v3/reference/tickers`).
///
/// Covers stocks/equities, crypto and forex. Every filter is optional;
/// unset filters are not transmitted. Supports pagination via the
/// `next_url` cursor in the response.
#[derive(Debug, Default, Clone)]
pub struct Tickers {
  /// Exact ticker symbol to match
  pub ticker: Option<String>,
  /// Return results where the ticker is less than the value
  pub ticker_lt: Option<String>,
  /// Return results where the ticker is less than or equal to the value
  pub ticker_lte: Option<String>,
  /// Return results where the ticker is greater than the value
  pub ticker_gt: Option<String>,
  /// Return results where the ticker is greater than or equal to the value
  pub ticker_gte: Option<String>,
  /// Ticker type, as listed by the ticker-types endpoint
  pub ticker_type: Option<String>,
  /// Market filter: `stocks`, `crypto` or `fx`
  pub market: Option<String>,
  /// Primary exchange, in ISO MIC format
  pub exchange: Option<String>,
  /// CUSIP code of the asset
  pub cusip: Option<String>,
  /// SEC CIK code of the asset
  pub cik: Option<String>,
  /// Point in time to list tickers available on that date
  pub date: Option<DateParam>,
  /// Free-text search over ticker and company name
  pub search: Option<String>,
  /// Restrict to tickers actively traded on the queried date
  pub active: Option<bool>,
  /// Field to sort on; ignored by the upstream when `search` is present
  pub sort: Option<String>,
  /// Sort direction
  pub order: Option<Order>,
  /// Result-count limit (upstream max 1000)
  pub limit: Option<u32>,
}

impl Tickers {
  /// A query with no filters set
  pub fn new() -> Self {
    Self::default()
  }
}

impl Endpoint for Tickers {
  fn path(&self) -> String {
    "/v3/reference/tickers".to_string()
  }

  fn query(&self) -> Query {
    let mut q = Query::new();
    q.push_opt("ticker", self.ticker.as_ref());
    q.push_opt("ticker.lt", self.ticker_lt.as_ref());
    q.push_opt("ticker.lte", self.ticker_lte.as_ref());
    q.push_opt("ticker.gt", self.ticker_gt.as_ref());
    q.push_opt("ticker.gte", self.ticker_gte.as_ref());
    q.push_opt("type", self.ticker_type.as_ref());
    q.push_opt("market", self.market.as_ref());
    q.push_opt("exchange", self.exchange.as_ref());
    q.push_opt("cusip", self.cusip.as_ref());
    q.push_opt("cik", self.cik.as_ref());
    q.push_date("date", self.date.as_ref());
    q.push_opt("search", self.search.as_ref());
    q.push_opt("active", self.active.as_ref());
    q.push_opt("sort", self.sort.as_ref());
    q.push_opt("order", self.order.as_ref());
    q.push_opt("limit", self.limit.as_ref());
    q
  }
}

/// Mapping of ticker types to descriptive names (`/v2/reference/types`)
#[derive(Debug, Default, Clone, Copy)]
pub struct TickerTypes;

impl Endpoint for TickerTypes {
  fn path(&self) -> String {
    "/v2/reference/types".to_string()
  }
}

/// Ticker types, v3 generation (`/v3/reference/tickers/types`)
#[derive(Debug, Default, Clone)]
pub struct TickerTypesV3 {
  /// Filter by asset class (`stocks`, `options`, `crypto`, `fx`)
  pub asset_class: Option<String>,
  /// Filter by locale
  pub locale: Option<String>,
}

impl Endpoint for TickerTypesV3 {
  fn path(&self) -> String {
    "/v3/reference/tickers/types".to_string()
  }

  fn query(&self) -> Query {
    let mut q = Query::new();
    q.push_opt("asset_class", self.asset_class.as_ref());
    q.push_opt("locale", self.locale.as_ref());
    q
  }
}

/// Company details for one ticker (`/v1/meta/symbols/{SYMBOL}/company`)
#[derive(Debug, Clone)]
pub struct TickerDetails {
  /// The ticker symbol of the asset
  pub symbol: String,
}

impl TickerDetails {
  /// Details for `symbol`; any input case is accepted
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into() }
  }
}

impl Endpoint for TickerDetails {
  fn path(&self) -> String {
    format!("/v1/meta/symbols/{}/company", self.symbol.to_uppercase())
  }
}

/// Ticker details, experimental generation (`/vX/reference/tickers/{SYMBOL}`).
///
/// Slated by the upstream to replace [`TickerDetails`]; the path is subject
/// to change while the endpoint stays experimental.
#[derive(Debug, Clone)]
pub struct TickerDetailsVx {
  /// The ticker symbol of the asset
  pub symbol: String,
  /// Point in time for the details; defaults upstream to the most recent
  /// available date
  pub date: Option<DateParam>,
}

impl TickerDetailsVx {
  /// Details for `symbol` at the most recent available date
  pub fn new(symbol: impl Into<String>) -> Self {
    Self { symbol: symbol.into(), date: None }
  }
}

impl Endpoint for TickerDetailsVx {
  fn path(&self) -> String {
    format!("/vX/reference/tickers/{}", self.symbol.to_uppercase())
  }

  fn query(&self) -> Query {
    let mut q = Query::new();
    q.push_date("date", self.date.as_ref());
    q
  }
}
