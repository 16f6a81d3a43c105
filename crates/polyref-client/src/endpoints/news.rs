//! Ticker news endpoint.

use super::{Endpoint, Query};
use polyref_core::{DateParam, Order};

/// Recent news articles for a ticker (`/v2/reference/news`), with a summary
/// and a link to the original source per article.
///
/// All filters are optional. Date-valued filters accept structured dates or
/// pre-formatted strings and transmit as `YYYY-MM-DD`. Supports pagination
/// via the `next_url` cursor in the response.
#[derive(Debug, Default, Clone)]
pub struct TickerNews {
  /// Only articles mentioning this ticker
  pub ticker: Option<String>,
  /// Return results where the ticker is less than the value
  pub ticker_lt: Option<String>,
  /// Return results where the ticker is less than or equal to the value
  pub ticker_lte: Option<String>,
  /// Return results where the ticker is greater than the value
  pub ticker_gt: Option<String>,
  /// Return results where the ticker is greater than or equal to the value
  pub ticker_gte: Option<String>,
  /// Published date filter
  pub published_utc: Option<DateParam>,
  /// Published before this date
  pub published_utc_lt: Option<DateParam>,
  /// Published on or before this date
  pub published_utc_lte: Option<DateParam>,
  /// Published after this date
  pub published_utc_gt: Option<DateParam>,
  /// Published on or after this date
  pub published_utc_gte: Option<DateParam>,
  /// Field to sort on; the upstream default is `published_utc`
  pub sort: Option<String>,
  /// Sort direction
  pub order: Option<Order>,
  /// Result-count limit (upstream max 1000)
  pub limit: Option<u32>,
}

impl TickerNews {
  /// A query with no filters set
  pub fn new() -> Self {
    Self::default()
  }
}

impl Endpoint for TickerNews {
  fn path(&self) -> String {
    "/v2/reference/news".to_string()
  }

  fn query(&self) -> Query {
    let mut q = Query::new();
    q.push_opt("limit", self.limit.as_ref());
    q.push_opt("order", self.order.as_ref());
    q.push_opt("sort", self.sort.as_ref());
    q.push_opt("ticker", self.ticker.as_ref());
    q.push_opt("ticker.lt", self.ticker_lt.as_ref());
    q.push_opt("ticker.lte", self.ticker_lte.as_ref());
    q.push_opt("ticker.gt", self.ticker_gt.as_ref());
    q.push_opt("ticker.gte", self.ticker_gte.as_ref());
    q.push_date("published_utc", self.published_utc.as_ref());
    q.push_date("published_utc.lt", self.published_utc_lt.as_ref());
    q.push_date("published_utc.lte", self.published_utc_lte.as_ref());
    q.push_date("published_utc.gt", self.published_utc_gt.as_ref());
    q.push_date("published_utc.gte", self.published_utc_gte.as_ref());
    q
  }
}
