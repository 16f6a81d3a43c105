//! Market-level endpoints: status, holidays, exchanges, condition mappings,
//! locales and markets.

use super::Endpoint;
use polyref_core::TickType;

/// Upcoming market holidays and their open/close times
/// (`/v1/marketstatus/upcoming`).
#[derive(Debug, Default, Clone, Copy)]
pub struct MarketHolidays;

impl Endpoint for MarketHolidays {
  fn path(&self) -> String {
    "/v1/marketstatus/upcoming".to_string()
  }
}

/// Current trading status of the exchanges and overall market
/// (`/v1/marketstatus/now`).
#[derive(Debug, Default, Clone, Copy)]
pub struct MarketStatus;

impl Endpoint for MarketStatus {
  fn path(&self) -> String {
    "/v1/marketstatus/now".to_string()
  }
}

/// Mapping of condition codes to names for a tick category
/// (`/v1/meta/conditions/{tick_type}`).
#[derive(Debug, Clone, Copy)]
pub struct ConditionMappings {
  /// Trade or quote conditions; transmitted lower-case in the path
  pub tick_type: TickType,
}

impl Default for ConditionMappings {
  fn default() -> Self {
    Self { tick_type: TickType::Trades }
  }
}

impl Endpoint for ConditionMappings {
  fn path(&self) -> String {
    format!("/v1/meta/conditions/{}", self.tick_type)
  }
}

/// Stock exchanges known to the upstream (`/v1/meta/exchanges`)
#[derive(Debug, Default, Clone, Copy)]
pub struct StockExchanges;

impl Endpoint for StockExchanges {
  fn path(&self) -> String {
    "/v1/meta/exchanges".to_string()
  }
}

/// Crypto exchanges known to the upstream (`/v1/meta/crypto-exchanges`)
#[derive(Debug, Default, Clone, Copy)]
pub struct CryptoExchanges;

impl Endpoint for CryptoExchanges {
  fn path(&self) -> String {
    "/v1/meta/crypto-exchanges".to_string()
  }
}

/// Locales currently supported by the upstream (`/v2/reference/locales`)
#[derive(Debug, Default, Clone, Copy)]
pub struct Locales;

impl Endpoint for Locales {
  fn path(&self) -> String {
    "/v2/reference/locales".to_string()
  }
}

/// Markets currently supported by the upstream (`/v2/reference/markets`)
#[derive(Debug, Default, Clone, Copy)]
pub struct Markets;

impl Endpoint for Markets {
  fn path(&self) -> String {
    "/v2/reference/markets".to_string()
  }
}
