//! Configuration management for the Polygon reference-data client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the reference-data client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Polygon API key, sent as a bearer credential on every request
  pub api_key: String,

  /// Base URL for the Polygon REST API
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("POLYGON_API_KEY")
      .map_err(|_| Error::ApiKey("POLYGON_API_KEY not set".to_string()))?;

    let base_url =
      env::var("POLYGON_BASE_URL").unwrap_or_else(|_| crate::POLYGON_BASE_URL.to_string());

    let timeout_secs = env::var("POLYGON_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid POLYGON_TIMEOUT_SECS".to_string()))?;

    Ok(Config { api_key, base_url, timeout_secs })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config { api_key, base_url: crate::POLYGON_BASE_URL.to_string(), timeout_secs: 30 }
  }

  /// Override the base URL, keeping everything else. Used to point the
  /// client at a mock server in tests.
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}
