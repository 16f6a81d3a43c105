use thiserror::Error;

/// The main error type for polyref-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// Environment variable error
  #[error("Environment variable error: {0}")]
  EnvVar(#[from] std::env::VarError),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key error
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Transport failure. Connection, timeout and DNS errors land here,
  /// forwarded from the HTTP client without retry or inspection.
  #[error("Transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// The response body was not valid JSON when decoding was requested
  #[error("Decode error: {0}")]
  Decode(#[from] serde_json::Error),

  /// URL construction error
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
}

/// Result type alias for polyref-* crates
pub type Result<T> = std::result::Result<T, Error>;
