//! Core configuration, errors and shared parameter types for the
//! polyref-* crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use types::{DateParam, Order, TickType};

/// Base URL for the Polygon REST API
pub const POLYGON_BASE_URL: &str = "https://api.polygon.io";

/// Key under which paginated responses carry the next-page cursor URL
pub const NEXT_URL_KEY: &str = "next_url";
