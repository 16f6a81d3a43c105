//! # polyref-client
//!
//! A thin Rust client for the Polygon.io reference-data REST API: ticker
//! search and metadata, ticker news, corporate actions (dividends,
//! financials, splits) and market status.
//!
//! ## Design
//!
//! - **Declarative endpoints**: every API operation is a descriptor struct
//!   in [`endpoints`] (path template plus optional filters). Query
//!   construction happens in one shared routine; unset parameters are never
//!   transmitted.
//! - **Blocking and async**: [`ReferenceClient`] suspends at the network
//!   round trip; [`blocking::ReferenceClient`] occupies its thread. The two
//!   are line-for-line equivalent adapters over the same request core.
//! - **Raw or decoded**: `get` decodes the JSON body into a
//!   `serde_json::Value`; `get_raw` hands back the transport response for
//!   callers that need status or headers. Decoded mode deliberately does
//!   not inspect the HTTP status.
//! - **Caller-driven pagination**: paginated responses carry a `next_url`
//!   cursor; `next_page` follows it and returns `Ok(None)` once exhausted.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use polyref_client::ReferenceClient;
//! use polyref_client::endpoints::tickers::Tickers;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReferenceClient::from_key("your_api_key")?;
//!
//!     let req = Tickers {
//!         market: Some("stocks".into()),
//!         search: Some("micro".into()),
//!         limit: Some(50),
//!         ..Tickers::new()
//!     };
//!     let page = client.get(&req).await?;
//!     println!("{} results", page["count"]);
//!     Ok(())
//! }
//! ```
//!
//! ## Error handling
//!
//! All methods return `Result<T, polyref_core::Error>`. Transport and
//! decode failures are forwarded unmodified; there is no retry, backoff or
//! rate limiting in this layer.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod blocking;
pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use client::ReferenceClient;
pub use polyref_core::{Config, DateParam, Error, Order, Result, TickType};

pub use endpoints::{Endpoint, Query};
