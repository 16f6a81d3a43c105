//! Ticker Search Example
//!
//! Searches the reference tickers endpoint and walks every result page via
//! the `next_url` cursor. Requires `POLYGON_API_KEY` in the environment.

use polyref_client::endpoints::tickers::Tickers;
use polyref_client::{Config, ReferenceClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  tracing_subscriber::fmt::init();

  let client = ReferenceClient::new(Config::from_env()?)?;

  let req = Tickers {
    market: Some("stocks".to_string()),
    search: Some("micro".to_string()),
    active: Some(true),
    limit: Some(100),
    ..Tickers::new()
  };

  let mut page = client.get(&req).await?;
  let mut total = 0usize;

  loop {
    let results = page["results"].as_array().map(Vec::len).unwrap_or(0);
    total += results;
    println!("page with {results} results");

    for item in page["results"].as_array().into_iter().flatten() {
      println!("  {:8} {}", item["ticker"], item["name"]);
    }

    match client.next_page(&page).await? {
      Some(next) => page = next,
      None => break,
    }
  }

  println!("{total} tickers total");
  Ok(())
}
