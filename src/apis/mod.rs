/// Upstream API clients
///
/// One integration today (Alpha Vantage) plus the shared HTTP client and
/// request statistics it is built on.
pub mod alphavantage;
pub mod client;
pub mod stats;

pub use alphavantage::AlphaVantageClient;
pub use client::HttpClient;
pub use stats::{ApiStats, ApiStatsTracker};
