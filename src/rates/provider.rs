/// Provider seam for exchange-rate lookups.
///
/// The cache depends on this trait rather than on a concrete client, so
/// tests and debug tooling can substitute stub providers.
use crate::errors::FetchError;
use async_trait::async_trait;

#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the current exchange rate for one base/quote code pair.
    async fn fetch_rate(&self, from_currency: &str, to_currency: &str)
        -> Result<f64, FetchError>;
}
