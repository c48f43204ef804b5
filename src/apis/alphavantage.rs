/// Alpha Vantage API integration for realtime currency exchange rates.
///
/// API Documentation: https://www.alphavantage.co/documentation/#currency-exchange
///
/// Endpoints implemented:
/// - GET /query?function=CURRENCY_EXCHANGE_RATE - realtime rate for one currency pair
///
/// Every request carries the configured API key. The rate arrives as a
/// string-encoded number nested inside a titled envelope object; anything
/// else (throttle notes, error payloads) surfaces as a FetchError.
use crate::apis::client::HttpClient;
use crate::apis::stats::{ApiStats, ApiStatsTracker};
use crate::arguments::is_debug_api_enabled;
use crate::errors::FetchError;
use crate::logger::{self, LogTag};
use crate::rates::provider::RateProvider;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;

// ============================================================================
// API CONFIGURATION
// ============================================================================

pub const ALPHAVANTAGE_BASE_URL: &str = "https://www.alphavantage.co";

/// Upstream can be slow on free-tier keys
const TIMEOUT_SECS: u64 = 30;

/// JSON envelope and field names in the upstream response
const RATE_ENVELOPE_KEY: &str = "Realtime Currency Exchange Rate";
const RATE_FIELD_KEY: &str = "5. Exchange Rate";

// ============================================================================
// CLIENT IMPLEMENTATION
// ============================================================================

pub struct AlphaVantageClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
    stats: Arc<ApiStatsTracker>,
}

impl AlphaVantageClient {
    pub fn new(api_key: String) -> Result<Self, String> {
        Self::with_base_url(api_key, ALPHAVANTAGE_BASE_URL.to_string())
    }

    /// Client against a custom endpoint. Used by tests and debug tools.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, String> {
        let http_client = HttpClient::new(TIMEOUT_SECS)?;
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            stats: Arc::new(ApiStatsTracker::new()),
        })
    }

    pub async fn get_stats(&self) -> ApiStats {
        self.stats.get_stats().await
    }

    fn query_url(&self, from_currency: &str, to_currency: &str) -> String {
        format!(
            "{}/query?function=CURRENCY_EXCHANGE_RATE&from_currency={}&to_currency={}&apikey={}",
            self.base_url, from_currency, to_currency, self.api_key
        )
    }

    /// Fetch the realtime exchange rate for one currency pair.
    ///
    /// Debug logging never prints the full URL because it embeds the API key.
    pub async fn fetch_exchange_rate(
        &self,
        from_currency: &str,
        to_currency: &str,
    ) -> Result<f64, FetchError> {
        let url = self.query_url(from_currency, to_currency);
        let start = Instant::now();

        if is_debug_api_enabled() {
            logger::log(
                LogTag::Api,
                "REQUEST",
                &format!("CURRENCY_EXCHANGE_RATE {}->{}", from_currency, to_currency),
            );
        }

        let response = match self.http_client.client().get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                self.stats
                    .record_request(false, start.elapsed().as_millis() as f64)
                    .await;
                return Err(FetchError::from(e));
            }
        };

        let elapsed_ms = start.elapsed().as_millis() as f64;

        if !response.status().is_success() {
            self.stats.record_request(false, elapsed_ms).await;
            return Err(FetchError::HttpStatus {
                status: response.status().as_u16(),
            });
        }

        let body: serde_json::Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                self.stats.record_request(false, elapsed_ms).await;
                return Err(FetchError::MalformedResponse {
                    message: e.to_string(),
                });
            }
        };

        let rate = parse_exchange_rate(&body);
        self.stats.record_request(rate.is_ok(), elapsed_ms).await;

        if is_debug_api_enabled() {
            match &rate {
                Ok(value) => logger::log(
                    LogTag::Api,
                    "RESPONSE",
                    &format!("{}->{} = {}", from_currency, to_currency, value),
                ),
                Err(e) => logger::log(
                    LogTag::Api,
                    "RESPONSE",
                    &format!("{}->{} failed: {}", from_currency, to_currency, e),
                ),
            }
        }

        rate
    }
}

/// Extract the rate from an upstream response body.
///
/// Alpha Vantage signals throttling and bad keys with 200-status bodies that
/// simply lack the envelope, so a missing field is the common failure shape.
pub fn parse_exchange_rate(body: &serde_json::Value) -> Result<f64, FetchError> {
    let envelope = body.get(RATE_ENVELOPE_KEY).ok_or(FetchError::MissingField {
        field: RATE_ENVELOPE_KEY,
    })?;

    let raw = envelope
        .get(RATE_FIELD_KEY)
        .and_then(|value| value.as_str())
        .ok_or(FetchError::MissingField {
            field: RATE_FIELD_KEY,
        })?;

    raw.parse::<f64>().map_err(|_| FetchError::InvalidRate {
        value: raw.to_string(),
    })
}

#[async_trait]
impl RateProvider for AlphaVantageClient {
    async fn fetch_rate(&self, from_currency: &str, to_currency: &str) -> Result<f64, FetchError> {
        self.fetch_exchange_rate(from_currency, to_currency).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body(rate: &str) -> serde_json::Value {
        json!({
            "Realtime Currency Exchange Rate": {
                "1. From_Currency Code": "EUR",
                "2. From_Currency Name": "Euro",
                "3. To_Currency Code": "USD",
                "4. To_Currency Name": "United States Dollar",
                "5. Exchange Rate": rate,
                "6. Last Refreshed": "2024-01-15 10:30:00",
                "7. Time Zone": "UTC",
                "8. Bid Price": rate,
                "9. Ask Price": rate
            }
        })
    }

    #[test]
    fn test_parse_well_formed_response() {
        let rate = parse_exchange_rate(&sample_body("1.08340000")).unwrap();
        assert!((rate - 1.0834).abs() < 1e-9);
    }

    #[test]
    fn test_parse_missing_envelope() {
        // Throttled keys get a 200 with a "Note" body and no envelope
        let body = json!({ "Note": "API call frequency exceeded" });
        let err = parse_exchange_rate(&body).unwrap_err();
        assert!(matches!(err, FetchError::MissingField { field } if field == RATE_ENVELOPE_KEY));
    }

    #[test]
    fn test_parse_missing_rate_field() {
        let body = json!({
            "Realtime Currency Exchange Rate": { "1. From_Currency Code": "EUR" }
        });
        let err = parse_exchange_rate(&body).unwrap_err();
        assert!(matches!(err, FetchError::MissingField { field } if field == RATE_FIELD_KEY));
    }

    #[test]
    fn test_parse_non_numeric_rate() {
        let err = parse_exchange_rate(&sample_body("not-a-number")).unwrap_err();
        assert!(matches!(err, FetchError::InvalidRate { .. }));
    }

    #[test]
    fn test_query_url_contains_pair_and_key() {
        let client = AlphaVantageClient::with_base_url(
            "demo".to_string(),
            "https://example.test/".to_string(),
        )
        .unwrap();
        let url = client.query_url("EUR", "USD");
        assert!(url.starts_with("https://example.test/query?"));
        assert!(url.contains("function=CURRENCY_EXCHANGE_RATE"));
        assert!(url.contains("from_currency=EUR"));
        assert!(url.contains("to_currency=USD"));
        assert!(url.ends_with("apikey=demo"));
    }
}
