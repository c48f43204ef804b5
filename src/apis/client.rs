/// Base HTTP client shared by upstream API integrations
use reqwest::Client;
use std::time::Duration;

/// Identifies us to upstream providers
const USER_AGENT: &str = "FxScreener/1.0";

/// HTTP client wrapper with a fixed request timeout
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction_with_timeout() {
        let http = HttpClient::new(30).unwrap();
        assert_eq!(http.timeout(), Duration::from_secs(30));
    }
}
