/// Structured error types for upstream rate fetching.
///
/// Every variant is absorbed at the per-pair fetch boundary: the refresh loop
/// records the pair as absent and moves on, so these never reach an API
/// response. They exist for debug logging and the debug tools.

// =============================================================================
// FETCH ERROR TYPE
// =============================================================================

#[derive(Debug, Clone)]
pub enum FetchError {
    // Transport-level failure (DNS, connect, timeout, TLS)
    Network {
        message: String,
    },

    // Upstream answered with a non-2xx status
    HttpStatus {
        status: u16,
    },

    // Response body was not valid JSON
    MalformedResponse {
        message: String,
    },

    // Expected field missing from the response object
    MissingField {
        field: &'static str,
    },

    // Rate field present but not a parseable number
    InvalidRate {
        value: String,
    },
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network { message } => {
                write!(f, "Network error: {}", message)
            }
            FetchError::HttpStatus { status } => {
                write!(f, "Upstream returned HTTP status {}", status)
            }
            FetchError::MalformedResponse { message } => {
                write!(f, "Malformed response body: {}", message)
            }
            FetchError::MissingField { field } => {
                write!(f, "Response missing field '{}'", field)
            }
            FetchError::InvalidRate { value } => {
                write!(f, "Rate value '{}' is not a number", value)
            }
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return FetchError::HttpStatus {
                status: status.as_u16(),
            };
        }
        FetchError::Network {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failure() {
        let status = FetchError::HttpStatus { status: 503 };
        assert_eq!(status.to_string(), "Upstream returned HTTP status 503");

        let missing = FetchError::MissingField {
            field: "5. Exchange Rate",
        };
        assert!(missing.to_string().contains("5. Exchange Rate"));

        let invalid = FetchError::InvalidRate {
            value: "n/a".to_string(),
        };
        assert!(invalid.to_string().contains("n/a"));
    }
}
