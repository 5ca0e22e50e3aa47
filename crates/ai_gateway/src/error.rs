use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T, E = GatewayError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{0} is not configured")]
    MissingApiKey(&'static str),

    #[error("Rate limit exceeded. Please try again in a moment.")]
    RateLimited,

    #[error("Credits exhausted. Please add more credits.")]
    QuotaExhausted,

    #[error("AI gateway error: {status}")]
    Upstream { status: u16 },

    #[error("Failed to reach AI gateway: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid AI gateway response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("No content in AI gateway response")]
    MissingContent,

    #[error("No image generated")]
    NoImage,
}

impl GatewayError {
    /// Classify a non-success gateway status.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
            StatusCode::PAYMENT_REQUIRED => GatewayError::QuotaExhausted,
            other => GatewayError::Upstream {
                status: other.as_u16(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_and_quota_statuses_are_distinguished() {
        assert!(matches!(
            GatewayError::from_status(StatusCode::TOO_MANY_REQUESTS),
            GatewayError::RateLimited
        ));
        assert!(matches!(
            GatewayError::from_status(StatusCode::PAYMENT_REQUIRED),
            GatewayError::QuotaExhausted
        ));
    }

    #[test]
    fn other_statuses_keep_their_code() {
        let err = GatewayError::from_status(StatusCode::BAD_GATEWAY);
        assert!(matches!(err, GatewayError::Upstream { status: 502 }));
        assert_eq!(err.to_string(), "AI gateway error: 502");
    }

    #[test]
    fn missing_key_names_the_variable() {
        let err = GatewayError::MissingApiKey("AI_GATEWAY_API_KEY");
        assert_eq!(err.to_string(), "AI_GATEWAY_API_KEY is not configured");
    }
}
