use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ai_gateway::GatewayError;
use thiserror::Error;

use crate::dto::ErrorResponse;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("Invalid request body: {0}")]
    InvalidRequestBody(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Gateway(GatewayError::RateLimited) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Gateway(GatewayError::QuotaExhausted) => StatusCode::PAYMENT_REQUIRED,
            AppError::Gateway(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequestBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_map_to_http_statuses() {
        let cases = [
            (GatewayError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (GatewayError::QuotaExhausted, StatusCode::PAYMENT_REQUIRED),
            (
                GatewayError::Upstream { status: 418 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (GatewayError::NoImage, StatusCode::INTERNAL_SERVER_ERROR),
            (GatewayError::MissingContent, StatusCode::INTERNAL_SERVER_ERROR),
            (
                GatewayError::MissingApiKey("AI_GATEWAY_API_KEY"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(AppError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn gateway_message_passes_through_unchanged() {
        let err = AppError::from(GatewayError::NoImage);
        assert_eq!(err.to_string(), "No image generated");
    }
}
