//! Error responses for the score proxy.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::FairGateError;

/// A proxy failure, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}

impl From<FairGateError> for ApiError {
    /// - missing wallet: 400
    /// - missing credential: 500
    /// - upstream failure: the upstream's own status, body included
    /// - anything else: 500 with a generic message
    fn from(err: FairGateError) -> Self {
        match err {
            FairGateError::Validation(msg) => ApiError::new(StatusCode::BAD_REQUEST, msg),
            FairGateError::Configuration(msg) => ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, msg),
            FairGateError::Upstream { status, body } => ApiError::new(
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("FairScale API error: {}", body),
            ),
            _ => ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch fair score from FairScale",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let e: ApiError = FairGateError::Validation("Wallet address is required".into()).into();
        assert_eq!(e.status, StatusCode::BAD_REQUEST);

        let e: ApiError = FairGateError::Configuration("API key not configured".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "API key not configured");

        let e: ApiError = FairGateError::Upstream { status: 429, body: "slow down".into() }.into();
        assert_eq!(e.status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(e.message, "FairScale API error: slow down");

        let e: ApiError = FairGateError::Transport("connection reset".into()).into();
        assert_eq!(e.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(e.message, "Failed to fetch fair score from FairScale");
    }

    #[test]
    fn test_internal_detail_not_leaked() {
        let e: ApiError = FairGateError::Transport("dns error for api.fairscale.xyz".into()).into();
        assert!(!e.message.contains("dns"));
        assert_eq!(e.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
