//! API response types.

use alexandria_core::{AlexandriaError, ErrorResponse};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Standard API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResponse>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful response.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates an error response.
    pub fn error(error: ErrorResponse) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub AlexandriaError);

impl From<AlexandriaError> for AppError {
    fn from(err: AlexandriaError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let error_response = ErrorResponse::from_error(&self.0);
        let body = Json(ApiResponse::<()>::error(error_response));

        (status, body).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<ApiResponse<T>>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_envelope_omits_error() {
        let response = ApiResponse::success(vec!["a", "b"]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"][0], "a");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_envelope_omits_data() {
        let err = AlexandriaError::validation("author key must not be blank");
        let response = ApiResponse::<()>::error(ErrorResponse::from_error(&err));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_app_error_maps_status_codes() {
        let cases = [
            (AlexandriaError::validation("bad"), StatusCode::BAD_REQUEST),
            (
                AlexandriaError::not_found("Author", "/authors/OL1A"),
                StatusCode::NOT_FOUND,
            ),
            (
                AlexandriaError::external_service("openlibrary", "down"),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AlexandriaError::Database("broken".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            let response = AppError(err).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
