//! Error handling utilities for API responses.
//!
//! Provides structured error responses and conversion between
//! service-layer errors and HTTP responses.
//!
//! # Response Format
//! All errors return consistent JSON responses containing:
//! - `error`: Human-readable message
//! - `error_type`: Machine-readable error category
//!
//! # Error Handling Flow
//! 1. Service layer returns a domain-specific `ServiceError`
//! 2. `service_error_to_http` converts it to the matching HTTP response
//! 3. Database and internal failures are logged and reported with a
//!    generic message so no detail leaks to the caller

use crate::errors::ServiceError;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

/// Standard API response wrapper for all endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Indicates if the request was successful
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Human-readable message
    pub message: String,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
    /// Request timestamp
    pub timestamp: String,
}

/// Error details for failed requests
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Machine-readable error type identifier
    pub error_type: String,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error_type: impl Into<String>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: message.into(),
            error: Some(ErrorDetails {
                error_type: error_type.into(),
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Converts ServiceError to an HTTP status code and JSON error body.
pub fn service_error_to_http(error: ServiceError) -> (StatusCode, String) {
    let (status, error_type, message) = match error {
        ServiceError::InvalidCredentials => (
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "Invalid credentials".to_string(),
        ),
        ServiceError::InvalidToken { reason } => {
            tracing::debug!("rejected token: {}", reason);
            (
                StatusCode::UNAUTHORIZED,
                "invalid_token",
                "Invalid or expired token".to_string(),
            )
        }
        ServiceError::Forbidden { message } => (StatusCode::FORBIDDEN, "forbidden", message),
        ServiceError::NotFound { entity, identifier } => (
            StatusCode::NOT_FOUND,
            "not_found",
            format!("{} '{}' not found", entity, identifier),
        ),
        ServiceError::AlreadyExists { entity, identifier } => (
            StatusCode::CONFLICT,
            "already_exists",
            format!("{} '{}' already exists", entity, identifier),
        ),
        ServiceError::Validation { message } => {
            (StatusCode::BAD_REQUEST, "validation_error", message)
        }
        ServiceError::DatabaseUnavailable { message } => {
            tracing::warn!("database unavailable: {}", message);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "database_unavailable",
                "Service temporarily unavailable".to_string(),
            )
        }
        ServiceError::Database { source } => {
            tracing::error!("database error: {}", source);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "database_error",
                "Internal server error".to_string(),
            )
        }
        ServiceError::Internal { message } => {
            tracing::error!("internal error: {}", message);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error".to_string(),
            )
        }
    };

    let error_response = ApiResponse::<()>::error(message, error_type);
    (status, serde_json::to_string(&error_response).unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_error_kind() {
        let cases = [
            (ServiceError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                ServiceError::invalid_token("bad signature"),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ServiceError::forbidden("administrator role required"),
                StatusCode::FORBIDDEN,
            ),
            (
                ServiceError::not_found("User", "drhouse"),
                StatusCode::NOT_FOUND,
            ),
            (
                ServiceError::already_exists("User", "drhouse"),
                StatusCode::CONFLICT,
            ),
            (
                ServiceError::validation("username: Username is required"),
                StatusCode::BAD_REQUEST,
            ),
            (
                ServiceError::DatabaseUnavailable {
                    message: "pool timed out".to_string(),
                },
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                ServiceError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            let (status, _) = service_error_to_http(error);
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn database_errors_report_a_generic_message() {
        let (status, body) = service_error_to_http(ServiceError::Database {
            source: sqlx::Error::RowNotFound,
        });

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("Internal server error"));
        assert!(!body.contains("no rows"));
    }

    #[test]
    fn invalid_token_body_hides_the_reason() {
        let (_, body) = service_error_to_http(ServiceError::invalid_token("ExpiredSignature"));

        assert!(body.contains("invalid_token"));
        assert!(!body.contains("ExpiredSignature"));
    }
}
