//! Global application error types and handlers.
//!
//! This module defines the error taxonomy used across the entire backend
//! and provides mechanisms for consistent error handling and response
//! formatting.

use thiserror::Error;

/// Generic service error used across all entities.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Password verification failed for an existing user.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The bearer token was missing, malformed, forged, or expired.
    #[error("invalid token: {reason}")]
    InvalidToken { reason: String },

    /// The authenticated user's role does not allow the operation.
    #[error("forbidden: {message}")]
    Forbidden { message: String },

    #[error("{entity} not found: {identifier}")]
    NotFound { entity: String, identifier: String },

    #[error("{entity} already exists: {identifier}")]
    AlreadyExists { entity: String, identifier: String },

    #[error("validation error: {message}")]
    Validation { message: String },

    /// The connection pool is exhausted or the database is unreachable.
    #[error("database unavailable: {message}")]
    DatabaseUnavailable { message: String },

    #[error("database error: {source}")]
    Database { source: sqlx::Error },

    #[error("internal error: {message}")]
    Internal { message: String },
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Helper constructors for common patterns

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    pub fn not_found(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn already_exists(entity: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity: entity.into(),
            identifier: identifier.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<sqlx::Error> for ServiceError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            // A bounded acquire wait that ran out means the pool is
            // saturated, not that the query was wrong.
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => Self::DatabaseUnavailable {
                message: error.to_string(),
            },
            other => Self::Database { source: other },
        }
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    format!(
                        "{}: {}",
                        field,
                        error.message.as_ref().unwrap_or(&"Invalid value".into())
                    )
                })
            })
            .collect();

        Self::validation(messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_exhaustion_maps_to_database_unavailable() {
        let error = ServiceError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(error, ServiceError::DatabaseUnavailable { .. }));
    }

    #[test]
    fn other_sqlx_errors_map_to_database() {
        let error = ServiceError::from(sqlx::Error::RowNotFound);
        assert!(matches!(error, ServiceError::Database { .. }));
    }
}
