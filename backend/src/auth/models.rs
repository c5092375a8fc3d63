//! Data structures for authentication-related entities.

use crate::database::models::{User, UserRole};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login response carrying the signed access token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// The authenticated user attached to a request by the authorization
/// gate, available to the wrapped handler through request extensions.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub id: i32,
    pub username: String,
    pub role: UserRole,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        CurrentUser {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
