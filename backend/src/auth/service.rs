//! Core business logic for the authentication system.

use crate::auth::models::{LoginRequest, TokenResponse};
use crate::database::models::User;
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::jwt::JwtUtils;
use crate::utils::password;
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// Authentication service for handling login and token resolution.
///
/// Constructed once at startup with the already-loaded signing secret and
/// shared with handlers and middleware; cloning is cheap.
#[derive(Clone)]
pub struct AuthService {
    pool: PgPool,
    jwt_utils: Arc<JwtUtils>,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(pool: PgPool, jwt_utils: JwtUtils) -> Self {
        AuthService {
            pool,
            jwt_utils: Arc::new(jwt_utils),
        }
    }

    /// Authenticate a user by username and password and issue a token.
    ///
    /// Fails with `NotFound` for an unknown username and
    /// `InvalidCredentials` for a password mismatch; the caller can
    /// distinguish the two only by kind, the messages carry no credential
    /// detail. There is no lockout and no rate limiting.
    pub async fn login(&self, login_request: LoginRequest) -> ServiceResult<TokenResponse> {
        login_request.validate()?;

        let user_repo = UserRepository::new(&self.pool);
        let user = user_repo
            .get_by_username(&login_request.username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", &login_request.username))?;

        if !password::verify_password(&login_request.password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        let token = self.jwt_utils.issue_token(&user.username)?;

        Ok(TokenResponse { token })
    }

    /// Resolve a bearer token to its user.
    ///
    /// The token must carry a valid signature and an unexpired claim set,
    /// and the embedded username must still exist in the credential
    /// store. The resolved user becomes the current user for the rest of
    /// the request.
    pub async fn authenticate(&self, token: &str) -> ServiceResult<User> {
        let claims = self.jwt_utils.validate_token(token)?;

        let user_repo = UserRepository::new(&self.pool);
        let user = user_repo
            .get_by_username(claims.username())
            .await?
            .ok_or_else(|| ServiceError::not_found("User", claims.username()))?;

        Ok(user)
    }
}
