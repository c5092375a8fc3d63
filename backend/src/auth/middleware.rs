//! Middleware for protecting authenticated routes and handling authorization.
//!
//! The gate resolves the bearer token to a user through the
//! authentication service, then matches the role exhaustively before the
//! wrapped handler runs. Unauthenticated callers are rejected before any
//! role check.

use crate::api::common::service_error_to_http;
use crate::auth::models::CurrentUser;
use crate::auth::service::AuthService;
use crate::database::models::{User, UserRole};
use crate::errors::{ServiceError, ServiceResult};
use axum::{
    extract::Request,
    http::{StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::future::Future;

/// Admin authorization gate.
///
/// On success the resolved [`CurrentUser`] is inserted into the request's
/// extensions for the wrapped handler.
pub async fn admin_gate(mut request: Request, next: Next) -> Result<Response, (StatusCode, String)> {
    let user = resolve_current_user(&request)
        .await
        .map_err(service_error_to_http)?;

    match user.role {
        UserRole::Admin => {
            request.extensions_mut().insert(CurrentUser::from(user));
            Ok(next.run(request).await)
        }
        UserRole::Doctor => {
            tracing::debug!("user {} denied admin access", user.username);
            Err(service_error_to_http(ServiceError::forbidden(
                "administrator role required",
            )))
        }
    }
}

fn resolve_current_user(request: &Request) -> impl Future<Output = ServiceResult<User>> + Send {
    // Extract everything that borrows `request` synchronously, before any
    // `.await`. The returned future owns only `AuthService` + the token
    // string, so it stays `Send` even though `&Request` is not (the axum
    // `Body` is not `Sync`).
    let inputs = (|| {
        let auth_service = request
            .extensions()
            .get::<AuthService>()
            .cloned()
            .ok_or_else(|| ServiceError::internal("auth service not configured"))?;

        let auth_header = request
            .headers()
            .get(AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .ok_or_else(|| ServiceError::invalid_token("missing Authorization header"))?;

        // Older clients send the raw token without a scheme.
        let token = auth_header
            .strip_prefix("Bearer ")
            .unwrap_or(auth_header)
            .to_owned();

        Ok::<_, ServiceError>((auth_service, token))
    })();

    async move {
        let (auth_service, token) = inputs?;
        auth_service.authenticate(&token).await
    }
}
