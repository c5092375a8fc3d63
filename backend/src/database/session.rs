//! Request-scoped database sessions.
//!
//! Every handler that touches the database does so through a [`DbSession`]:
//! one transaction per inbound request, begun before the handler body runs
//! and released exactly once when the request ends. Handlers that write call
//! [`DbSession::commit`]; every other exit path (handler error, early
//! return, client disconnect) rolls the transaction back through the
//! transaction's drop guarantee.

use crate::api::common::service_error_to_http;
use crate::errors::{ServiceError, ServiceResult};
use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use sqlx::{PgConnection, PgPool, Postgres, Transaction};

/// A transactional handle bound to the lifetime of one inbound request.
pub struct DbSession {
    tx: Transaction<'static, Postgres>,
}

impl DbSession {
    /// Begins a new session on a connection from the shared pool.
    ///
    /// Fails with `DatabaseUnavailable` when the pool stays exhausted past
    /// its bounded acquire timeout.
    pub async fn begin(pool: &PgPool) -> ServiceResult<Self> {
        let tx = pool.begin().await?;
        Ok(DbSession { tx })
    }

    /// The open connection backing this session.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut self.tx
    }

    /// Commits the session, consuming it. Without this call the
    /// transaction rolls back when the session is dropped.
    pub async fn commit(self) -> ServiceResult<()> {
        self.tx.commit().await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pool = parts
            .extensions
            .get::<PgPool>()
            .cloned()
            .ok_or_else(|| {
                service_error_to_http(ServiceError::internal("database pool not configured"))
            })?;

        DbSession::begin(&pool).await.map_err(service_error_to_http)
    }
}
