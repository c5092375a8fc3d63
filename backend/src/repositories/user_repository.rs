//! Database repository for user management operations.
//!
//! Provides lookups against the credential store plus the single insert
//! used by the bootstrap path. All reads are auto-commit SELECTs on the
//! shared pool.

use crate::database::models::{User, UserRole};
use crate::errors::ServiceResult;
use sqlx::PgPool;

/// Repository for user database operations.
pub struct UserRepository<'a> {
    /// Shared PostgreSQL connection pool
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// * `pool` - Reference to the PostgreSQL connection pool
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Retrieves a user by their username.
    ///
    /// # Arguments
    /// * `username` - Username to search for
    ///
    /// # Returns
    /// `Some(User)` if found, `None` otherwise
    pub async fn get_by_username(&self, username: &str) -> ServiceResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, role_id, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Inserts a new user row.
    ///
    /// # Arguments
    /// * `username` - Unique username
    /// * `password_hash` - Bcrypt hash of the user's password
    /// * `role` - Staff role
    ///
    /// # Returns
    /// The newly created User with all fields populated
    pub async fn insert(
        &self,
        username: &str,
        password_hash: &str,
        role: UserRole,
    ) -> ServiceResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role_id)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, role_id, created_at, updated_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }
}
