//! User business logic service.
//!
//! The request path only ever reads users; the single write here is the
//! startup bootstrap that seeds the first admin when configured.

use crate::config::Config;
use crate::database::models::{CreateUser, User, UserRole};
use crate::errors::{ServiceError, ServiceResult};
use crate::repositories::user_repository::UserRepository;
use crate::utils::password;
use sqlx::PgPool;
use validator::Validate;

pub struct UserService<'a> {
    /// Shared database connection pool
    pool: &'a PgPool,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Creates a new user with a hashed password.
    ///
    /// # Errors
    /// Returns `ServiceError` for validation failures or a duplicate
    /// username.
    pub async fn create_user(&self, create_user: CreateUser) -> ServiceResult<User> {
        create_user.validate()?;

        let repo = UserRepository::new(self.pool);

        if repo.get_by_username(&create_user.username).await?.is_some() {
            return Err(ServiceError::already_exists("User", &create_user.username));
        }

        let password_hash = password::hash_password(&create_user.password)?;

        let user = repo
            .insert(&create_user.username, &password_hash, create_user.role)
            .await?;

        Ok(user)
    }

    /// Seeds the bootstrap admin from the environment configuration.
    ///
    /// Does nothing when the bootstrap variables are unset or the user
    /// already exists; existing rows are never modified.
    pub async fn ensure_bootstrap_admin(&self, config: &Config) -> ServiceResult<()> {
        let (Some(username), Some(password)) = (
            config.bootstrap_admin_username.as_deref(),
            config.bootstrap_admin_password.as_deref(),
        ) else {
            return Ok(());
        };

        let repo = UserRepository::new(self.pool);
        if repo.get_by_username(username).await?.is_some() {
            return Ok(());
        }

        self.create_user(CreateUser {
            username: username.to_string(),
            password: password.to_string(),
            role: UserRole::Admin,
        })
        .await?;

        tracing::info!("created bootstrap admin user {}", username);
        Ok(())
    }
}
