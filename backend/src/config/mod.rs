//! Central module for application-wide configuration settings.
//!
//! All configuration is read from the environment exactly once at process
//! start; the rest of the application only ever sees this immutable struct.
//! Missing required values abort startup.

use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_username: String,
    pub db_password: String,
    pub db_name: String,
    pub db_max_connections: u32,
    pub db_acquire_timeout_seconds: u64,
    pub auth_secret_key: String,
    pub token_ttl_minutes: i64,
    pub server_port: u16,
    pub bootstrap_admin_username: Option<String>,
    pub bootstrap_admin_password: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let db_host = env::var("DB_HOST").context("DB_HOST not set")?;

        let db_port = env::var("DB_PORT")
            .unwrap_or_else(|_| "5432".to_string())
            .parse::<u16>()
            .context("DB_PORT must be a valid port number")?;

        let db_username = env::var("DB_USERNAME").context("DB_USERNAME not set")?;
        let db_password = env::var("DB_PASSWORD").context("DB_PASSWORD not set")?;
        let db_name = env::var("DB_NAME").context("DB_NAME not set")?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "40".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a valid number")?;

        let db_acquire_timeout_seconds = env::var("DB_ACQUIRE_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u64>()
            .context("DB_ACQUIRE_TIMEOUT_SECONDS must be a valid number")?;

        let auth_secret_key = env::var("AUTH_SECRET_KEY").context("AUTH_SECRET_KEY not set")?;

        let token_ttl_minutes = env::var("TOKEN_TTL_MINUTES")
            .unwrap_or_else(|_| "15".to_string())
            .parse::<i64>()
            .context("TOKEN_TTL_MINUTES must be a valid number")?;

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let bootstrap_admin_username = env::var("BOOTSTRAP_ADMIN_USERNAME").ok();
        let bootstrap_admin_password = env::var("BOOTSTRAP_ADMIN_PASSWORD").ok();

        Ok(Config {
            db_host,
            db_port,
            db_username,
            db_password,
            db_name,
            db_max_connections,
            db_acquire_timeout_seconds,
            auth_secret_key,
            token_ttl_minutes,
            server_port,
            bootstrap_admin_username,
            bootstrap_admin_password,
        })
    }
}
