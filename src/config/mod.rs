#[cfg(feature = "cli")]
pub mod cli;
pub mod settings;

use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_email_like, validate_non_empty_string, Validate};
use secrecy::{ExposeSecret, SecretString};
use std::path::Path;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_PORT: &str = "DB_PORT";
pub const ADMIN_EMAIL: &str = "ADMIN_EMAIL";

pub const DEFAULT_DB_PORT: u16 = 3306;

#[derive(Debug)]
pub struct DatabaseConfig {
    pub host: String,
    pub user: String,
    pub password: SecretString,
    pub database: Option<String>,
    /// `DB_PORT` as read; parsed by [`DatabaseConfig::port`].
    pub port: Option<String>,
}

impl DatabaseConfig {
    pub fn port(&self) -> Result<u16, ConfigError> {
        match self.port.as_deref() {
            None => Ok(DEFAULT_DB_PORT),
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: DB_PORT.to_string(),
                reason: format!("'{}' is not a valid port number", raw),
            }),
        }
    }
}

impl Validate for DatabaseConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_non_empty_string(DB_HOST, &self.host)?;
        validate_non_empty_string(DB_USER, &self.user)?;
        validate_non_empty_string(DB_PASSWORD, self.password.expose_secret())?;
        if let Some(name) = &self.database {
            validate_non_empty_string(DB_NAME, name)?;
        }
        self.port()?;
        Ok(())
    }
}

/// Loads a `.env` file from the working directory or one of its parents.
/// Variables that are already set in the environment keep their values.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!("📁 Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!("⚠️ Ignoring .env file: {}", e),
    }
}

/// Like [`load_dotenv`] for an explicit path. Returns `false` when the file
/// does not exist.
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) -> Result<bool, ConfigError> {
    let path = path.as_ref();
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(e) if e.not_found() => Ok(false),
        Err(e) => Err(ConfigError::EnvFile {
            path: path.display().to_string(),
            message: e.to_string(),
        }),
    }
}

/// Values read from the process environment at startup.
#[derive(Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub admin_email: String,
}

impl AppConfig {
    /// Reads the environment without validating anything. Unset variables
    /// become empty strings; call [`Validate::validate`] before use.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| lookup(key).unwrap_or_default();
        let optional = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            database: DatabaseConfig {
                host: required(DB_HOST),
                user: required(DB_USER),
                password: SecretString::from(required(DB_PASSWORD)),
                database: optional(DB_NAME),
                port: optional(DB_PORT),
            },
            admin_email: required(ADMIN_EMAIL),
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        validate_email_like(ADMIN_EMAIL, &self.admin_email)?;

        tracing::debug!("✅ Environment configuration validation passed");
        Ok(())
    }
}
