use crate::config::settings::Settings;
use crate::config::AppConfig;
use crate::core::fetcher::HttpsEndpoint;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::fmt;

/// What a run would do with the given configuration. Building one checks
/// everything a run checks up front, but opens no connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub endpoint: HttpsEndpoint,
    pub timeout_seconds: u64,
    /// `user@host:port[/database]`, never the password.
    pub database: String,
    pub mail_program: String,
    pub recipient: String,
    pub subject: String,
}

impl Plan {
    pub fn new(settings: &Settings, config: &AppConfig) -> Result<Self> {
        settings.validate()?;
        config.validate()?;

        let endpoint = HttpsEndpoint::parse(&settings.fetch.endpoint)?;
        let db = &config.database;
        let mut database = format!("{}@{}:{}", db.user, db.host, db.port()?);
        if let Some(name) = &db.database {
            database.push('/');
            database.push_str(name);
        }

        Ok(Self {
            endpoint,
            timeout_seconds: settings.fetch.timeout_seconds,
            database,
            mail_program: settings.mail.program.clone(),
            recipient: config.admin_email.clone(),
            subject: settings.mail.subject.clone(),
        })
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Endpoint:  {}", self.endpoint)?;
        writeln!(f, "Timeout:   {}s", self.timeout_seconds)?;
        writeln!(f, "Database:  {}", self.database)?;
        write!(
            f,
            "Mail:      {} -> {} (subject \"{}\")",
            self.mail_program, self.recipient, self.subject
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ADMIN_EMAIL, DB_HOST, DB_NAME, DB_PASSWORD, DB_USER};
    use crate::utils::error::{ConfigError, SecureEtlError};

    fn config() -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            DB_HOST => Some("db.internal".to_string()),
            DB_USER => Some("etl".to_string()),
            DB_PASSWORD => Some("hunter2".to_string()),
            DB_NAME => Some("app".to_string()),
            ADMIN_EMAIL => Some("a@x.com".to_string()),
            _ => None,
        })
    }

    #[test]
    fn test_plan_describes_run_without_password() {
        let plan = Plan::new(&Settings::default(), &config()).unwrap();

        assert_eq!(plan.database, "etl@db.internal:3306/app");
        let rendered = plan.to_string();
        assert!(rendered.contains("https://secure-api.com/get-data"));
        assert!(rendered.contains("a@x.com"));
        assert!(rendered.contains("User Input"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn test_plaintext_endpoint_is_rejected() {
        let mut settings = Settings::default();
        settings.fetch.endpoint = "http://insecure-api.com/get-data".to_string();

        let err = Plan::new(&settings, &config()).unwrap_err();

        assert!(matches!(err, SecureEtlError::Config(ConfigError::InvalidValue { .. })));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_environment_is_rejected() {
        let err = Plan::new(&Settings::default(), &AppConfig::from_lookup(|_| None)).unwrap_err();

        assert!(matches!(err, SecureEtlError::Config(ConfigError::Missing { .. })));
    }
}
