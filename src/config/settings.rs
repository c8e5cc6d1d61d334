use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url_scheme, Validate};
use serde::Deserialize;
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str = "https://secure-api.com/get-data";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAIL_PROGRAM: &str = "mail";
pub const DEFAULT_SUBJECT: &str = "User Input";

/// Non-secret tunables. Credentials are never read from this file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub fetch: FetchSettings,
    pub mail: MailSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchSettings {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MailSettings {
    pub program: String,
    pub subject: String,
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            program: DEFAULT_MAIL_PROGRAM.to_string(),
            subject: DEFAULT_SUBJECT.to_string(),
        }
    }
}

impl Settings {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let display = path.as_ref().display().to_string();
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::from_toml_str(&content).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url_scheme("fetch.endpoint", &self.fetch.endpoint, &["https"])?;
        validate_range("fetch.timeout_seconds", self.fetch.timeout_seconds, 1, 600)?;
        validate_non_empty_string("mail.program", &self.mail.program)?;
        validate_non_empty_string("mail.subject", &self.mail.subject)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_when_file_is_empty() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.fetch.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.mail.subject, "User Input");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml_str(
            r#"
[fetch]
timeout_seconds = 5

[mail]
program = "/usr/bin/mailx"
"#,
        )
        .unwrap();

        assert_eq!(settings.fetch.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(settings.fetch.timeout_seconds, 5);
        assert_eq!(settings.mail.program, "/usr/bin/mailx");
        assert_eq!(settings.mail.subject, DEFAULT_SUBJECT);
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(Settings::from_toml_str("[database]\npassword = \"p\"\n").is_err());
    }

    #[test]
    fn test_plaintext_endpoint_fails_validation() {
        let mut settings = Settings::default();
        settings.fetch.endpoint = "http://insecure-api.com/get-data".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[fetch]\nendpoint = \"https://example.org/data\"").unwrap();

        let settings = Settings::from_file(file.path()).unwrap();
        assert_eq!(settings.fetch.endpoint, "https://example.org/data");
    }

    #[test]
    fn test_from_missing_file() {
        let err = Settings::from_file("/nonexistent/secure-etl.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
