use crate::utils::error::ConfigError;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub fn validate_url_scheme(field_name: &str, url_str: &str, allowed: &[&str]) -> Result<(), ConfigError> {
    if url_str.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) if allowed.contains(&url.scheme()) => Ok(()),
        Ok(url) => Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            reason: format!(
                "Unsupported URL scheme: {} (allowed: {})",
                url.scheme(),
                allowed.join(", ")
            ),
        }),
        Err(e) => Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

/// 空字串視為未設定
pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Missing {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

pub fn validate_email_like(field_name: &str, value: &str) -> Result<(), ConfigError> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let re = EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@\-][^\s@]*@[^\s@]+$").expect("email pattern is valid")
    });

    validate_non_empty_string(field_name, value)?;
    if !re.is_match(value) {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            reason: "Value must look like user@host".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<(), ConfigError> {
    if value < min || value > max {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            reason: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}
