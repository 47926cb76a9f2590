use crate::utils::error::{GaleryaError, Result};
use regex::Regex;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(GaleryaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(GaleryaError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(GaleryaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(GaleryaError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(GaleryaError::ValidationError {
            message: format!("{} cannot be empty", field_name),
        });
    }
    Ok(())
}

/// 與瀏覽器 `type="email"` 相同程度的寬鬆檢查
pub fn validate_email(field_name: &str, value: &str) -> Result<()> {
    let re = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").map_err(|e| GaleryaError::ConfigError {
        message: format!("Invalid email pattern: {}", e),
    })?;

    if !re.is_match(value.trim()) {
        return Err(GaleryaError::ValidationError {
            message: format!("{} must be a valid email address", field_name),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(GaleryaError::ValidationError {
            message: format!(
                "{} must be one of: {} (got '{}')",
                field_name,
                allowed.join(", "),
                value
            ),
        });
    }
    Ok(())
}
