#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
use std::path::Path;
use std::time::Duration;
use toml_config::TomlConfig;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const API_URL_ENV: &str = "GALERYA_API_URL";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// 實際生效的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl AppConfig {
    /// 優先順序：CLI > 設定檔 > 環境變數 > 預設值
    pub fn resolve(
        cli_api_url: Option<&str>,
        file: Option<&TomlConfig>,
        env_api_url: Option<String>,
    ) -> Self {
        let api_base_url = cli_api_url
            .map(str::to_string)
            .or_else(|| file.and_then(TomlConfig::base_url).map(str::to_string))
            .or(env_api_url.filter(|url| !url.trim().is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_seconds = file
            .and_then(TomlConfig::timeout_seconds)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            api_base_url,
            timeout_seconds,
        }
    }

    /// 讀取設定檔（若有）與環境變數後解析
    pub fn load(cli_api_url: Option<&str>, config_path: Option<&Path>) -> Result<Self> {
        let file = match config_path {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let config = Self::resolve(cli_api_url, file.as_ref(), std::env::var(API_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_base_url", &self.api_base_url)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
