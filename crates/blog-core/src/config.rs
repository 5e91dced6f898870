//! Runtime configuration.
//!
//! Every field has a default, so a partial JSON object (or none at all)
//! yields a usable configuration.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Cards per page on the public home page
    pub public_page_size: usize,
    /// Rows per page on admin lists
    pub admin_page_size: usize,
    /// How many articles the admin list fetches for client-side filtering
    pub admin_fetch_limit: usize,
    pub search_debounce_ms: u64,
    pub toast_ms: u64,
    pub redirect_delay_ms: u64,
    pub related_articles: usize,
    /// Send the bearer token on `DELETE /articles/{id}`
    pub authenticate_article_delete: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://test-fe.mysellerpintar.com/api".to_string(),
            public_page_size: 9,
            admin_page_size: 10,
            admin_fetch_limit: 100,
            search_debounce_ms: 400,
            toast_ms: 3000,
            redirect_delay_ms: 1500,
            related_articles: 3,
            authenticate_article_delete: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "apiBaseUrl",
                reason: "must not be empty",
            });
        }
        if self.public_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "publicPageSize",
                reason: "must be positive",
            });
        }
        if self.admin_page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "adminPageSize",
                reason: "must be positive",
            });
        }
        Ok(())
    }

    /// Validated config, or the defaults when `candidate` is unusable.
    pub fn or_default(candidate: Result<Self, ConfigError>) -> Self {
        match candidate.and_then(|c| c.validate().map(|_| c)) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("config rejected, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json(r#"{"apiBaseUrl":"http://localhost:3000/api","adminPageSize":25}"#).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
        assert_eq!(config.admin_page_size, 25);
        assert_eq!(config.public_page_size, 9);
        assert_eq!(config.search_debounce(), Duration::from_millis(400));
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let err = AppConfig::from_json(r#"{"publicPageSize":0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "publicPageSize", .. }));
    }

    #[test]
    fn test_or_default() {
        let config = AppConfig::or_default(AppConfig::from_json("not json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_log_level() {
        let mut config = AppConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.log_level(), log::LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.log_level(), log::LevelFilter::Info);
    }
}
