use serde::Deserialize;
use std::time::Duration;

use crate::contexts::ConfigError;
use crate::utils::config::*;
use crate::utils::file_utils;

/// Settings for the autocomplete backend, loaded once at startup
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeocoderConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl GeocoderConfig {
    /// Load `~/.wayfinder/geocoder.json` if present, then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match file_utils::get_settings_path() {
            Some(path) => match file_utils::read_optional(&path)? {
                Some(content) => {
                    log::info!("Loading geocoder settings from {}", path.display());
                    Self::from_json(&content)?
                }
                None => Self::default(),
            },
            None => Self::default(),
        };

        config.apply_overrides(|name| std::env::var(name).ok());

        if config.api_key.is_empty() {
            log::warn!("No geocoder API key configured; set {}", API_KEY_ENV);
        }

        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Overwrite fields from non-empty variables returned by `lookup`
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(key) = non_empty(API_KEY_ENV) {
            self.api_key = key;
        }
        if let Some(url) = non_empty(BASE_URL_ENV) {
            self.base_url = url;
        }
    }

    /// Full URL of the autocomplete endpoint, without query parameters
    pub fn autocomplete_endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), AUTOCOMPLETE_PATH)
    }

    /// Request timeout; `timeout_secs: 0` disables it
    pub fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
