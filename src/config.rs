//! Configuration handling for the TUI

use crate::api::{ApiClientOptions, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::state::{SortDirection, StatusFilter};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::warn;

/// Environment variable that overrides the configured API address
pub const API_URL_ENV: &str = "QUOTE_API_URL";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct QuoteConfig {
    /// Base URL of the studio's quote API
    pub api_base_url: Option<String>,
    /// Bearer token sent with admin requests
    pub access_token: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Dashboard status filter on startup
    pub status_filter: Option<String>,
    /// Dashboard sort direction on startup
    pub sort_direction: Option<String>,
    /// Show built-in sample submissions when the API is unreachable
    pub use_sample_data: Option<bool>,
}

impl QuoteConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "studio", "quote-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file, next to the app's local data
    pub fn log_dir() -> Option<PathBuf> {
        ProjectDirs::from("io", "studio", "quote-tui")
            .map(|dirs| dirs.data_local_dir().join("logs"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file, defaulting when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: QuoteConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the API base URL: environment, then file, then default
    pub fn api_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|url| !url.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    /// Connection settings for the API client
    pub fn api_options(&self) -> ApiClientOptions {
        ApiClientOptions {
            base_url: self.api_base_url(std::env::var(API_URL_ENV).ok()),
            access_token: self.access_token.clone(),
            timeout: Duration::from_secs(
                self.request_timeout_secs
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    pub fn status_filter(&self) -> StatusFilter {
        match self.status_filter.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = raw, "unknown status filter in config");
                StatusFilter::default()
            }),
            None => StatusFilter::default(),
        }
    }

    pub fn sort_direction(&self) -> SortDirection {
        match self.sort_direction.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = raw, "unknown sort direction in config");
                SortDirection::default()
            }),
            None => SortDirection::default(),
        }
    }

    pub fn use_sample_data(&self) -> bool {
        self.use_sample_data.unwrap_or(false)
    }
}
