//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "PONTO_API_URL";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// General settings
    #[serde(default)]
    pub general: GeneralSettings,

    /// Backend API settings
    #[serde(default)]
    pub api: ApiSettings,

    /// TUI settings
    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralSettings {
    /// Data directory for the auth token and the TUI log
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the ponto backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuiSettings {
    /// Rows per page on the pontos and faculdades lists
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,

    /// How long a toast stays on screen, in seconds
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,

    /// Link shown by "Mais Informações" on the home screen
    #[serde(default = "default_info_url")]
    pub info_url: String,
}

// Default value functions

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", crate::APP_NAME, crate::APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~/.local/share/ponto"))
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_items_per_page() -> usize {
    7
}

fn default_toast_secs() -> u64 {
    3
}

fn default_info_url() -> String {
    "https://www.controledeponto.netlify.app".to_string()
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
            toast_secs: default_toast_secs(),
            info_url: default_info_url(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let mut settings = Self::load_from(&config_path)?;
        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from a specific file, without env overrides
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", crate::APP_NAME, crate::APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &Path) -> Result<()> {
        Self::default().write_to(path)
    }

    /// Serialize these settings to a file
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Set a single value addressed as `section.key`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "general.data_dir" => self.general.data_dir = PathBuf::from(value),
            "general.log_level" => self.general.log_level = value.to_string(),
            "api.base_url" => self.api.base_url = value.trim_end_matches('/').to_string(),
            "api.timeout_secs" => {
                self.api.timeout_secs = value
                    .parse()
                    .with_context(|| format!("Invalid number for {}: {}", key, value))?;
            }
            "tui.items_per_page" => {
                let per_page: usize = value
                    .parse()
                    .with_context(|| format!("Invalid number for {}: {}", key, value))?;
                if per_page == 0 {
                    anyhow::bail!("tui.items_per_page must be at least 1");
                }
                self.tui.items_per_page = per_page;
            }
            "tui.toast_secs" => {
                self.tui.toast_secs = value
                    .parse()
                    .with_context(|| format!("Invalid number for {}: {}", key, value))?;
            }
            "tui.info_url" => self.tui.info_url = value.to_string(),
            other => anyhow::bail!("Unknown configuration key: {}", other),
        }
        Ok(())
    }

    /// Request timeout for the backend client
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    /// Get the auth token path
    pub fn token_path(&self) -> PathBuf {
        self.general.data_dir.join("auth_token")
    }

    /// Get the log file used while the TUI owns the terminal
    pub fn log_path(&self) -> PathBuf {
        self.general.data_dir.join("ponto.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_dirs(&self) -> Result<()> {
        std::fs::create_dir_all(&self.general.data_dir)?;
        Ok(())
    }
}
