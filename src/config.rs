//! Configuration management for the admin application
//!
//! Handles loading, parsing and validation of the TOML configuration file.

use crate::constants::{
    CONFIG_GENERATED, SIDEBAR_DEFAULT_WIDTH, SIDEBAR_MAX_WIDTH, SIDEBAR_MIN_WIDTH, TICK_INTERVAL_MS,
    TOAST_DEFAULT_MS, TOAST_ERROR_MS, TOAST_WARNING_MS,
};
use crate::theme::Theme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub toast: ToastConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Theme preset name ("dark" or "light"), or a path to a theme file
    pub theme: String,
    /// Enable mouse capture
    pub mouse_enabled: bool,
    /// Sidebar width in columns
    pub sidebar_width: u16,
    /// Application tick interval in milliseconds
    pub tick_rate_ms: u64,
}

/// Toast lifetime configuration (milliseconds, 0 = sticky)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub default_duration_ms: u64,
    pub warning_duration_ms: u64,
    pub error_duration_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable file logging
    pub enabled: bool,
    /// Log file path (relative paths resolve against the working directory)
    pub file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            mouse_enabled: false,
            sidebar_width: SIDEBAR_DEFAULT_WIDTH,
            tick_rate_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: TOAST_DEFAULT_MS,
            warning_duration_ms: TOAST_WARNING_MS,
            error_duration_ms: TOAST_ERROR_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: "lumen-admin.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        match Self::find_config_file()? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("lumen.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("lumen").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.sidebar_width < SIDEBAR_MIN_WIDTH || self.ui.sidebar_width > SIDEBAR_MAX_WIDTH {
            anyhow::bail!(
                "sidebar_width must be between {} and {} columns, got {}",
                SIDEBAR_MIN_WIDTH,
                SIDEBAR_MAX_WIDTH,
                self.ui.sidebar_width
            );
        }

        if self.ui.tick_rate_ms < 16 || self.ui.tick_rate_ms > 1000 {
            anyhow::bail!("tick_rate_ms must be between 16 and 1000, got {}", self.ui.tick_rate_ms);
        }

        // A preset name resolves through the registry; anything else must be
        // a readable theme file.
        let theme = &self.ui.theme;
        if Theme::preset(theme).is_err() && !Path::new(theme).exists() {
            anyhow::bail!(
                "theme '{}' is neither a built-in preset ({}) nor an existing file",
                theme,
                Theme::preset_names().join(", ")
            );
        }

        if self.logging.enabled && self.logging.file.is_empty() {
            anyhow::bail!("logging.file cannot be empty when logging is enabled");
        }

        Ok(())
    }

    /// Resolve the configured theme
    pub fn resolve_theme(&self) -> Result<Theme> {
        if let Ok(theme) = Theme::preset(&self.ui.theme) {
            return Ok(theme);
        }
        Theme::load_from_file(&self.ui.theme)
            .with_context(|| format!("Failed to load theme file: {}", self.ui.theme))
    }

    /// Persist the current configuration (used for the theme toggle)
    pub fn save(&self) -> Result<()> {
        let path = Self::get_default_config_path()?;
        self.save_to_file(&path)
    }

    /// Persist the current configuration to a specific file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
            }
        }

        std::fs::write(&path, toml_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        let header = format!(
            "# lumen-admin configuration file\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
            }
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("lumen"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
