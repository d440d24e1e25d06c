//! mylib Configuration
//!
//! Handles parsing and management of mylib.toml configuration files.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use mylib_core::DegeneratePolicy;

/// Name of the configuration file searched for by [`MylibConfig::find_and_load`].
pub const CONFIG_FILE: &str = "mylib.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching mylib.toml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MylibConfig {
    /// Module registration
    #[serde(default)]
    pub module: ModuleConfig,

    /// Quadratic solver settings
    #[serde(default)]
    pub solver: SolverConfig,

    /// Table constructor limits
    #[serde(default)]
    pub table: TableConfig,
}

impl MylibConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: MylibConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir()?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let config_path = dir.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::load(&config_path);
            }
            if !dir.pop() {
                // Reached root without finding config
                return Ok(Self::default());
            }
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Module registration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleConfig {
    /// Name the functions are registered under (`<name>.solve`)
    #[serde(default = "default_module_name")]
    pub name: String,
}

fn default_module_name() -> String {
    "mylib".to_string()
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: default_module_name(),
        }
    }
}

/// Handling of a zero leading coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DegenerateMode {
    /// Report a degenerate-equation failure
    #[default]
    Reject,
    /// Return the unguarded IEEE result
    Propagate,
}

impl From<DegenerateMode> for DegeneratePolicy {
    fn from(mode: DegenerateMode) -> Self {
        match mode {
            DegenerateMode::Reject => DegeneratePolicy::Reject,
            DegenerateMode::Propagate => DegeneratePolicy::Propagate,
        }
    }
}

/// Quadratic solver settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub degenerate: DegenerateMode,
}

/// Table constructor limits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Largest size hint honoured per table part; larger hints are clamped
    #[serde(default = "default_max_prealloc")]
    pub max_prealloc: usize,
}

fn default_max_prealloc() -> usize {
    1 << 16
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_prealloc: default_max_prealloc(),
        }
    }
}
