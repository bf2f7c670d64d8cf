//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`RT_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use tensor_core::{NameCollisionPolicy, RotateTensorsFilter, RotationAngles};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Filter configuration
    #[serde(default)]
    pub filter: FilterConfig,
    /// Demo mesh configuration
    #[serde(default)]
    pub demo: DemoConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`RT_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // RT_FILTER__ROTATION="[0, 90, 0]" -> filter.rotation = [0, 90, 0]
        figment = figment.merge(Env::prefixed("RT_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Filter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Rotation about x, y, z in degrees
    pub rotation: [f64; 3],
    /// What to do when `<name>(rotated)` already exists
    pub name_collision: NameCollisionPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            rotation: [0.0, 0.0, 0.0],
            name_collision: NameCollisionPolicy::Overwrite,
        }
    }
}

impl FilterConfig {
    /// Rotation as an angle triple
    pub fn rotation_angles(&self) -> RotationAngles {
        self.rotation.into()
    }

    /// Build a filter with these settings
    pub fn build_filter(&self) -> RotateTensorsFilter {
        RotateTensorsFilter::new()
            .with_rotation(self.rotation_angles())
            .with_name_collision(self.name_collision)
    }
}

/// Demo mesh configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Number of hexahedral cells along x
    pub cells: usize,
    /// Uniaxial stress magnitude along x
    pub stress: f64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            cells: 4,
            stress: 100.0,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
