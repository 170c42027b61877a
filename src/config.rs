//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`GEOVIEW_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use geoview_core::{DEFAULT_HEIGHT_SEGMENTS, DEFAULT_RADIAL_SEGMENTS, DEFAULT_WIDTH_SEGMENTS};
use geoview_parse::ParserOptions;
use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Tessellation defaults for curved solids
    #[serde(default)]
    pub geometry: GeometryConfig,
    /// Preset catalog settings
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Derivation cache settings
    #[serde(default)]
    pub cache: CacheConfig,
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
    /// 3. Environment variables (`GEOVIEW_*`)
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

        // GEOVIEW_GEOMETRY__RADIAL_SEGMENTS=64 -> geometry.radial_segments = 64
        figment = figment.merge(Env::prefixed("GEOVIEW_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }

    /// Parser options built from the geometry section
    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            radial_segments: self.geometry.radial_segments,
            width_segments: self.geometry.width_segments,
            height_segments: self.geometry.height_segments,
        }
    }
}

/// Geometry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryConfig {
    /// Segments around cylinders and cones
    pub radial_segments: u32,
    /// Segments around a sphere's equator
    pub width_segments: u32,
    /// Segments from pole to pole
    pub height_segments: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            radial_segments: DEFAULT_RADIAL_SEGMENTS,
            width_segments: DEFAULT_WIDTH_SEGMENTS,
            height_segments: DEFAULT_HEIGHT_SEGMENTS,
        }
    }
}

/// Catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// RON file with extra presets, merged over the built-in ones
    pub preset_file: Option<PathBuf>,
    /// Preset shown when no description is given
    pub default_preset: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            preset_file: None,
            default_preset: "cube".to_string(),
        }
    }
}

/// Cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Memoize derived shapes
    pub enabled: bool,
    /// Oldest entries are evicted beyond this many
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_entries: 256,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.geometry.radial_segments, 32);
        assert_eq!(config.catalog.default_preset, "cube");
        assert!(!config.cache.enabled);
        assert_eq!(config.cache.max_entries, 256);
        assert_eq!(config.debug.log_level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("radial_segments"));
        assert!(toml.contains("default_preset"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[geometry]\nradial_segments = 8\nwidth_segments = 8\nheight_segments = 4\n").unwrap();
        assert_eq!(config.geometry.radial_segments, 8);
        assert_eq!(config.catalog.default_preset, "cube");
        assert_eq!(config.parser_options().height_segments, 4);
    }
}
