//! Configuration management and validation.
//!
//! Provides layered configuration for the map pipeline: built-in defaults,
//! an optional TOML config file, `PINMAP_*` environment variables, and
//! finally CLI argument overrides applied by the commands.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_ASSETS_DIR, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG,
    DEFAULT_MAP_TITLE, DEFAULT_TILE_ATTRIBUTION, DEFAULT_TILE_URL, DEFAULT_ZOOM, ENV_PREFIX,
    MAX_CONCURRENT_READS, MAX_ZOOM,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map view settings carried into the rendered document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Initial map center latitude in decimal degrees
    pub center_lat: f64,

    /// Initial map center longitude in decimal degrees
    pub center_lng: f64,

    /// Initial tile zoom level
    pub zoom: u8,

    /// Document title shown in the browser tab and page header
    pub title: String,

    /// Raster tile URL template
    pub tile_url: String,

    /// Attribution markup required by the tile provider
    pub tile_attribution: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER_LAT,
            center_lng: DEFAULT_CENTER_LNG,
            zoom: DEFAULT_ZOOM,
            title: DEFAULT_MAP_TITLE.to_string(),
            tile_url: DEFAULT_TILE_URL.to_string(),
            tile_attribution: DEFAULT_TILE_ATTRIBUTION.to_string(),
        }
    }
}

/// Pipeline behavior settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Output document path; `None` selects a format-specific default name
    pub output_path: Option<PathBuf>,

    /// Render format applied when the CLI does not specify one
    /// (one of `html`, `kml`, `geojson`)
    pub default_format: Option<String>,

    /// Overwrite an existing output document without confirmation
    pub force_overwrite: bool,

    /// Maximum number of files read concurrently
    pub workers: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            output_path: None,
            default_format: None,
            force_overwrite: false,
            workers: num_cpus::get().min(MAX_CONCURRENT_READS).max(1),
        }
    }
}

/// Marker styling settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylingConfig {
    /// Directory of pre-provisioned icon images, relative to the document
    pub assets_dir: String,
}

impl Default for StylingConfig {
    fn default() -> Self {
        Self {
            assets_dir: DEFAULT_ASSETS_DIR.to_string(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter: error, warn, info, debug, trace
    pub level: String,

    /// Emit timestamped structured output (disabled in quiet mode)
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            structured: true,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub map: MapConfig,
    pub processing: ProcessingConfig,
    pub styling: StylingConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Default config file location under the user config directory,
    /// e.g. `~/.config/pinmap/config.toml`
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(base.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file '{}'", path.display()), e)
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            Error::config_parse(path.display().to_string(), e.to_string(), Some(e))
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration with the layered precedence:
    /// defaults, then config file (when present), then environment variables.
    /// CLI overrides are applied afterwards by the command layer.
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };

        apply_overrides(&mut config, |name| {
            std::env::var(format!("{}{}", ENV_PREFIX, name)).ok()
        })?;

        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.map.center_lat) {
            return Err(Error::configuration(format!(
                "Map center latitude {} outside valid range [-90, 90]",
                self.map.center_lat
            )));
        }

        if !(-180.0..=180.0).contains(&self.map.center_lng) {
            return Err(Error::configuration(format!(
                "Map center longitude {} outside valid range [-180, 180]",
                self.map.center_lng
            )));
        }

        if self.map.zoom > MAX_ZOOM {
            return Err(Error::configuration(format!(
                "Zoom level {} exceeds maximum {}",
                self.map.zoom, MAX_ZOOM
            )));
        }

        if self.processing.workers == 0 {
            return Err(Error::configuration(
                "Worker count must be at least 1".to_string(),
            ));
        }

        if let Some(format) = &self.processing.default_format {
            if !matches!(format.as_str(), "html" | "kml" | "geojson") {
                return Err(Error::configuration(format!(
                    "Unknown default format '{}' (expected html, kml, or geojson)",
                    format
                )));
            }
        }

        if self.styling.assets_dir.is_empty() {
            return Err(Error::configuration(
                "Assets directory must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Create the parent directory of the output path when it is missing
    pub fn ensure_output_parent(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::io(
                        format!("Failed to create output directory '{}'", parent.display()),
                        e,
                    )
                })?;
            }
        }
        Ok(())
    }
}

/// Apply `PINMAP_*` style overrides from a variable lookup.
/// Factored over the lookup so tests can drive it without touching the
/// process environment.
fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup("CENTER_LAT") {
        config.map.center_lat = value.parse().map_err(|_| {
            Error::configuration(format!("Invalid {}CENTER_LAT value '{}'", ENV_PREFIX, value))
        })?;
    }
    if let Some(value) = lookup("CENTER_LNG") {
        config.map.center_lng = value.parse().map_err(|_| {
            Error::configuration(format!("Invalid {}CENTER_LNG value '{}'", ENV_PREFIX, value))
        })?;
    }
    if let Some(value) = lookup("ZOOM") {
        config.map.zoom = value.parse().map_err(|_| {
            Error::configuration(format!("Invalid {}ZOOM value '{}'", ENV_PREFIX, value))
        })?;
    }
    if let Some(value) = lookup("TITLE") {
        config.map.title = value;
    }
    if let Some(value) = lookup("TILE_URL") {
        config.map.tile_url = value;
    }
    if let Some(value) = lookup("OUTPUT_PATH") {
        config.processing.output_path = Some(PathBuf::from(value));
    }
    if let Some(value) = lookup("FORMAT") {
        config.processing.default_format = Some(value);
    }
    if let Some(value) = lookup("WORKERS") {
        config.processing.workers = value.parse().map_err(|_| {
            Error::configuration(format!("Invalid {}WORKERS value '{}'", ENV_PREFIX, value))
        })?;
    }
    if let Some(value) = lookup("ASSETS_DIR") {
        config.styling.assets_dir = value;
    }
    if let Some(value) = lookup("LOG_LEVEL") {
        config.logging.level = value;
    }

    Ok(())
}
