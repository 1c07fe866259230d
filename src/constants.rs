//! Application constants for pinmap
//!
//! This module contains all configuration constants, default values,
//! and mappings used throughout the pinmap application.

// =============================================================================
// Map Defaults
// =============================================================================

/// Default map center latitude (Pune, India)
pub const DEFAULT_CENTER_LAT: f64 = 18.520679;

/// Default map center longitude (Pune, India)
pub const DEFAULT_CENTER_LNG: f64 = 73.8565;

/// Default map zoom level
pub const DEFAULT_ZOOM: u8 = 12;

/// Highest zoom level accepted by the tile scheme
pub const MAX_ZOOM: u8 = 21;

/// Default map document title
pub const DEFAULT_MAP_TITLE: &str = "Status marker map";

/// OpenStreetMap raster tile URL template
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution string required by the default tile provider
pub const DEFAULT_TILE_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Leaflet assets pinned to a known-good release
pub const LEAFLET_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.css";
pub const LEAFLET_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/leaflet/1.9.4/leaflet.js";

// =============================================================================
// Record Format
// =============================================================================

/// Recognized status field values
pub mod status_labels {
    pub const ENROLLED: &str = "enrolled";
    pub const SKILLED: &str = "skilled";
    pub const PLACED: &str = "placed";
}

// =============================================================================
// Marker Styling
// =============================================================================

/// Marker label alphabet, cycled per category
pub const LABEL_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of labels before the sequence wraps back to 'A'
pub const LABEL_CYCLE: usize = LABEL_LETTERS.len();

/// Marker icon colors by status category
pub mod marker_colors {
    /// Recognized categories keep the source palette
    pub const ENROLLED: &str = "green";
    pub const SKILLED: &str = "yellow";
    pub const PLACED: &str = "pink";

    /// Fallback color for unrecognized status values
    pub const UNKNOWN: &str = "gray";
}

/// Directory holding the pre-provisioned marker icon assets,
/// relative to the map document
pub const DEFAULT_ASSETS_DIR: &str = "markers";

// =============================================================================
// File and Output Constants
// =============================================================================

/// Extension used when discovering input files in a directory
pub const INPUT_FILE_EXTENSION: &str = "csv";

/// Default output filenames per render format
pub const HTML_OUTPUT_FILENAME: &str = "map.html";
pub const KML_OUTPUT_FILENAME: &str = "map.kml";
pub const GEOJSON_OUTPUT_FILENAME: &str = "map.geojson";

/// Config file name looked up under the user config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Subdirectory of the user config directory holding pinmap settings
pub const CONFIG_DIR_NAME: &str = "pinmap";

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "PINMAP_";

// =============================================================================
// Processing Configuration Defaults
// =============================================================================

/// Upper bound on concurrent file reads regardless of core count
pub const MAX_CONCURRENT_READS: usize = 8;

/// Number of warning examples echoed in end-of-run summaries
pub const SUMMARY_WARNING_EXAMPLES: usize = 5;

// =============================================================================
// Helper Functions
// =============================================================================

/// Cyclic marker label for the Nth record of a category (zero-indexed count)
pub fn label_letter(count: usize) -> char {
    LABEL_LETTERS[count % LABEL_CYCLE] as char
}

/// Icon filename for a color and label, e.g. `green_MarkerA.png`
pub fn icon_filename(color: &str, label: char) -> String {
    format!("{}_Marker{}.png", color, label)
}

/// Relative icon path under an assets directory
pub fn icon_path(assets_dir: &str, color: &str, label: char) -> String {
    format!("{}/{}", assets_dir, icon_filename(color, label))
}
