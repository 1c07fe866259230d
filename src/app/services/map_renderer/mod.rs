//! Map renderer for status-tagged marker records
//!
//! Turns an ordered set of marker records into a single output document:
//! a self-contained Leaflet HTML page, a KML document, or a GeoJSON
//! FeatureCollection. Styling assigns each record a colored, lettered icon
//! keyed to its status category, and the whole document is produced in one
//! pass after all records are loaded.
//!
//! ## Architecture
//!
//! The renderer is organized into logical components:
//! - [`renderer`] - Render orchestration, formats, and render statistics
//! - [`styling`] - Per-category marker label allocation
//! - [`html`] - Leaflet page output
//! - [`kml`] - KML 2.2 output
//! - [`geojson`] - GeoJSON FeatureCollection output
//!
//! ## Usage
//!
//! ```rust
//! use pinmap::app::models::MarkerRecord;
//! use pinmap::app::services::map_renderer::{MapRenderer, RenderFormat};
//! use pinmap::config::Config;
//!
//! let renderer = MapRenderer::from_config(&Config::default());
//! let records = vec![MarkerRecord::new(18.52, 73.85, "enrolled")];
//! let document = renderer.render(&records, RenderFormat::Html).unwrap();
//!
//! assert!(document.content.contains("markers/green_MarkerA.png"));
//! ```

pub mod geojson;
pub mod html;
pub mod kml;
pub mod renderer;
pub mod styling;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use renderer::{MapRenderer, RenderFormat, RenderStats, RenderedDocument};
pub use styling::LabelAllocator;
