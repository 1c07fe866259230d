//! Map renderer producing a complete output document in a single pass

use tracing::{debug, warn};

use crate::app::models::{Marker, MarkerRecord, Status};
use crate::app::services::map_renderer::styling::LabelAllocator;
use crate::app::services::map_renderer::{geojson, html, kml};
use crate::config::{Config, MapConfig, StylingConfig};
use crate::constants::{GEOJSON_OUTPUT_FILENAME, HTML_OUTPUT_FILENAME, KML_OUTPUT_FILENAME};
use crate::Result;

/// Supported output document formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Self-contained Leaflet HTML page
    #[default]
    Html,
    /// KML 2.2 document
    Kml,
    /// GeoJSON FeatureCollection
    Geojson,
}

impl RenderFormat {
    /// Parse a format name as used on the command line and in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "html" => Some(Self::Html),
            "kml" => Some(Self::Kml),
            "geojson" => Some(Self::Geojson),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Kml => "kml",
            Self::Geojson => "geojson",
        }
    }

    /// Default output filename when none is given
    pub fn default_filename(&self) -> &'static str {
        match self {
            Self::Html => HTML_OUTPUT_FILENAME,
            Self::Kml => KML_OUTPUT_FILENAME,
            Self::Geojson => GEOJSON_OUTPUT_FILENAME,
        }
    }
}

/// Statistics from a single render pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Number of records styled (every record, including skipped ones)
    pub markers_styled: usize,

    /// Number of markers emitted into the document
    pub markers_rendered: usize,

    /// Number of markers skipped because their position is not finite
    pub markers_skipped: usize,

    /// Emitted markers in the enrolled category
    pub enrolled_markers: usize,

    /// Emitted markers in the skilled category
    pub skilled_markers: usize,

    /// Emitted markers in the placed category
    pub placed_markers: usize,

    /// Emitted markers with an unrecognized status
    pub unknown_markers: usize,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    fn count_emitted(&mut self, status: Status) {
        match status {
            Status::Enrolled => self.enrolled_markers += 1,
            Status::Skilled => self.skilled_markers += 1,
            Status::Placed => self.placed_markers += 1,
            Status::Unknown => self.unknown_markers += 1,
        }
    }

    /// Emitted marker count for a status category
    pub fn status_count(&self, status: Status) -> usize {
        match status {
            Status::Enrolled => self.enrolled_markers,
            Status::Skilled => self.skilled_markers,
            Status::Placed => self.placed_markers,
            Status::Unknown => self.unknown_markers,
        }
    }
}

/// A rendered output document together with its render statistics
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    /// Complete document text, ready to write to disk
    pub content: String,

    /// What went into the document
    pub stats: RenderStats,
}

/// Renders a set of marker records into a map document
///
/// Rendering is a pure function of the records and configuration: each call
/// styles markers with a fresh label sequence, so rendering the same records
/// twice produces identical documents.
#[derive(Debug, Clone)]
pub struct MapRenderer {
    map: MapConfig,
    styling: StylingConfig,
}

impl MapRenderer {
    pub fn new(map: MapConfig, styling: StylingConfig) -> Self {
        Self { map, styling }
    }

    /// Create a renderer from the map and styling sections of a config
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.map.clone(), config.styling.clone())
    }

    /// Render all records into a single document of the requested format
    ///
    /// Every record is styled in order, advancing its category's label
    /// counter. Records without a finite position are styled but not emitted,
    /// since no output format can carry a NaN coordinate.
    pub fn render(&self, records: &[MarkerRecord], format: RenderFormat) -> Result<RenderedDocument> {
        debug!(
            "Rendering {} records as {} centered on ({}, {}) zoom {}",
            records.len(),
            format.name(),
            self.map.center_lat,
            self.map.center_lng,
            self.map.zoom
        );

        let (markers, stats) = self.build_markers(records);

        let content = match format {
            RenderFormat::Html => html::render_page(&markers, &self.map)?,
            RenderFormat::Kml => kml::render_document(&markers, &self.map),
            RenderFormat::Geojson => geojson::render_collection(&markers)?,
        };

        Ok(RenderedDocument { content, stats })
    }

    /// Style every record and collect the markers that can be emitted
    fn build_markers(&self, records: &[MarkerRecord]) -> (Vec<Marker>, RenderStats) {
        let mut allocator = LabelAllocator::new();
        let mut stats = RenderStats::new();
        let mut markers = Vec::with_capacity(records.len());

        for record in records {
            let style = allocator.style_for(record.status);
            stats.markers_styled += 1;

            if !record.has_finite_position() {
                warn!(
                    "Skipping {} marker '{}' with non-finite coordinates",
                    record.status.name(),
                    style.label
                );
                stats.markers_skipped += 1;
                continue;
            }

            markers.push(Marker::from_record(record, style, &self.styling.assets_dir));
            stats.count_emitted(record.status);
            stats.markers_rendered += 1;
        }

        (markers, stats)
    }
}
