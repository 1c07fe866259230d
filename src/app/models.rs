//! Core data models for marker map generation
//!
//! Defines the parsed record type, the status classification, and the
//! marker style and marker objects handed to the document renderers.

use crate::constants::{icon_path, marker_colors, status_labels};
use serde::Serialize;
use std::fmt;

/// Status category of a record, classified from the third CSV field.
///
/// Classification is an exact, case-sensitive string match with no trimming
/// or normalization: any value that is not precisely one of the recognized
/// labels (including empty strings and values carrying stray whitespace)
/// falls back to `Unknown`, which carries its own color and label sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Participant has enrolled in the program
    Enrolled,
    /// Participant has completed skilling
    Skilled,
    /// Participant has been placed
    Placed,
    /// Status field did not match any recognized label
    Unknown,
}

impl Status {
    /// All categories in display order
    pub const ALL: [Status; 4] = [
        Status::Enrolled,
        Status::Skilled,
        Status::Placed,
        Status::Unknown,
    ];

    /// Classify a raw status field value
    pub fn classify(raw: &str) -> Self {
        match raw {
            status_labels::ENROLLED => Status::Enrolled,
            status_labels::SKILLED => Status::Skilled,
            status_labels::PLACED => Status::Placed,
            _ => Status::Unknown,
        }
    }

    /// Marker icon color for this category
    pub fn color(&self) -> &'static str {
        match self {
            Status::Enrolled => marker_colors::ENROLLED,
            Status::Skilled => marker_colors::SKILLED,
            Status::Placed => marker_colors::PLACED,
            Status::Unknown => marker_colors::UNKNOWN,
        }
    }

    /// Canonical lowercase name used in reports and document properties
    pub fn name(&self) -> &'static str {
        match self {
            Status::Enrolled => status_labels::ENROLLED,
            Status::Skilled => status_labels::SKILLED,
            Status::Placed => status_labels::PLACED,
            Status::Unknown => "unknown",
        }
    }

    /// Whether the raw value matched one of the recognized labels
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Status::Unknown)
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::classify(raw)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One parsed input line describing a geographic point and its status.
///
/// Coordinates are best-effort: a field that fails numeric parsing becomes
/// `f64::NAN` rather than rejecting the record. `raw_status` preserves the
/// third field verbatim; `status` is its classification.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerRecord {
    /// Latitude in decimal degrees, or NaN when unparseable
    pub lat: f64,
    /// Longitude in decimal degrees, or NaN when unparseable
    pub lng: f64,
    /// Verbatim status field content
    pub raw_status: String,
    /// Classified status category
    pub status: Status,
}

impl MarkerRecord {
    /// Build a record from parsed fields, classifying the status
    pub fn new(lat: f64, lng: f64, raw_status: impl Into<String>) -> Self {
        let raw_status = raw_status.into();
        let status = Status::classify(&raw_status);
        Self {
            lat,
            lng,
            raw_status,
            status,
        }
    }

    /// Whether both coordinates are finite and representable on a map
    pub fn has_finite_position(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Color and cyclic letter label assigned to one marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Icon color, one of the category colors
    pub color: &'static str,
    /// Cyclic A-Z label within the category
    pub label: char,
}

impl MarkerStyle {
    /// Relative icon path under the given assets directory,
    /// e.g. `markers/green_MarkerA.png`
    pub fn icon_path(&self, assets_dir: &str) -> String {
        icon_path(assets_dir, self.color, self.label)
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{},{}}}", self.color, self.label)
    }
}

/// Transient rendering object handed to a document writer.
///
/// Ownership of the visual pin transfers to the map document; markers are
/// not retained after rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
    /// Relative icon image path
    pub icon: String,
    /// Human-readable marker title, e.g. `A (enrolled)`
    pub title: String,
    /// Category name for document properties
    pub status: &'static str,
    /// Assigned label letter
    pub label: char,
}

impl Marker {
    /// Build a marker from a record and its assigned style
    pub fn from_record(record: &MarkerRecord, style: MarkerStyle, assets_dir: &str) -> Self {
        Self {
            lat: record.lat,
            lng: record.lng,
            icon: style.icon_path(assets_dir),
            title: format!("{} ({})", style.label, record.status),
            status: record.status.name(),
            label: style.label,
        }
    }
}
