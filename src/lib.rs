//! Pinmap Library
//!
//! A Rust library for rendering status-tagged CSV point data as labeled,
//! color-coded markers on an interactive map.
//!
//! This library provides tools for:
//! - Resolving input files from paths, directories, or an interactive prompt
//! - Parsing `latitude,longitude,status` lines with best-effort numeric handling
//! - Accumulating records in a session with a single render barrier
//! - Assigning per-category colors and cyclic A-Z marker labels
//! - Emitting self-contained Leaflet HTML, KML, or GeoJSON map documents
//! - Comprehensive error handling and per-file/per-line warning reporting

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod session;
    pub mod services {
        pub mod intake;
        pub mod map_renderer;
        pub mod record_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Marker, MarkerRecord, MarkerStyle, Status};
pub use app::session::{RenderSession, SourceSummary};
pub use config::Config;

/// Result type alias for pinmap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for map generation operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Configuration file could not be parsed
    #[error("Configuration file error in '{file}': {message}")]
    ConfigParse {
        file: String,
        message: String,
        #[source]
        source: Option<toml::de::Error>,
    },

    /// Input file not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Map document rendering error
    #[error("Render error: {message}")]
    Render { message: String },

    /// JSON serialization error
    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Data validation error
    #[error("Data validation error: {message}")]
    DataValidation { message: String },

    /// Output file already exists and overwrite was not requested
    #[error("Output file already exists: {path} (pass --force to overwrite)")]
    OutputExists { path: String },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a configuration file parsing error
    pub fn config_parse(
        file: impl Into<String>,
        message: impl Into<String>,
        source: Option<toml::de::Error>,
    ) -> Self {
        Self::ConfigParse {
            file: file.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create a map document rendering error
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }

    /// Create a JSON serialization error
    pub fn serialization(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            message: message.into(),
            source,
        }
    }

    /// Create a data validation error
    pub fn data_validation(message: impl Into<String>) -> Self {
        Self::DataValidation {
            message: message.into(),
        }
    }

    /// Create an output collision error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigParse {
            file: "unknown".to_string(),
            message: "TOML parsing failed".to_string(),
            source: Some(error),
        }
    }
}
