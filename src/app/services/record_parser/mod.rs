//! Marker CSV parser for status-tagged point data
//!
//! This module parses plain `latitude,longitude,status` lines into marker
//! records. Parsing is deliberately permissive: malformed numeric fields
//! become NaN sentinels, unrecognized status values classify as `Unknown`,
//! and every degradation is reported through a per-line warning channel
//! instead of rejecting records.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Line pipeline orchestration and file reading
//! - [`field_parsers`] - Coordinate parsing (decimal and DMS fallback)
//! - [`stats`] - Parsing statistics and the warning channel
//!
//! ## Usage
//!
//! ```rust
//! use pinmap::app::services::record_parser::RecordParser;
//!
//! let parser = RecordParser::new();
//! let outcome = parser.parse_text("18.5,73.8,enrolled\n18.6,73.9,skilled\n", "demo.csv");
//!
//! assert_eq!(outcome.records.len(), 2);
//! assert_eq!(outcome.stats.enrolled_records, 1);
//! ```

pub mod field_parsers;
pub mod parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::RecordParser;
pub use stats::{ParseOutcome, ParseStats, ParseWarning};
