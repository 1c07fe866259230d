//! Core parsing orchestration for marker CSV files
//!
//! Implements the line pipeline: split on newlines, strip the line
//! terminator, split each non-empty line on commas into latitude, longitude
//! and status, and append one record per line in order. Problems never
//! reject a record; they become NaN coordinates or an `Unknown` status plus
//! an entry in the warning channel.

use super::field_parsers::{parse_coordinate, strip_line_terminator};
use super::stats::{ParseOutcome, ParseStats, ParseWarning};
use crate::app::models::{MarkerRecord, Status};
use crate::{Error, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Parser for `latitude,longitude,status` marker files
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordParser;

impl RecordParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Read a file fully and parse its content.
    ///
    /// Read failures are returned as errors for the caller to contain;
    /// content problems are downgraded to warnings in the outcome.
    pub async fn parse_file(&self, path: &Path) -> Result<ParseOutcome> {
        debug!("Reading marker file: {}", path.display());

        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            Error::io(
                format!("Failed to read input file '{}'", path.display()),
                e,
            )
        })?;

        Ok(self.parse_text(&content, &path.display().to_string()))
    }

    /// Parse marker CSV text into records, preserving line order.
    ///
    /// `source` names the origin (file path or label) in warnings.
    pub fn parse_text(&self, text: &str, source: &str) -> ParseOutcome {
        let mut records = Vec::new();
        let mut stats = ParseStats::new();

        for (index, raw_line) in text.split('\n').enumerate() {
            let line_number = index + 1;
            stats.lines_seen += 1;

            let line = strip_line_terminator(raw_line);
            if line.is_empty() {
                stats.empty_lines += 1;
                continue;
            }

            let mut fields = line.split(',');
            // split always yields at least one field
            let lat_field = fields.next().unwrap_or("");
            let lng_field = fields.next();
            let status_field = fields.next();
            // extra fields beyond the third are ignored

            let lat = match parse_coordinate(lat_field) {
                Some(value) => value,
                None => {
                    push_warning(
                        &mut stats,
                        source,
                        line_number,
                        format!("unparseable latitude '{}'", lat_field),
                    );
                    f64::NAN
                }
            };

            let lng = match lng_field {
                Some(raw) => match parse_coordinate(raw) {
                    Some(value) => value,
                    None => {
                        push_warning(
                            &mut stats,
                            source,
                            line_number,
                            format!("unparseable longitude '{}'", raw),
                        );
                        f64::NAN
                    }
                },
                None => {
                    push_warning(
                        &mut stats,
                        source,
                        line_number,
                        "missing longitude field".to_string(),
                    );
                    f64::NAN
                }
            };

            let raw_status = match status_field {
                Some(raw) => raw,
                None => {
                    push_warning(
                        &mut stats,
                        source,
                        line_number,
                        "missing status field".to_string(),
                    );
                    ""
                }
            };

            let record = MarkerRecord::new(lat, lng, raw_status);

            if record.status == Status::Unknown && status_field.is_some() {
                push_warning(
                    &mut stats,
                    source,
                    line_number,
                    format!("unrecognized status '{}'", raw_status),
                );
            }

            if !record.has_finite_position() {
                stats.nan_coordinate_records += 1;
            }

            stats.count_status(record.status);
            stats.records_parsed += 1;
            records.push(record);
        }

        debug!(
            "Parsed {} records from {} lines in {} ({} empty, {} warnings)",
            stats.records_parsed,
            stats.lines_seen,
            source,
            stats.empty_lines,
            stats.warnings.len()
        );

        ParseOutcome {
            source: source.to_string(),
            records,
            stats,
        }
    }
}

fn push_warning(stats: &mut ParseStats, source: &str, line: usize, message: String) {
    let warning = ParseWarning {
        source: source.to_string(),
        line,
        message,
    };
    warn!("{}", warning);
    stats.warnings.push(warning);
}
