//! Parsing statistics and result structures for marker CSV processing
//!
//! This module provides types for tracking line handling, per-category
//! counts, and the warning channel surfaced in end-of-run summaries.

use crate::app::models::{MarkerRecord, Status};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parsing result for one input text: records plus statistics
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    /// Origin name (file path or label), carried into per-file summaries
    pub source: String,

    /// Records in line order
    pub records: Vec<MarkerRecord>,

    /// Line and warning statistics
    pub stats: ParseStats,
}

/// One recoverable problem found on a specific input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    /// Source name the line came from (file path or label)
    pub source: String,

    /// 1-based line number
    pub line: usize,

    /// Human-readable description
    pub message: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.source, self.line, self.message)
    }
}

/// Per-source parsing statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseStats {
    /// Total lines encountered, including empty ones
    pub lines_seen: usize,

    /// Records appended to the collection
    pub records_parsed: usize,

    /// Empty lines skipped (interior and trailing)
    pub empty_lines: usize,

    /// Records per recognized category
    pub enrolled_records: usize,
    pub skilled_records: usize,
    pub placed_records: usize,

    /// Records whose status matched no recognized label
    pub unknown_records: usize,

    /// Records whose coordinates are not both finite
    pub nan_coordinate_records: usize,

    /// Per-line warnings for the reporting channel
    pub warnings: Vec<ParseWarning>,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            lines_seen: 0,
            records_parsed: 0,
            empty_lines: 0,
            enrolled_records: 0,
            skilled_records: 0,
            placed_records: 0,
            unknown_records: 0,
            nan_coordinate_records: 0,
            warnings: Vec::new(),
        }
    }

    /// Record one parsed record's category
    pub fn count_status(&mut self, status: Status) {
        match status {
            Status::Enrolled => self.enrolled_records += 1,
            Status::Skilled => self.skilled_records += 1,
            Status::Placed => self.placed_records += 1,
            Status::Unknown => self.unknown_records += 1,
        }
    }

    /// Record count for one category
    pub fn status_count(&self, status: Status) -> usize {
        match status {
            Status::Enrolled => self.enrolled_records,
            Status::Skilled => self.skilled_records,
            Status::Placed => self.placed_records,
            Status::Unknown => self.unknown_records,
        }
    }

    /// Fold another source's statistics into this one
    pub fn merge(&mut self, other: ParseStats) {
        self.lines_seen += other.lines_seen;
        self.records_parsed += other.records_parsed;
        self.empty_lines += other.empty_lines;
        self.enrolled_records += other.enrolled_records;
        self.skilled_records += other.skilled_records;
        self.placed_records += other.placed_records;
        self.unknown_records += other.unknown_records;
        self.nan_coordinate_records += other.nan_coordinate_records;
        self.warnings.extend(other.warnings);
    }

    /// Whether any per-line warnings were recorded
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Percentage of parsed records that raised no warning
    pub fn success_rate(&self) -> f64 {
        if self.records_parsed == 0 {
            return 100.0;
        }
        let clean = self
            .records_parsed
            .saturating_sub(self.lines_with_warnings());
        (clean as f64 / self.records_parsed as f64) * 100.0
    }

    /// Number of distinct lines that raised at least one warning
    pub fn lines_with_warnings(&self) -> usize {
        let mut seen: Vec<(&str, usize)> = self
            .warnings
            .iter()
            .map(|w| (w.source.as_str(), w.line))
            .collect();
        seen.sort_unstable();
        seen.dedup();
        seen.len()
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
