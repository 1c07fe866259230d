//! Session state for one map generation run
//!
//! The session owns the ordered record collection and the statistics
//! accumulated while loading input files. It replaces the process-wide
//! mutable collections of earlier tooling: the pipeline creates one session
//! per run, file loads append into it behind a join barrier, and rendering
//! reads it without mutating it.

use crate::app::models::{MarkerRecord, Status};
use crate::app::services::record_parser::{ParseOutcome, ParseStats};

/// Per-source load summary retained for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    /// Source name (file path or label)
    pub name: String,

    /// Lines encountered, including empty ones
    pub lines_seen: usize,

    /// Records contributed by this source
    pub records_parsed: usize,

    /// Empty lines skipped
    pub empty_lines: usize,

    /// Warnings recorded while parsing this source
    pub warnings: usize,
}

/// Accumulated state for one render pipeline run
#[derive(Debug, Clone, Default)]
pub struct RenderSession {
    /// Records in file-completion order, line order within each file
    records: Vec<MarkerRecord>,

    /// Parse statistics aggregated across all loaded sources
    stats: ParseStats,

    /// Per-source summaries in load-completion order
    sources: Vec<SourceSummary>,

    /// Sources that failed to load: (source name, error description)
    sources_failed: Vec<(String, String)>,
}

impl RenderSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all accumulated records and statistics.
    ///
    /// Called at pipeline start when a session object is reused, so stale
    /// records can never leak into a new run.
    pub fn reset(&mut self) {
        self.records.clear();
        self.stats = ParseStats::new();
        self.sources.clear();
        self.sources_failed.clear();
    }

    /// Append one source's parse outcome, preserving its line order
    pub fn append_outcome(&mut self, outcome: ParseOutcome) {
        self.sources.push(SourceSummary {
            name: outcome.source,
            lines_seen: outcome.stats.lines_seen,
            records_parsed: outcome.stats.records_parsed,
            empty_lines: outcome.stats.empty_lines,
            warnings: outcome.stats.warnings.len(),
        });
        self.records.extend(outcome.records);
        self.stats.merge(outcome.stats);
    }

    /// Record a source that could not be read
    pub fn record_source_failure(
        &mut self,
        source: impl Into<String>,
        error: impl Into<String>,
    ) {
        self.sources_failed.push((source.into(), error.into()));
    }

    /// Records in accumulation order
    pub fn records(&self) -> &[MarkerRecord] {
        &self.records
    }

    /// Total number of accumulated records
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether no records were accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Aggregated parse statistics
    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    /// Number of sources loaded successfully
    pub fn sources_loaded(&self) -> usize {
        self.sources.len()
    }

    /// Per-source summaries in load-completion order
    pub fn sources(&self) -> &[SourceSummary] {
        &self.sources
    }

    /// Sources that failed to load
    pub fn sources_failed(&self) -> &[(String, String)] {
        &self.sources_failed
    }

    /// Record count for one status category
    pub fn category_count(&self, status: Status) -> usize {
        self.stats.status_count(status)
    }
}
