//! Test utilities and fixtures for marker CSV parser testing
//!
//! This module provides common fixture builders and helper functions used
//! across the parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod parser_tests;
mod stats_tests;

/// Helper to create well-formed marker CSV content
pub fn create_clean_csv() -> String {
    "18.5,73.8,enrolled\n18.6,73.9,skilled\n18.7,74.0,placed\n".to_string()
}

/// Helper to create marker CSV content mixing clean and degraded lines
pub fn create_mixed_csv() -> String {
    [
        "18.5,73.8,enrolled",
        "not-a-number,73.9,skilled",
        "",
        "18.7,74.0,mystery",
        "18.8",
        "18.9,74.2,placed",
    ]
    .join("\n")
}

/// Helper to create a temporary file with the given content, verbatim
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file.flush().unwrap();
    temp_file
}
