//! Tests for parsing statistics and the warning channel

use crate::app::models::Status;
use crate::app::services::record_parser::{ParseStats, ParseWarning};

fn warning(source: &str, line: usize, message: &str) -> ParseWarning {
    ParseWarning {
        source: source.to_string(),
        line,
        message: message.to_string(),
    }
}

#[test]
fn test_new_stats_are_empty() {
    let stats = ParseStats::new();
    assert_eq!(stats.lines_seen, 0);
    assert_eq!(stats.records_parsed, 0);
    assert!(!stats.has_warnings());
    assert_eq!(stats.success_rate(), 100.0);
}

#[test]
fn test_count_status_routes_to_category_fields() {
    let mut stats = ParseStats::new();
    stats.count_status(Status::Enrolled);
    stats.count_status(Status::Enrolled);
    stats.count_status(Status::Placed);
    stats.count_status(Status::Unknown);

    assert_eq!(stats.enrolled_records, 2);
    assert_eq!(stats.skilled_records, 0);
    assert_eq!(stats.placed_records, 1);
    assert_eq!(stats.unknown_records, 1);
    assert_eq!(stats.status_count(Status::Enrolled), 2);
    assert_eq!(stats.status_count(Status::Skilled), 0);
}

#[test]
fn test_merge_accumulates_counts_and_warnings() {
    let mut first = ParseStats::new();
    first.lines_seen = 4;
    first.records_parsed = 3;
    first.empty_lines = 1;
    first.enrolled_records = 3;
    first.warnings.push(warning("a.csv", 2, "unrecognized status 'x'"));

    let mut second = ParseStats::new();
    second.lines_seen = 2;
    second.records_parsed = 2;
    second.placed_records = 2;
    second.warnings.push(warning("b.csv", 1, "unparseable latitude 'y'"));

    first.merge(second);

    assert_eq!(first.lines_seen, 6);
    assert_eq!(first.records_parsed, 5);
    assert_eq!(first.empty_lines, 1);
    assert_eq!(first.enrolled_records, 3);
    assert_eq!(first.placed_records, 2);
    assert_eq!(first.warnings.len(), 2);
}

#[test]
fn test_lines_with_warnings_dedups_per_line() {
    let mut stats = ParseStats::new();
    stats.records_parsed = 4;
    // Two warnings on the same line count once
    stats.warnings.push(warning("a.csv", 3, "unparseable latitude 'x'"));
    stats.warnings.push(warning("a.csv", 3, "unrecognized status 'y'"));
    stats.warnings.push(warning("a.csv", 4, "missing status field"));

    assert_eq!(stats.lines_with_warnings(), 2);
    assert_eq!(stats.success_rate(), 50.0);
}

#[test]
fn test_same_line_number_in_different_sources_counts_twice() {
    let mut stats = ParseStats::new();
    stats.records_parsed = 4;
    stats.warnings.push(warning("a.csv", 1, "missing status field"));
    stats.warnings.push(warning("b.csv", 1, "missing status field"));

    assert_eq!(stats.lines_with_warnings(), 2);
}

#[test]
fn test_warning_display_names_source_and_line() {
    let w = warning("input/east.csv", 17, "unrecognized status 'foo'");
    assert_eq!(
        w.to_string(),
        "input/east.csv:17: unrecognized status 'foo'"
    );
}
