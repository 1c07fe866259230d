//! Tests for the marker CSV line pipeline

use super::{create_clean_csv, create_mixed_csv, create_temp_file};
use crate::app::models::Status;
use crate::app::services::record_parser::RecordParser;
use crate::Error;

#[test]
fn test_well_formed_fields_round_trip() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.520679,73.8565,enrolled", "test.csv");

    assert_eq!(outcome.records.len(), 1);
    let record = &outcome.records[0];
    assert_eq!(record.lat, 18.520679);
    assert_eq!(record.lng, 73.8565);
    assert_eq!(record.raw_status, "enrolled");
    assert_eq!(record.status, Status::Enrolled);
    assert!(!outcome.stats.has_warnings());
}

#[test]
fn test_three_line_example_parses_in_order() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text(&create_clean_csv(), "test.csv");

    assert_eq!(outcome.records.len(), 3);
    assert_eq!(outcome.records[0].status, Status::Enrolled);
    assert_eq!(outcome.records[1].status, Status::Skilled);
    assert_eq!(outcome.records[2].status, Status::Placed);
    assert_eq!(outcome.stats.records_parsed, 3);
    assert_eq!(outcome.stats.enrolled_records, 1);
    assert_eq!(outcome.stats.skilled_records, 1);
    assert_eq!(outcome.stats.placed_records, 1);
}

#[test]
fn test_crlf_lines_classify_status() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.5,73.8,placed\r\n18.6,73.9,enrolled\r\n", "crlf.csv");

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].status, Status::Placed);
    assert_eq!(outcome.records[0].raw_status, "placed");
    assert_eq!(outcome.records[1].status, Status::Enrolled);
    assert!(!outcome.stats.has_warnings());
}

#[test]
fn test_status_whitespace_stays_significant() {
    // Only the line terminator is stripped; field content is verbatim
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.5,73.8,placed ", "test.csv");

    assert_eq!(outcome.records[0].raw_status, "placed ");
    assert_eq!(outcome.records[0].status, Status::Unknown);
    assert_eq!(outcome.stats.warnings.len(), 1);
}

#[test]
fn test_empty_lines_produce_no_records() {
    let parser = RecordParser::new();
    // Interior empty line plus the empty artifact after a trailing newline
    let outcome = parser.parse_text("18.5,73.8,enrolled\n\n18.6,73.9,placed\n", "test.csv");

    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.stats.lines_seen, 4);
    assert_eq!(outcome.stats.empty_lines, 2);
    // Parsing continues past interior empty lines
    assert_eq!(outcome.records[1].status, Status::Placed);
}

#[test]
fn test_empty_text_is_one_empty_line() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("", "test.csv");

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.lines_seen, 1);
    assert_eq!(outcome.stats.empty_lines, 1);
}

#[test]
fn test_malformed_latitude_becomes_nan() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("abc,73.8,enrolled", "test.csv");

    let record = &outcome.records[0];
    assert!(record.lat.is_nan());
    assert_eq!(record.lng, 73.8);
    assert_eq!(record.status, Status::Enrolled);
    assert_eq!(outcome.stats.nan_coordinate_records, 1);
    assert_eq!(outcome.stats.warnings.len(), 1);
    assert!(outcome.stats.warnings[0].message.contains("latitude"));
    assert_eq!(outcome.stats.warnings[0].line, 1);
}

#[test]
fn test_numeric_prefix_is_not_salvaged() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.5abc,73.8,enrolled", "test.csv");

    assert!(outcome.records[0].lat.is_nan());
}

#[test]
fn test_missing_fields_degrade_gracefully() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.8", "test.csv");

    let record = &outcome.records[0];
    assert_eq!(record.lat, 18.8);
    assert!(record.lng.is_nan());
    assert_eq!(record.raw_status, "");
    assert_eq!(record.status, Status::Unknown);

    let messages: Vec<&str> = outcome
        .stats
        .warnings
        .iter()
        .map(|w| w.message.as_str())
        .collect();
    assert!(messages.contains(&"missing longitude field"));
    assert!(messages.contains(&"missing status field"));
}

#[test]
fn test_extra_fields_are_ignored() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.5,73.8,skilled,extra,fields", "test.csv");

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].status, Status::Skilled);
    assert!(!outcome.stats.has_warnings());
}

#[test]
fn test_unrecognized_status_is_defined_and_warned() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("1,2,foo", "test.csv");

    let record = &outcome.records[0];
    assert_eq!(record.status, Status::Unknown);
    assert_eq!(record.raw_status, "foo");
    assert_eq!(outcome.stats.unknown_records, 1);
    assert_eq!(outcome.stats.warnings.len(), 1);
    assert!(outcome.stats.warnings[0].message.contains("foo"));
}

#[test]
fn test_empty_status_field_warns() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18.5,73.8,", "test.csv");

    assert_eq!(outcome.records[0].status, Status::Unknown);
    assert_eq!(outcome.records[0].raw_status, "");
    assert_eq!(outcome.stats.warnings.len(), 1);
}

#[test]
fn test_whitespace_line_parses_as_degraded_record() {
    // A line of spaces is not empty, so it produces a record like any other
    let parser = RecordParser::new();
    let outcome = parser.parse_text("   ", "test.csv");

    assert_eq!(outcome.records.len(), 1);
    assert!(outcome.records[0].lat.is_nan());
    assert_eq!(outcome.records[0].status, Status::Unknown);
    assert_eq!(outcome.stats.empty_lines, 0);
}

#[test]
fn test_dms_coordinates_parse_via_fallback() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text("18°31'14.4\"N,73°51'23.4\"E,enrolled", "dms.csv");

    let record = &outcome.records[0];
    assert!((record.lat - 18.520666666666667).abs() < 1e-9);
    assert!((record.lng - 73.8565).abs() < 1e-9);
    assert!(!outcome.stats.has_warnings());
}

#[test]
fn test_mixed_content_statistics() {
    let parser = RecordParser::new();
    let outcome = parser.parse_text(&create_mixed_csv(), "mixed.csv");

    assert_eq!(outcome.stats.lines_seen, 6);
    assert_eq!(outcome.stats.records_parsed, 5);
    assert_eq!(outcome.stats.empty_lines, 1);
    assert_eq!(outcome.stats.enrolled_records, 1);
    assert_eq!(outcome.stats.skilled_records, 1);
    assert_eq!(outcome.stats.placed_records, 1);
    assert_eq!(outcome.stats.unknown_records, 2);
    assert!(outcome.stats.has_warnings());
}

#[tokio::test]
async fn test_parse_file_reads_content() {
    let temp_file = create_temp_file(&create_clean_csv());
    let parser = RecordParser::new();

    let outcome = parser.parse_file(temp_file.path()).await.unwrap();
    assert_eq!(outcome.records.len(), 3);
}

#[tokio::test]
async fn test_parse_file_missing_path_is_io_error() {
    let parser = RecordParser::new();
    let result = parser
        .parse_file(std::path::Path::new("/nonexistent/markers.csv"))
        .await;

    assert!(matches!(result, Err(Error::Io { .. })));
}

#[tokio::test]
async fn test_parse_file_warning_sources_name_the_file() {
    let temp_file = create_temp_file("1,2,foo\n");
    let parser = RecordParser::new();

    let outcome = parser.parse_file(temp_file.path()).await.unwrap();
    assert_eq!(outcome.stats.warnings.len(), 1);
    assert_eq!(
        outcome.stats.warnings[0].source,
        temp_file.path().display().to_string()
    );
}
