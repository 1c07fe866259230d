//! Report command implementation for the pinmap CLI
//!
//! This module parses marker CSV files and summarizes their contents without
//! rendering a map: per-category record counts, empty line counts, coordinate
//! quality, and the full parse warning listing in various output formats.

use super::shared::{ProcessingStats, setup_report_logging};
use crate::app::models::{MarkerRecord, Status};
use crate::app::services::intake::{self, IntakeStats};
use crate::app::session::RenderSession;
use crate::cli::args::{OutputFormat, ReportArgs};
use crate::config::Config;
use crate::constants::{LABEL_CYCLE, SUMMARY_WARNING_EXAMPLES, label_letter};
use crate::{Error, Result};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Report command runner for pinmap
///
/// This function parses the inputs and generates a content report.
pub async fn run_report(
    args: ReportArgs,
    cancellation_token: CancellationToken,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_report_logging(&args)?;

    info!("Starting pinmap input report");
    debug!("Report arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Resolve inputs - default to discovering everything under the current directory
    let files = if args.inputs.is_empty() {
        info!("No inputs specified, discovering CSV files under the current directory");
        intake::discover_input_files(Path::new("."))?
    } else {
        intake::resolve_inputs(&args.inputs)?
    };

    if files.is_empty() {
        println!("No CSV files found to report on.");
        return Ok(ProcessingStats {
            processing_time: start_time.elapsed(),
            ..Default::default()
        });
    }

    info!("Reporting on {} input files", files.len());

    // Environment variables can still tune the reader pool
    let config = Config::load_layered(None)?;

    let mut session = RenderSession::new();
    let intake_stats = intake::load_all(
        &mut session,
        &files,
        config.processing.workers,
        cancellation_token,
        !args.quiet,
    )
    .await?;

    let load_duration = start_time.elapsed();

    info!(
        "Parsed {} records from {} files in {:.2}s",
        session.record_count(),
        intake_stats.files_loaded,
        load_duration.as_secs_f64()
    );

    // Generate report
    generate_parse_report(&args, &session, &intake_stats, load_duration)?;

    // Convert to processing stats for consistency
    let stats = ProcessingStats {
        files_discovered: files.len(),
        files_loaded: intake_stats.files_loaded,
        files_failed: intake_stats.files_failed,
        records_parsed: session.record_count(),
        warnings_recorded: session.stats().warnings.len(),
        processing_time: start_time.elapsed(),
        output_sizes: if let Some(output_file) = &args.output_file {
            // Try to get file size if we wrote to a file
            if let Ok(metadata) = std::fs::metadata(output_file) {
                vec![(output_file.display().to_string(), metadata.len())]
            } else {
                Vec::new()
            }
        } else {
            Vec::new()
        },
        ..Default::default()
    };

    info!(
        "Report completed in {:.2}s",
        stats.processing_time.as_secs_f64()
    );

    Ok(stats)
}

/// Generate input report based on output format
fn generate_parse_report(
    args: &ReportArgs,
    session: &RenderSession,
    intake_stats: &IntakeStats,
    load_duration: Duration,
) -> Result<()> {
    let status_filter = args.get_status_filter()?;

    match args.output_format {
        OutputFormat::Human => {
            generate_human_parse_report(args, status_filter, session, intake_stats, load_duration)
        }
        OutputFormat::Json => {
            generate_json_parse_report(args, status_filter, session, intake_stats, load_duration)
        }
        OutputFormat::Csv => generate_csv_parse_report(args, session),
    }
}

/// Generate human-readable parse report
fn generate_human_parse_report(
    args: &ReportArgs,
    status_filter: Option<Status>,
    session: &RenderSession,
    intake_stats: &IntakeStats,
    load_duration: Duration,
) -> Result<()> {
    let stats = session.stats();

    let mut output = format!(
        "📊 Marker CSV Report\n\
         ====================\n\
         📁 Files: {} loaded, {} failed ({} requested)\n\
         🧾 Lines: {} seen, {} empty\n\
         📌 Records: {}\n\
         ⏱️  Load Time: {:.2}s\n\
         \n",
        intake_stats.files_loaded,
        intake_stats.files_failed,
        intake_stats.files_requested,
        stats.lines_seen,
        stats.empty_lines,
        stats.records_parsed,
        load_duration.as_secs_f64()
    );

    if let Some(filter) = status_filter {
        output.push_str(&format!("🔎 Status filter: {}\n\n", filter.name()));
    }

    output.push_str("🎨 Status Categories:\n");
    for status in Status::ALL {
        if status_filter.is_some_and(|filter| filter != status) {
            continue;
        }
        let count = session.category_count(status);
        let percentage = if stats.records_parsed > 0 {
            (count as f64 / stats.records_parsed as f64) * 100.0
        } else {
            0.0
        };
        let mut line = format!(
            "   • {} ({}): {} records ({:.1}%)",
            status.name(),
            status.color(),
            count,
            percentage
        );
        if let Some(coverage) = label_coverage(count) {
            line.push_str(&format!(" [{}]", coverage));
        }
        line.push('\n');
        output.push_str(&line);
    }
    output.push('\n');

    if let Some(bounds) = coordinate_bounds(session.records(), status_filter) {
        output.push_str(&format!(
            "🗺️  Coordinate bounds: lat {:.6} to {:.6}, lng {:.6} to {:.6}\n\n",
            bounds.min_lat, bounds.max_lat, bounds.min_lng, bounds.max_lng
        ));
    }

    if stats.nan_coordinate_records > 0 {
        output.push_str(&format!(
            "🧭 Records with unusable coordinates: {}\n\n",
            stats.nan_coordinate_records
        ));
    }

    if args.detailed && !session.sources().is_empty() {
        output.push_str("📄 Per-File Breakdown:\n");
        for summary in session.sources() {
            output.push_str(&format!(
                "   • {}: {} lines, {} records, {} empty, {} warnings\n",
                summary.name,
                summary.lines_seen,
                summary.records_parsed,
                summary.empty_lines,
                summary.warnings
            ));
        }
        output.push('\n');
    }

    if !session.sources_failed().is_empty() {
        output.push_str("💥 Failed Files:\n");
        for (source, error) in session.sources_failed() {
            output.push_str(&format!("   • {}: {}\n", source, error));
        }
        output.push('\n');
    }

    if stats.has_warnings() {
        output.push_str(&format!("⚠️  Warnings: {}\n", stats.warnings.len()));

        let shown = if args.detailed {
            stats.warnings.len()
        } else {
            stats.warnings.len().min(SUMMARY_WARNING_EXAMPLES)
        };
        for warning in stats.warnings.iter().take(shown) {
            output.push_str(&format!("   • {}\n", warning));
        }
        if shown < stats.warnings.len() {
            output.push_str(&format!(
                "   ... and {} more (use --detailed for the complete listing)\n",
                stats.warnings.len() - shown
            ));
        }
    } else {
        output.push_str("✅ No parse warnings\n");
    }

    // Output the report
    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &output).map_err(|e| {
                Error::configuration(format!(
                    "Failed to write report to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("Report written to: {}", path.display());
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

/// Generate JSON parse report
fn generate_json_parse_report(
    args: &ReportArgs,
    status_filter: Option<Status>,
    session: &RenderSession,
    intake_stats: &IntakeStats,
    load_duration: Duration,
) -> Result<()> {
    use serde_json::json;

    let stats = session.stats();

    let mut by_status = serde_json::Map::new();
    for status in Status::ALL {
        if status_filter.is_some_and(|filter| filter != status) {
            continue;
        }
        let count = session.category_count(status);
        by_status.insert(
            status.name().to_string(),
            json!({
                "records": count,
                "labels_used": count.min(LABEL_CYCLE),
                "label_wraps": label_wraps(count)
            }),
        );
    }

    let bounds = match coordinate_bounds(session.records(), status_filter) {
        Some(bounds) => json!({
            "min_lat": bounds.min_lat,
            "max_lat": bounds.max_lat,
            "min_lng": bounds.min_lng,
            "max_lng": bounds.max_lng
        }),
        None => serde_json::Value::Null,
    };

    let json_files: Vec<_> = session
        .sources()
        .iter()
        .map(|summary| {
            json!({
                "file": summary.name,
                "lines_seen": summary.lines_seen,
                "records": summary.records_parsed,
                "empty_lines": summary.empty_lines,
                "warnings": summary.warnings
            })
        })
        .collect();

    let json_warnings: Vec<_> = stats
        .warnings
        .iter()
        .map(|warning| {
            json!({
                "file": warning.source,
                "line": warning.line,
                "message": warning.message
            })
        })
        .collect();

    let json_failed: Vec<_> = session
        .sources_failed()
        .iter()
        .map(|(source, error)| {
            json!({
                "file": source,
                "error": error
            })
        })
        .collect();

    let json_report = json!({
        "metadata": {
            "files_requested": intake_stats.files_requested,
            "files_loaded": intake_stats.files_loaded,
            "files_failed": intake_stats.files_failed,
            "load_duration_seconds": load_duration.as_secs_f64(),
            "status_filter": status_filter.map(|status| status.name()),
            "generated_at": chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
        },
        "lines": {
            "seen": stats.lines_seen,
            "empty": stats.empty_lines
        },
        "records": {
            "total": stats.records_parsed,
            "by_status": by_status,
            "non_finite_coordinates": stats.nan_coordinate_records,
            "bounds": bounds
        },
        "files": json_files,
        "warnings": json_warnings,
        "failed_files": json_failed
    });

    let json_string = serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {}", e)))?;

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &json_string).map_err(|e| {
                Error::configuration(format!(
                    "Failed to write JSON report to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("JSON report written to: {}", path.display());
        }
        None => {
            println!("{}", json_string);
        }
    }

    Ok(())
}

/// Generate CSV parse report listing every warning
fn generate_csv_parse_report(args: &ReportArgs, session: &RenderSession) -> Result<()> {
    let stats = session.stats();

    let mut csv = String::new();
    csv.push_str("file,line,message\n");

    for warning in &stats.warnings {
        csv.push_str(&format!(
            "{},{},{}\n",
            csv_escape(&warning.source),
            warning.line,
            csv_escape(&warning.message)
        ));
    }

    match &args.output_file {
        Some(path) => {
            std::fs::write(path, &csv).map_err(|e| {
                Error::configuration(format!(
                    "Failed to write CSV report to {}: {}",
                    path.display(),
                    e
                ))
            })?;
            info!("CSV report written to: {}", path.display());
        }
        None => {
            println!("{}", csv);
        }
    }

    Ok(())
}

/// Bounding box over finite coordinates
struct CoordinateBounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

/// Compute the bounding box of records with finite coordinates.
///
/// Returns `None` when no record (matching the filter, if any) has a usable
/// position.
fn coordinate_bounds(
    records: &[MarkerRecord],
    status_filter: Option<Status>,
) -> Option<CoordinateBounds> {
    let mut bounds: Option<CoordinateBounds> = None;

    for record in records {
        if status_filter.is_some_and(|filter| filter != record.status) {
            continue;
        }
        if !record.lat.is_finite() || !record.lng.is_finite() {
            continue;
        }
        match &mut bounds {
            Some(bounds) => {
                bounds.min_lat = bounds.min_lat.min(record.lat);
                bounds.max_lat = bounds.max_lat.max(record.lat);
                bounds.min_lng = bounds.min_lng.min(record.lng);
                bounds.max_lng = bounds.max_lng.max(record.lng);
            }
            None => {
                bounds = Some(CoordinateBounds {
                    min_lat: record.lat,
                    max_lat: record.lat,
                    min_lng: record.lng,
                    max_lng: record.lng,
                });
            }
        }
    }

    bounds
}

/// Number of completed label cycles for a category of the given size
fn label_wraps(count: usize) -> usize {
    if count == 0 { 0 } else { (count - 1) / LABEL_CYCLE }
}

/// Describe which marker labels a category of the given size occupies
fn label_coverage(count: usize) -> Option<String> {
    if count == 0 {
        return None;
    }

    let last = label_letter(count.min(LABEL_CYCLE) - 1);
    let mut coverage = if last == 'A' {
        "label A".to_string()
    } else {
        format!("labels A-{}", last)
    };

    let wraps = label_wraps(count);
    if wraps > 0 {
        coverage.push_str(&format!(", {} wraps", wraps));
    }

    Some(coverage)
}

/// Escape CSV field values
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
