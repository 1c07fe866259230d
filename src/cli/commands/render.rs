//! Render command implementation for the pinmap CLI
//!
//! This module contains the complete map generation workflow: configuration
//! loading, input resolution, concurrent file intake, the single render pass,
//! and output writing with summary reporting.

use super::shared::{ProcessingStats, load_configuration, setup_logging};
use crate::app::services::intake;
use crate::app::services::map_renderer::{MapRenderer, RenderFormat, RenderStats};
use crate::app::session::RenderSession;
use crate::cli::args::{OutputFormat, RenderArgs};
use crate::config::Config;
use crate::{Error, Result};
use colored::*;
use indicatif::HumanDuration;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Render command runner for pinmap
///
/// This function orchestrates the entire rendering workflow:
/// 1. Set up logging and configuration
/// 2. Resolve input files, prompting interactively when none are given
/// 3. Load every file to completion, then render the map exactly once
/// 4. Write the output document and report summary statistics
pub async fn run_render(
    args: RenderArgs,
    cancellation_token: CancellationToken,
) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(&args)?;

    info!("Starting pinmap render");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with layered approach
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    // Resolve input files - use interactive selection if none specified
    let files = if args.inputs.is_empty() && !args.quiet {
        info!("No inputs specified, entering interactive mode");

        let discovered = intake::discover_input_files(Path::new("."))?;
        if discovered.is_empty() {
            println!("No CSV files found under the current directory.");
            return Ok(ProcessingStats {
                processing_time: start_time.elapsed(),
                ..Default::default()
            });
        }

        info!(
            "Prompting user for file selection from {} discovered files",
            discovered.len()
        );
        let selected = crate::cli::input::prompt_file_selection(&discovered)?;
        info!("User selected {} files", selected.len());
        selected
    } else {
        intake::resolve_inputs(&args.inputs)?
    };

    let mut stats = ProcessingStats {
        files_discovered: files.len(),
        ..Default::default()
    };

    if files.is_empty() {
        info!("No input files resolved, nothing to render");
        println!("No input files to render.");
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    info!("Rendering {} input files", files.len());

    // Settle format and output destination up front
    let format = resolve_format(&config)?;
    let output_path = resolve_output_path(&config, format);
    debug!(
        "Output document: {} ({})",
        output_path.display(),
        format.name()
    );

    // Refuse to clobber an existing document unless forced or confirmed
    if !check_overwrite(&output_path, &config, &args)? {
        println!("Render aborted; existing output left unchanged.");
        stats.processing_time = start_time.elapsed();
        return Ok(stats);
    }

    // Load every input file; rendering waits for the last file to finish
    let mut session = RenderSession::new();
    let intake_stats = intake::load_all(
        &mut session,
        &files,
        config.processing.workers,
        cancellation_token.clone(),
        args.show_progress(),
    )
    .await?;

    stats.files_loaded = intake_stats.files_loaded;
    stats.files_failed = intake_stats.files_failed;
    stats.records_parsed = session.record_count();
    stats.warnings_recorded = session.stats().warnings.len();

    if stats.files_failed > 0 {
        warn!(
            "{} of {} input files failed to load and are not on the map",
            stats.files_failed, stats.files_discovered
        );
    }

    // Render the complete record set exactly once
    let renderer = MapRenderer::from_config(&config);
    let document = renderer.render(session.records(), format)?;

    stats.markers_rendered = document.stats.markers_rendered;
    stats.markers_skipped = document.stats.markers_skipped;

    // Write the document
    config.ensure_output_parent(&output_path)?;
    let output_size = write_document(&output_path, &document.content)?;
    stats
        .output_sizes
        .push((output_path.display().to_string(), output_size));

    info!(
        "Wrote {} ({} markers, {})",
        output_path.display(),
        stats.markers_rendered,
        ProcessingStats::format_size(output_size)
    );

    stats.processing_time = start_time.elapsed();

    // Generate final report
    generate_final_report(&args, &stats, &document.stats)?;

    Ok(stats)
}

/// Pick the output format from the post-override configuration
fn resolve_format(config: &Config) -> Result<RenderFormat> {
    match &config.processing.default_format {
        Some(name) => RenderFormat::from_name(name).ok_or_else(|| {
            Error::configuration(format!(
                "Unknown render format '{}' in configuration. Available formats: html, kml, geojson",
                name
            ))
        }),
        None => Ok(RenderFormat::default()),
    }
}

/// Pick the output path from the post-override configuration
fn resolve_output_path(config: &Config, format: RenderFormat) -> PathBuf {
    config
        .processing
        .output_path
        .clone()
        .unwrap_or_else(|| PathBuf::from(format.default_filename()))
}

/// Decide whether writing to the output path may proceed
///
/// Returns Ok(false) only when an interactive user declined the overwrite.
fn check_overwrite(output_path: &Path, config: &Config, args: &RenderArgs) -> Result<bool> {
    if !output_path.exists() || config.processing.force_overwrite {
        return Ok(true);
    }

    if args.quiet {
        return Err(Error::output_exists(output_path.display().to_string()));
    }

    crate::cli::input::prompt_confirmation(
        &format!(
            "Output file {} already exists. Overwrite?",
            output_path.display()
        ),
        false,
    )
}

/// Write the document and report its size on disk
fn write_document(output_path: &Path, content: &str) -> Result<u64> {
    std::fs::write(output_path, content).map_err(|e| {
        Error::io(
            format!("Failed to write output file '{}'", output_path.display()),
            e,
        )
    })?;

    let size = std::fs::metadata(output_path).map(|m| m.len()).unwrap_or(0);
    Ok(size)
}

/// Generate final render report
fn generate_final_report(
    args: &RenderArgs,
    stats: &ProcessingStats,
    render_stats: &RenderStats,
) -> Result<()> {
    info!("Generating final report");

    match args.output_format {
        OutputFormat::Human => generate_human_report(stats, render_stats),
        OutputFormat::Json => generate_json_report(stats, render_stats),
        OutputFormat::Csv => generate_csv_report(stats, render_stats),
    }
}

/// Generate human-readable report
fn generate_human_report(stats: &ProcessingStats, render_stats: &RenderStats) -> Result<()> {
    let duration = HumanDuration(stats.processing_time);
    let total_size = ProcessingStats::format_size(stats.total_output_size());

    println!("\n{}", "🎉 Map Rendering Complete!".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Render Summary:");
    println!(
        "   • Files loaded: {} of {}",
        stats.files_loaded, stats.files_discovered
    );
    println!("   • Records parsed: {}", stats.records_parsed);
    println!(
        "   • Markers rendered: {} ({}, {}, {}, {})",
        stats.markers_rendered,
        format!("green {}", render_stats.enrolled_markers).green(),
        format!("yellow {}", render_stats.skilled_markers).yellow(),
        format!("pink {}", render_stats.placed_markers).magenta(),
        format!("gray {}", render_stats.unknown_markers).bright_black()
    );
    println!("   • Total output size: {}", total_size);
    println!("   • Processing time: {}", duration);

    if stats.markers_skipped > 0 {
        println!(
            "⚠️  Markers skipped (bad coordinates): {}",
            stats.markers_skipped
        );
    }
    if stats.files_failed > 0 {
        println!("⚠️  Files failed to load: {}", stats.files_failed);
    }
    if stats.warnings_recorded > 0 {
        println!(
            "⚠️  Parse warnings: {} (run `pinmap report` for details)",
            stats.warnings_recorded
        );
    }

    if !stats.output_sizes.is_empty() {
        println!("\n📁 Output Files:");
        for (filename, size) in &stats.output_sizes {
            println!("   • {}: {}", filename, ProcessingStats::format_size(*size));
        }
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(stats: &ProcessingStats, render_stats: &RenderStats) -> Result<()> {
    let json_stats = serde_json::json!({
        "files_discovered": stats.files_discovered,
        "files_loaded": stats.files_loaded,
        "files_failed": stats.files_failed,
        "records_parsed": stats.records_parsed,
        "markers_rendered": stats.markers_rendered,
        "markers_skipped": stats.markers_skipped,
        "markers_by_category": {
            "enrolled": render_stats.enrolled_markers,
            "skilled": render_stats.skilled_markers,
            "placed": render_stats.placed_markers,
            "unknown": render_stats.unknown_markers,
        },
        "warnings_recorded": stats.warnings_recorded,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "total_output_size_bytes": stats.total_output_size(),
        "output_files": stats.output_sizes.iter().map(|(name, size)| {
            serde_json::json!({
                "filename": name,
                "size_bytes": size
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&json_stats)?);
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(stats: &ProcessingStats, render_stats: &RenderStats) -> Result<()> {
    println!("metric,value");
    println!("files_discovered,{}", stats.files_discovered);
    println!("files_loaded,{}", stats.files_loaded);
    println!("files_failed,{}", stats.files_failed);
    println!("records_parsed,{}", stats.records_parsed);
    println!("markers_rendered,{}", stats.markers_rendered);
    println!("markers_skipped,{}", stats.markers_skipped);
    println!("enrolled_markers,{}", render_stats.enrolled_markers);
    println!("skilled_markers,{}", render_stats.skilled_markers);
    println!("placed_markers,{}", render_stats.placed_markers);
    println!("unknown_markers,{}", render_stats.unknown_markers);
    println!("warnings_recorded,{}", stats.warnings_recorded);
    println!(
        "processing_time_seconds,{}",
        stats.processing_time.as_secs_f64()
    );
    println!("total_output_size_bytes,{}", stats.total_output_size());

    Ok(())
}
