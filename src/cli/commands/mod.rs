//! Command implementations for the pinmap CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod render;
pub mod report;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};
use tokio_util::sync::CancellationToken;

/// Main command runner for pinmap
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `render`: Load marker CSV files and render a map document
/// - `report`: Parse marker CSV files and summarize their contents
pub async fn run(args: Args, cancellation_token: CancellationToken) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Render(render_args) => {
            render::run_render(render_args, cancellation_token).await
        }
        Commands::Report(report_args) => {
            report::run_report(report_args, cancellation_token).await
        }
    }
}
