//! Command-line argument definitions for pinmap
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::app::models::Status;
use crate::app::services::map_renderer::RenderFormat;
use crate::constants::MAX_ZOOM;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the pinmap marker map generator
///
/// Reads plain `latitude,longitude,status` CSV files and renders one marker
/// per record onto a map document, with marker color and letter keyed to the
/// record's status category.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pinmap",
    version,
    about = "Render status-tagged coordinate CSV files as marker maps",
    long_about = "Reads CSV files of latitude,longitude,status records and renders them as a \
                  marker map. Each status category (enrolled, skilled, placed) gets its own \
                  marker color, and markers within a category are lettered A-Z in record order. \
                  Output formats: a self-contained Leaflet HTML page, KML, or GeoJSON."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for pinmap
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Render marker CSV files into a map document (main command)
    Render(RenderArgs),
    /// Summarize marker CSV files without rendering a map
    Report(ReportArgs),
}

/// Arguments for the render command (main map generation)
#[derive(Debug, Clone, Parser)]
pub struct RenderArgs {
    /// Input CSV files or directories
    ///
    /// Directories are searched recursively for .csv files. If no inputs are
    /// given, pinmap discovers CSV files under the current directory and
    /// prompts for a selection.
    #[arg(value_name = "INPUTS", help = "CSV files or directories to render")]
    pub inputs: Vec<PathBuf>,

    /// Output path for the rendered map document
    ///
    /// If not specified, defaults to map.html, map.kml, or map.geojson in the
    /// current directory depending on the chosen format.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Output path for the rendered map document"
    )]
    pub output: Option<PathBuf>,

    /// Output document format
    ///
    /// One of: html (self-contained Leaflet page), kml, geojson.
    /// Defaults to html unless the config file says otherwise.
    #[arg(
        short = 'f',
        long = "format",
        value_name = "FORMAT",
        help = "Output document format: html, kml, or geojson"
    )]
    pub format: Option<String>,

    /// Map center as a lat,lng pair
    ///
    /// Overrides the configured map center.
    #[arg(
        long = "center",
        value_name = "LAT,LNG",
        help = "Map center as a lat,lng pair"
    )]
    pub center: Option<String>,

    /// Initial map zoom level
    #[arg(
        short = 'z',
        long = "zoom",
        value_name = "LEVEL",
        help = "Initial map zoom level (0-21)"
    )]
    pub zoom: Option<u8>,

    /// Map document title
    #[arg(long = "title", value_name = "TITLE", help = "Map document title")]
    pub title: Option<String>,

    /// Directory holding the marker icon images
    ///
    /// Icon paths in the output document are written relative to this
    /// directory, like markers/green_MarkerA.png.
    #[arg(
        long = "assets-dir",
        value_name = "DIR",
        help = "Directory holding the marker icon images"
    )]
    pub assets_dir: Option<String>,

    /// Force overwrite of an existing output file
    ///
    /// By default pinmap will not overwrite an existing output document.
    #[arg(long = "force", help = "Force overwrite of an existing output file")]
    pub force_overwrite: bool,

    /// Path to configuration file
    ///
    /// TOML configuration file for defaults. If not specified, looks for
    /// ~/.config/pinmap/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Number of concurrent file readers
    ///
    /// Controls how many input files are read at once.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of concurrent file readers"
    )]
    pub workers: Option<usize>,

    /// Disable progress bars
    #[arg(long = "no-progress", help = "Disable progress bars")]
    pub no_progress: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the final summary
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for the render summary"
    )]
    pub output_format: OutputFormat,
}

/// Arguments for the report command (parse statistics without rendering)
#[derive(Debug, Clone, Parser)]
pub struct ReportArgs {
    /// Input CSV files or directories
    ///
    /// Directories are searched recursively for .csv files.
    #[arg(value_name = "INPUTS", help = "CSV files or directories to summarize")]
    pub inputs: Vec<PathBuf>,

    /// Output format for the report
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Output file for the report
    ///
    /// If not specified, outputs to stdout
    #[arg(
        short = 'o',
        long = "output-file",
        value_name = "FILE",
        help = "Output file for the report"
    )]
    pub output_file: Option<PathBuf>,

    /// Restrict the category breakdown to a single status
    ///
    /// Category counts, label coverage, and coordinate bounds are computed
    /// over records of this status only. Totals stay global.
    #[arg(
        long = "status",
        value_name = "STATUS",
        help = "Only break down records with this status: enrolled, skilled, placed, or unknown"
    )]
    pub status: Option<String>,

    /// Include per-file breakdown and every parse warning
    ///
    /// By default, shows summary statistics with the first few warnings.
    #[arg(
        long = "detailed",
        help = "Include per-file breakdown and the full warning listing"
    )]
    pub detailed: bool,

    /// Enable verbose logging output
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Enable verbose logging (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress progress and informational output",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl RenderArgs {
    /// Validate the render command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input paths exist (only those explicitly provided)
        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        // Validate format name
        if let Some(format) = &self.format {
            if RenderFormat::from_name(format).is_none() {
                return Err(Error::configuration(format!(
                    "Unknown output format '{}'. Available formats: html, kml, geojson",
                    format
                )));
            }
        }

        // Validate center coordinates
        if let Some(center) = &self.center {
            self.parse_center(center)?;
        }

        // Validate zoom level
        if let Some(zoom) = self.zoom {
            if zoom > MAX_ZOOM {
                return Err(Error::configuration(format!(
                    "Zoom level cannot exceed {}",
                    MAX_ZOOM
                )));
            }
        }

        // Validate workers count
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0".to_string(),
                ));
            }

            if workers > 100 {
                return Err(Error::configuration(
                    "Number of workers cannot exceed 100".to_string(),
                ));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Get the requested render format, if one was given
    pub fn get_format(&self) -> Result<Option<RenderFormat>> {
        match &self.format {
            Some(name) => {
                let format = RenderFormat::from_name(name).ok_or_else(|| {
                    Error::configuration(format!(
                        "Unknown output format '{}'. Available formats: html, kml, geojson",
                        name
                    ))
                })?;
                Ok(Some(format))
            }
            None => Ok(None),
        }
    }

    /// Get the requested map center, if one was given
    pub fn get_center(&self) -> Result<Option<(f64, f64)>> {
        match &self.center {
            Some(center) => Ok(Some(self.parse_center(center)?)),
            None => Ok(None),
        }
    }

    /// Parse a center coordinate pair string
    pub fn parse_center(&self, center: &str) -> Result<(f64, f64)> {
        let parts: Vec<&str> = center.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::configuration(
                "Center must be in format: lat,lng".to_string(),
            ));
        }

        let lat: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid latitude: {}", parts[0])))?;
        let lng: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| Error::configuration(format!("Invalid longitude: {}", parts[1])))?;

        if !(-90.0..=90.0).contains(&lat) {
            return Err(Error::configuration(
                "Latitude must be between -90 and 90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(Error::configuration(
                "Longitude must be between -180 and 180".to_string(),
            ));
        }

        Ok((lat, lng))
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress
    }
}

impl ReportArgs {
    /// Validate the report command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        // Validate input paths exist
        for input in &self.inputs {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input path does not exist: {}",
                    input.display()
                )));
            }
        }

        // Validate output file directory exists if specified
        if let Some(output_file) = &self.output_file {
            if let Some(parent) = output_file.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output file directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        // Validate status name
        if let Some(status) = &self.status {
            if !Status::ALL.iter().any(|s| s.name() == status.as_str()) {
                return Err(Error::configuration(format!(
                    "Unknown status '{}'. Available statuses: enrolled, skilled, placed, unknown",
                    status
                )));
            }
        }

        Ok(())
    }

    /// Get the requested status filter, if one was given
    pub fn get_status_filter(&self) -> Result<Option<Status>> {
        match &self.status {
            Some(name) => {
                let status = Status::ALL
                    .into_iter()
                    .find(|s| s.name() == name.as_str())
                    .ok_or_else(|| {
                        Error::configuration(format!(
                            "Unknown status '{}'. Available statuses: enrolled, skilled, placed, unknown",
                            name
                        ))
                    })?;
                Ok(Some(status))
            }
            None => Ok(None),
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }

        match self.verbose {
            0 => "warn", // Default level for report command
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            format: None,
            center: None,
            zoom: None,
            title: None,
            assets_dir: None,
            force_overwrite: false,
            config_file: None,
            workers: None,
            no_progress: false,
            verbose: 0,
            quiet: false,
            output_format: OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_center_parsing() {
        let args = RenderArgs::default();

        // Valid pair
        let result = args.parse_center("18.520679,73.8565").unwrap();
        assert_eq!(result, (18.520679, 73.8565));

        // Valid with spaces
        let result = args.parse_center(" 18.5 , 73.8 ").unwrap();
        assert_eq!(result, (18.5, 73.8));

        // Wrong part count
        assert!(args.parse_center("18.5").is_err());
        assert!(args.parse_center("18.5,73.8,12").is_err());

        // Not numbers
        assert!(args.parse_center("north,east").is_err());

        // Out of range
        assert!(args.parse_center("91.0,73.8").is_err());
        assert!(args.parse_center("18.5,181.0").is_err());
    }

    #[test]
    fn test_get_center_when_absent() {
        let args = RenderArgs::default();
        assert_eq!(args.get_center().unwrap(), None);
    }

    #[test]
    fn test_render_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("markers.csv");
        std::fs::write(&input, "18.5,73.8,enrolled\n").unwrap();

        let args = RenderArgs {
            inputs: vec![input],
            ..Default::default()
        };
        assert!(args.validate().is_ok());

        // Nonexistent input path
        let mut invalid_args = args.clone();
        invalid_args.inputs = vec![PathBuf::from("/nonexistent/path.csv")];
        assert!(invalid_args.validate().is_err());

        // Unknown format
        let mut invalid_args = args.clone();
        invalid_args.format = Some("pdf".to_string());
        assert!(invalid_args.validate().is_err());

        // Bad center
        let mut invalid_args = args.clone();
        invalid_args.center = Some("18.5".to_string());
        assert!(invalid_args.validate().is_err());

        // Zoom beyond limit
        let mut invalid_args = args.clone();
        invalid_args.zoom = Some(22);
        assert!(invalid_args.validate().is_err());

        // Invalid workers
        let mut invalid_args = args.clone();
        invalid_args.workers = Some(0);
        assert!(invalid_args.validate().is_err());

        invalid_args.workers = Some(101);
        assert!(invalid_args.validate().is_err());
    }

    #[test]
    fn test_get_format() {
        let mut args = RenderArgs::default();
        assert_eq!(args.get_format().unwrap(), None);

        args.format = Some("kml".to_string());
        assert_eq!(args.get_format().unwrap(), Some(RenderFormat::Kml));

        args.format = Some("pdf".to_string());
        assert!(args.get_format().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = RenderArgs::default();

        // Default level
        assert_eq!(args.get_log_level(), "warn");

        // Verbose levels
        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        // Quiet mode
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress() {
        let mut args = RenderArgs::default();
        assert!(args.show_progress());

        args.no_progress = true;
        assert!(!args.show_progress());

        args.no_progress = false;
        args.quiet = true;
        assert!(!args.show_progress());
    }

    #[test]
    fn test_report_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("markers.csv");
        std::fs::write(&input, "18.5,73.8,enrolled\n").unwrap();

        let args = ReportArgs {
            inputs: vec![input.clone()],
            output_format: OutputFormat::Human,
            output_file: None,
            status: None,
            detailed: false,
            verbose: 0,
            quiet: false,
        };
        assert!(args.validate().is_ok());

        // Output file in a directory that does not exist
        let invalid_args = ReportArgs {
            inputs: vec![input.clone()],
            output_format: OutputFormat::Human,
            output_file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            status: None,
            detailed: false,
            verbose: 0,
            quiet: false,
        };
        assert!(invalid_args.validate().is_err());

        // Unknown status name
        let invalid_status = ReportArgs {
            inputs: vec![input],
            output_format: OutputFormat::Human,
            output_file: None,
            status: Some("graduated".to_string()),
            detailed: false,
            verbose: 0,
            quiet: false,
        };
        assert!(invalid_status.validate().is_err());
    }

    #[test]
    fn test_report_status_filter() {
        let mut args = ReportArgs {
            inputs: vec![],
            output_format: OutputFormat::Human,
            output_file: None,
            status: None,
            detailed: false,
            verbose: 0,
            quiet: false,
        };
        assert_eq!(args.get_status_filter().unwrap(), None);

        args.status = Some("placed".to_string());
        assert_eq!(args.get_status_filter().unwrap(), Some(Status::Placed));

        args.status = Some("unknown".to_string());
        assert_eq!(args.get_status_filter().unwrap(), Some(Status::Unknown));

        args.status = Some("Placed".to_string());
        assert!(args.get_status_filter().is_err());
    }

    #[test]
    fn test_report_log_level() {
        let mut args = ReportArgs {
            inputs: vec![],
            output_format: OutputFormat::Human,
            output_file: None,
            status: None,
            detailed: false,
            verbose: 0,
            quiet: false,
        };
        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
