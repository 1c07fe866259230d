//! File intake service for locating and loading marker CSV files
//!
//! Resolves a mixed list of file and directory arguments into concrete CSV
//! paths, then reads and parses every file concurrently. Each file is an
//! independent unit of work: a read failure is logged and recorded without
//! affecting the other files, and results land in the session in
//! task-completion order.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::app::services::record_parser::{ParseOutcome, RecordParser};
use crate::app::session::RenderSession;
use crate::constants::INPUT_FILE_EXTENSION;
use crate::{Error, Result};

/// Statistics from loading a batch of input files
#[derive(Debug, Clone, Default)]
pub struct IntakeStats {
    /// Number of files submitted for loading
    pub files_requested: usize,

    /// Number of files read and parsed successfully
    pub files_loaded: usize,

    /// Number of files that failed to load
    pub files_failed: usize,

    /// Total records parsed across all loaded files
    pub records_loaded: usize,
}

impl IntakeStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve input arguments into concrete CSV file paths
///
/// Plain files are kept in argument order. Directories are walked recursively
/// and contribute their `.csv` files in sorted order. A path that is neither
/// an existing file nor a directory is an error. An empty argument list
/// resolves to an empty file list, which is not an error.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_file() {
            files.push(input.clone());
        } else if input.is_dir() {
            let discovered = discover_input_files(input)?;
            debug!(
                "Discovered {} CSV files under {}",
                discovered.len(),
                input.display()
            );
            files.extend(discovered);
        } else {
            return Err(Error::file_not_found(input.display().to_string()));
        }
    }

    Ok(files)
}

/// Recursively discover CSV files under a directory, sorted by path
pub fn discover_input_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("failed to scan {}", dir.display()), e)
        })?;
        let path = entry.path();
        if path.is_file()
            && path.extension().and_then(|s| s.to_str()) == Some(INPUT_FILE_EXTENSION)
        {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

/// Load every input file into the session
///
/// Spawns one read task per file on a [`JoinSet`], bounded by a semaphore of
/// `workers` permits. Outcomes are appended to the session as tasks complete,
/// so record order across files follows read-completion order while line
/// order within each file is preserved. Per-file read failures are recorded
/// in the session and do not abort the batch; cancellation aborts remaining
/// tasks and returns [`Error::ProcessingInterrupted`].
pub async fn load_all(
    session: &mut RenderSession,
    files: &[PathBuf],
    workers: usize,
    cancellation_token: CancellationToken,
    show_progress: bool,
) -> Result<IntakeStats> {
    let mut stats = IntakeStats::new();
    stats.files_requested = files.len();

    if files.is_empty() {
        debug!("No input files to load");
        return Ok(stats);
    }

    let worker_count = workers.max(1);
    info!(
        "Loading {} input files with {} concurrent readers",
        files.len(),
        worker_count
    );

    let progress_bar = if show_progress {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        pb.set_message("Reading input files...");
        Some(pb)
    } else {
        None
    };

    let semaphore = Arc::new(Semaphore::new(worker_count));
    let mut join_set = JoinSet::new();

    for path in files {
        let path = path.clone();
        let semaphore = Arc::clone(&semaphore);
        let token = cancellation_token.clone();
        join_set.spawn(load_file(path, semaphore, token));
    }

    loop {
        tokio::select! {
            _ = cancellation_token.cancelled() => {
                join_set.abort_all();
                if let Some(pb) = &progress_bar {
                    pb.abandon_with_message("Loading cancelled");
                }
                return Err(Error::processing_interrupted(
                    "input loading cancelled by user",
                ));
            }
            task_result = join_set.join_next() => {
                match task_result {
                    Some(Ok((path, Ok(outcome)))) => {
                        debug!(
                            "Loaded {} ({} records)",
                            path.display(),
                            outcome.records.len()
                        );
                        stats.files_loaded += 1;
                        stats.records_loaded += outcome.records.len();
                        session.append_outcome(outcome);
                        if let Some(pb) = &progress_bar {
                            pb.inc(1);
                            pb.set_message(format!(
                                "Loaded {}",
                                path.file_name().unwrap_or_default().to_string_lossy()
                            ));
                        }
                    }
                    Some(Ok((path, Err(e)))) => {
                        if matches!(e, Error::ProcessingInterrupted { .. }) {
                            join_set.abort_all();
                            return Err(e);
                        }
                        warn!("Failed to load {}: {}", path.display(), e);
                        stats.files_failed += 1;
                        session.record_source_failure(path.display().to_string(), e.to_string());
                        if let Some(pb) = &progress_bar {
                            pb.inc(1);
                        }
                    }
                    Some(Err(join_error)) => {
                        error!("Input load task failed: {}", join_error);
                        join_set.abort_all();
                        return Err(Error::processing_interrupted(format!(
                            "input load task failed: {}",
                            join_error
                        )));
                    }
                    None => break,
                }
            }
        }
    }

    if let Some(pb) = &progress_bar {
        pb.finish_with_message(format!(
            "Loaded {} of {} files",
            stats.files_loaded, stats.files_requested
        ));
    }

    info!(
        "Intake complete: {} files loaded, {} failed, {} records",
        stats.files_loaded, stats.files_failed, stats.records_loaded
    );

    Ok(stats)
}

/// Read and parse one file under a concurrency permit
async fn load_file(
    path: PathBuf,
    semaphore: Arc<Semaphore>,
    cancellation_token: CancellationToken,
) -> (PathBuf, Result<ParseOutcome>) {
    let _permit = match semaphore.acquire().await {
        Ok(permit) => permit,
        Err(e) => {
            return (
                path,
                Err(Error::processing_interrupted(format!(
                    "failed to acquire read permit: {}",
                    e
                ))),
            );
        }
    };

    if cancellation_token.is_cancelled() {
        return (
            path,
            Err(Error::processing_interrupted("input loading cancelled")),
        );
    }

    let result = RecordParser::new().parse_file(&path).await;
    (path, result)
}
