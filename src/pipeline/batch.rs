//! Batch orchestration over a directory of audio files
//!
//! Every candidate file runs through the per-file pipeline independently; a
//! failure is recorded and the run continues. The only batch-fatal error is
//! failing to create the output directory itself.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{ProcessingConfig, BATCH_OUTPUT_DIR};
use crate::error::RemovalError;
use crate::pipeline::{derive_output_path, has_supported_extension, process_file};

/// Aggregate outcome of a directory run
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Number of files processed successfully
    pub successful: usize,

    /// Number of files that failed
    pub failed: usize,

    /// (file name, error description) per failure, in processing order
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// Total number of files attempted
    pub fn total(&self) -> usize {
        self.successful + self.failed
    }
}

/// List candidate audio files directly inside `dir`, sorted by path
///
/// Matches against the recognized extension set, case-insensitive. Files in
/// subdirectories are not candidates.
pub fn discover_audio_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| has_supported_extension(path))
        .collect();
    files.sort();
    files
}

/// Process every audio file in a directory
///
/// # Arguments
///
/// * `dir` - Input directory
/// * `output_dir` - Output directory; defaults to `<dir>/no_vocal`, created
///   if absent
/// * `config` - Separation method and enhancement switch, shared by all files
///
/// # Returns
///
/// `BatchResult` with success/failure counts. Per-file failures never abort
/// the run.
///
/// # Errors
///
/// `RemovalError::InputNotFound` if `dir` does not exist,
/// `RemovalError::EncodeFailure` if the output directory cannot be created
/// (this aborts the batch before any file is processed).
pub fn process_directory(
    dir: &Path,
    output_dir: Option<&Path>,
    config: &ProcessingConfig,
) -> Result<BatchResult, RemovalError> {
    if !dir.exists() {
        return Err(RemovalError::InputNotFound(dir.to_path_buf()));
    }

    let files = discover_audio_files(dir);
    log::info!("Found {} audio files in {}", files.len(), dir.display());

    let out_dir = match output_dir {
        Some(path) => path.to_path_buf(),
        None => dir.join(BATCH_OUTPUT_DIR),
    };
    std::fs::create_dir_all(&out_dir).map_err(|e| {
        RemovalError::EncodeFailure(format!(
            "cannot create output directory {}: {}",
            out_dir.display(),
            e
        ))
    })?;

    let mut result = BatchResult::default();

    for (i, file) in files.iter().enumerate() {
        log::info!("[{}/{}] {}", i + 1, files.len(), file.display());

        let file_name = derive_output_path(file)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let output = out_dir.join(file_name);

        match process_file(file, Some(&output), config) {
            Ok(path) => {
                result.successful += 1;
                log::debug!("Success: {}", path.display());
            }
            Err(e) => {
                result.failed += 1;
                let name = file
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("?")
                    .to_string();
                log::warn!("Failed to process {}: {}", name, e);
                result.failures.push((name, e.to_string()));
            }
        }
    }

    log::info!(
        "Batch finished: {} successful, {} failed",
        result.successful,
        result.failed
    );

    Ok(result)
}
