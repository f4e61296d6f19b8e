//! Per-file processing pipeline
//!
//! Runs one input through `Validate -> Decode -> Separate -> (Enhance) ->
//! Encode`. Any stage failure aborts this file only; nothing is written
//! before the encode stage, so a failed file never leaves partial output.

pub mod batch;

use std::path::{Path, PathBuf};

use crate::config::{ProcessingConfig, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS};
use crate::error::RemovalError;
use crate::io::decoder::decode_audio;
use crate::io::encoder::encode_wav;

/// Whether the path carries one of the recognized audio extensions
/// (case-insensitive)
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.iter().any(|&s| s == ext)
        })
        .unwrap_or(false)
}

/// Validate an input path before any decode work
///
/// # Errors
///
/// `RemovalError::InputNotFound` if the path does not exist,
/// `RemovalError::UnsupportedFormat` if the extension is not recognized.
pub fn validate_input(path: &Path) -> Result<(), RemovalError> {
    if !path.exists() {
        return Err(RemovalError::InputNotFound(path.to_path_buf()));
    }
    if !has_supported_extension(path) {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)");
        return Err(RemovalError::UnsupportedFormat(format!(
            "{} (recognized: {})",
            ext,
            SUPPORTED_EXTENSIONS.join(", ")
        )));
    }
    Ok(())
}

/// Derive the default output path: `<stem>_no_vocal<ext>` beside the input
pub fn derive_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}{}.{}", stem, OUTPUT_SUFFIX, ext),
        None => format!("{}{}", stem, OUTPUT_SUFFIX),
    };
    input.with_file_name(name)
}

/// Process one audio file end to end
///
/// # Arguments
///
/// * `input` - Path to the audio file
/// * `output` - Output path; derived from the input when `None`
/// * `config` - Separation method and enhancement switch
///
/// # Returns
///
/// The resolved output path on success
///
/// # Errors
///
/// Returns `RemovalError` from the failing stage; no output file is written
/// in that case.
pub fn process_file(
    input: &Path,
    output: Option<&Path>,
    config: &ProcessingConfig,
) -> Result<PathBuf, RemovalError> {
    validate_input(input)?;

    let buffer = decode_audio(input)?;
    log::info!(
        "Processing {} ({} channels, {} Hz, {:.2}s) with {} method",
        input.display(),
        buffer.channel_count(),
        buffer.sample_rate,
        buffer.duration_seconds(),
        config.method.name()
    );

    let separated = crate::remove_vocals(&buffer, config);
    if !separated.vocal_suppression_applied {
        log::info!("{}: mono input, written through unchanged", input.display());
    }

    let output_path = match output {
        Some(path) => path.to_path_buf(),
        None => derive_output_path(input),
    };

    encode_wav(&output_path, &separated.samples, buffer.sample_rate)?;
    log::info!("Wrote {}", output_path.display());

    Ok(output_path)
}
