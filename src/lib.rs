//! # devocal
//!
//! A vocal suppression engine for stereo music recordings: extracts an
//! instrumental signal by exploiting the center-panned vocal mixing
//! convention, with optional post-separation enhancement.
//!
//! ## Features
//!
//! - **Channel-difference separation**: time-domain `L - R` cancellation,
//!   fast default path
//! - **Spectral separation**: STFT phase-difference masking, rejects
//!   phase-divergent residue at higher cost
//! - **Enhancement**: peak normalization plus a zero-phase 80 Hz
//!   Butterworth high-pass
//! - **Batch processing**: per-file failure isolation with aggregate counts
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use devocal::{process_file, ProcessingConfig};
//!
//! let config = ProcessingConfig::default();
//! let output = process_file(Path::new("song.mp3"), None, &config)?;
//! println!("Instrumental written to {}", output.display());
//! # Ok::<(), devocal::RemovalError>(())
//! ```
//!
//! ## Architecture
//!
//! The per-file pipeline follows this flow:
//!
//! ```text
//! Validate -> Decode -> Separate -> (Enhance) -> Encode
//! ```
//!
//! Batch mode runs the pipeline once per discovered file; one file's failure
//! never aborts the run.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod enhancement;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod separation;

// Re-export main types
pub use config::{ProcessingConfig, SeparationMethod};
pub use error::RemovalError;
pub use io::audio_buffer::AudioBuffer;
pub use pipeline::batch::{process_directory, BatchResult};
pub use pipeline::process_file;
pub use separation::SeparationOutput;

/// Separate and optionally enhance an already-decoded buffer
///
/// The in-memory core of the pipeline: applies the configured separation
/// method and, when `config.enhance` is set, the enhancement stage.
///
/// # Arguments
///
/// * `buffer` - Decoded audio; mono passes through, channels past the first
///   two are ignored
/// * `config` - Separation method and enhancement switch
///
/// # Returns
///
/// `SeparationOutput` holding the single-channel instrumental signal. For
/// the spectral method the output length may differ slightly from the input
/// length.
///
/// # Example
///
/// ```
/// use devocal::{remove_vocals, AudioBuffer, ProcessingConfig};
///
/// let left = vec![0.5f32; 1024];
/// let right = vec![0.5f32; 1024];
/// let buffer = AudioBuffer::new(vec![left, right], 44100);
///
/// let output = remove_vocals(&buffer, &ProcessingConfig::default());
/// assert_eq!(output.samples.len(), 1024);
/// ```
pub fn remove_vocals(buffer: &AudioBuffer, config: &ProcessingConfig) -> SeparationOutput {
    let separated = match config.method {
        SeparationMethod::Center => separation::channel_diff::separate_center_channel(buffer),
        SeparationMethod::Spectral => separation::spectral::separate_spectral(buffer),
    };

    if !config.enhance {
        return separated;
    }

    SeparationOutput {
        samples: enhancement::enhance(&separated.samples, buffer.sample_rate),
        vocal_suppression_applied: separated.vocal_suppression_applied,
    }
}
