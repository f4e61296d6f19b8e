//! Configuration parameters for vocal suppression

use std::str::FromStr;

use crate::error::RemovalError;

/// Recognized audio file extensions (matched case-insensitively)
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["wav", "mp3", "flac", "m4a", "ogg"];

/// Suffix appended to the input stem when deriving an output file name
pub const OUTPUT_SUFFIX: &str = "_no_vocal";

/// Subdirectory name for batch output when no output directory is given
pub const BATCH_OUTPUT_DIR: &str = "no_vocal";

/// STFT analysis frame size in samples (default: 2048)
pub const STFT_FRAME_SIZE: usize = 2048;

/// STFT hop size in samples (default: 512, 75% overlap)
pub const STFT_HOP_SIZE: usize = 512;

/// Phase difference threshold in radians for the spectral mask (default: 0.5)
///
/// Bins where the inter-channel phase difference stays below this value are
/// treated as center-panned content and suppressed.
pub const PHASE_DIFF_THRESHOLD: f32 = 0.5;

/// High-pass cutoff frequency in Hz for the enhancement stage (default: 80.0)
pub const HIGHPASS_CUTOFF_HZ: f32 = 80.0;

/// Vocal separation method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparationMethod {
    /// Time-domain channel difference (L - R). Fast, O(N), default.
    Center,
    /// STFT phase-difference masking. Slower, rejects phase-divergent
    /// residue that plain subtraction leaves behind.
    Spectral,
}

impl SeparationMethod {
    /// Method name as used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            SeparationMethod::Center => "center",
            SeparationMethod::Spectral => "spectral",
        }
    }
}

impl FromStr for SeparationMethod {
    type Err = RemovalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "center" => Ok(SeparationMethod::Center),
            "spectral" => Ok(SeparationMethod::Spectral),
            other => Err(RemovalError::InvalidMethod(format!(
                "{} (expected 'center' or 'spectral')",
                other
            ))),
        }
    }
}

/// Per-invocation processing configuration
#[derive(Debug, Clone, Copy)]
pub struct ProcessingConfig {
    /// Separation method to use (default: Center)
    pub method: SeparationMethod,

    /// Apply normalization and high-pass filtering after separation
    /// (default: true)
    pub enhance: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            method: SeparationMethod::Center,
            enhance: true,
        }
    }
}
