//! Vocal separation modules
//!
//! Two interchangeable algorithms:
//! - Channel difference (time domain, fast, default)
//! - Phase-masked spectral subtraction (frequency domain, slower, rejects
//!   phase-divergent residue)
//!
//! Both exploit the center-panned vocal convention: lead vocals are usually
//! mixed with equal amplitude and phase into both stereo channels.

pub mod channel_diff;
pub mod spectral;
pub mod stft;

/// Outcome of a separation stage
#[derive(Debug, Clone)]
pub struct SeparationOutput {
    /// Single-channel instrumental signal
    pub samples: Vec<f32>,

    /// False when the input was mono and passed through unchanged.
    /// A reported condition, not a failure.
    pub vocal_suppression_applied: bool,
}
