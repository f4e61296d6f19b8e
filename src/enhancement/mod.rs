//! Post-separation enhancement
//!
//! Channel subtraction leaves the instrumental quiet and with residual
//! low-frequency rumble. This stage peak-normalizes the signal and removes
//! content below 80 Hz with a zero-phase high-pass so transient timing is
//! untouched.

pub mod highpass;
pub mod normalization;

use crate::config::HIGHPASS_CUTOFF_HZ;

/// Normalize and high-pass filter a separated signal
///
/// # Arguments
///
/// * `samples` - Single-channel separated signal
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
///
/// Enhanced signal of the same length. An entirely silent input is returned
/// unchanged (normalization is skipped, filtering a zero signal is a no-op).
pub fn enhance(samples: &[f32], sample_rate: u32) -> Vec<f32> {
    let mut enhanced = samples.to_vec();
    normalization::normalize_peak(&mut enhanced);
    highpass::zero_phase_highpass(&mut enhanced, HIGHPASS_CUTOFF_HZ, sample_rate);
    enhanced
}
