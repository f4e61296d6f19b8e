//! Channel-difference vocal suppression
//!
//! Subtracts the right channel from the left: content mixed identically into
//! both channels (center-panned vocals) cancels to near zero, while content
//! panned asymmetrically passes through attenuated in proportion to its
//! channel imbalance. O(N) over the sample count.

use crate::io::audio_buffer::AudioBuffer;
use crate::separation::SeparationOutput;

/// Suppress center-panned content via channel subtraction
///
/// # Arguments
///
/// * `buffer` - Decoded audio; channels past the first two are ignored
///
/// # Returns
///
/// `SeparationOutput` with `O[i] = L[i] - R[i]`. Mono input is returned
/// unchanged with `vocal_suppression_applied = false`.
pub fn separate_center_channel(buffer: &AudioBuffer) -> SeparationOutput {
    let (left, right) = match buffer.stereo_pair() {
        Some(pair) => pair,
        None => {
            log::warn!("Input is mono, vocal suppression not applicable");
            return SeparationOutput {
                samples: buffer.channels.first().cloned().unwrap_or_default(),
                vocal_suppression_applied: false,
            };
        }
    };

    log::debug!("Channel-difference separation over {} samples", left.len());

    let samples = left
        .iter()
        .zip(right.iter())
        .map(|(&l, &r)| l - r)
        .collect();

    SeparationOutput {
        samples,
        vocal_suppression_applied: true,
    }
}
