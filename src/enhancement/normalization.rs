//! Peak normalization

/// Numerical stability epsilon for divisions
const EPSILON: f32 = 1e-10;

/// Scale a signal so its peak magnitude is 1.0
///
/// An entirely silent (or near-silent) signal is left unchanged: there is
/// nothing to scale and dividing by the zero peak would be undefined. This
/// is a degenerate condition, not a failure.
pub fn normalize_peak(samples: &mut [f32]) {
    let peak = samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);

    if peak <= EPSILON {
        log::warn!("Signal is silent or extremely quiet, skipping normalization");
        return;
    }

    for sample in samples.iter_mut() {
        *sample /= peak;
    }

    log::debug!("Peak normalization: previous peak {:.6}", peak);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_becomes_unity() {
        let mut samples = vec![0.1f32, -0.4, 0.2];
        normalize_peak(&mut samples);

        let peak = samples.iter().map(|&x| x.abs()).fold(0.0f32, f32::max);
        assert!(
            (peak - 1.0).abs() < 1e-6,
            "Peak should be 1.0 after normalization, got {}",
            peak
        );
        assert!((samples[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_relative_levels_preserved() {
        let mut samples = vec![0.25f32, 0.5];
        normalize_peak(&mut samples);
        assert!((samples[0] - 0.5).abs() < 1e-6);
        assert!((samples[1] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_silent_signal_unchanged() {
        let mut samples = vec![0.0f32; 64];
        normalize_peak(&mut samples);
        assert_eq!(samples, vec![0.0; 64], "Silence must not be modified");
    }

    #[test]
    fn test_empty_signal() {
        let mut samples: Vec<f32> = vec![];
        normalize_peak(&mut samples);
        assert!(samples.is_empty());
    }
}
