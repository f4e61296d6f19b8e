//! Short-time Fourier transform helpers
//!
//! Forward STFT with a periodic Hann window and inverse STFT via windowed
//! overlap-add. The same window and hop must be used for both directions so
//! reconstruction is consistent; the inverse normalizes by the accumulated
//! squared window, which makes analysis-then-synthesis an identity wherever
//! the window coverage is non-zero.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

/// Numerical stability epsilon
const EPSILON: f32 = 1e-10;

/// Periodic Hann window of the given size
pub fn hann_window(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let t = 2.0 * std::f32::consts::PI * i as f32 / size as f32;
            0.5 * (1.0 - t.cos())
        })
        .collect()
}

/// Compute the forward STFT of a signal
///
/// # Arguments
///
/// * `samples` - Time-domain signal; zero-padded to one frame if shorter
/// * `frame_size` - Analysis window length (typically 2048)
/// * `hop_size` - Samples between consecutive frames (typically 512)
///
/// # Returns
///
/// One complex spectrum of `frame_size` bins per analysis frame
pub fn stft(samples: &[f32], frame_size: usize, hop_size: usize) -> Vec<Vec<Complex<f32>>> {
    let window = hann_window(frame_size);

    let mut padded;
    let samples = if samples.len() < frame_size {
        padded = samples.to_vec();
        padded.resize(frame_size, 0.0);
        &padded[..]
    } else {
        samples
    };

    let n_frames = (samples.len() - frame_size) / hop_size + 1;
    log::debug!(
        "STFT: {} samples, frame={}, hop={}, {} frames",
        samples.len(),
        frame_size,
        hop_size,
        n_frames
    );

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(frame_size);

    let mut frames = Vec::with_capacity(n_frames);
    for f in 0..n_frames {
        let offset = f * hop_size;
        let mut spectrum: Vec<Complex<f32>> = samples[offset..offset + frame_size]
            .iter()
            .zip(&window)
            .map(|(&s, &w)| Complex::new(s * w, 0.0))
            .collect();
        fft.process(&mut spectrum);
        frames.push(spectrum);
    }

    frames
}

/// Reconstruct a time-domain signal from STFT frames via overlap-add
///
/// Must be called with the same `frame_size` and `hop_size` used for the
/// forward transform. The output length is `(n_frames - 1) * hop_size +
/// frame_size`, which may differ from the original signal length due to
/// windowing edge effects.
pub fn istft(frames: &[Vec<Complex<f32>>], frame_size: usize, hop_size: usize) -> Vec<f32> {
    if frames.is_empty() {
        return Vec::new();
    }

    let window = hann_window(frame_size);
    let out_len = (frames.len() - 1) * hop_size + frame_size;

    let mut planner = FftPlanner::new();
    let ifft = planner.plan_fft_inverse(frame_size);

    let mut output = vec![0.0f32; out_len];
    let mut window_sum = vec![0.0f32; out_len];
    let scale = 1.0 / frame_size as f32;

    for (f, frame) in frames.iter().enumerate() {
        let mut time = frame.clone();
        ifft.process(&mut time);

        let offset = f * hop_size;
        for (i, (&w, sample)) in window.iter().zip(time.iter()).enumerate() {
            // rustfft's inverse is unnormalized; scale by 1/N here.
            output[offset + i] += sample.re * scale * w;
            window_sum[offset + i] += w * w;
        }
    }

    for (sample, &wsum) in output.iter_mut().zip(&window_sum) {
        if wsum > EPSILON {
            *sample /= wsum;
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f32, length: usize, sample_rate: f32) -> Vec<f32> {
        (0..length)
            .map(|i| (2.0 * std::f32::consts::PI * freq * i as f32 / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_hann_window_shape() {
        let window = hann_window(8);
        assert_eq!(window.len(), 8);
        assert!(window[0].abs() < 1e-6, "Hann window should start at zero");
        assert!(
            (window[4] - 1.0).abs() < 1e-6,
            "Periodic Hann window should peak at N/2"
        );
    }

    #[test]
    fn test_frame_count() {
        let samples = vec![0.0f32; 2048 + 512 * 3];
        let frames = stft(&samples, 2048, 512);
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].len(), 2048);
    }

    #[test]
    fn test_short_input_zero_padded() {
        let samples = vec![0.5f32; 100];
        let frames = stft(&samples, 2048, 512);
        assert_eq!(frames.len(), 1, "Short input should yield a single frame");
    }

    #[test]
    fn test_round_trip_reconstruction() {
        let signal = sine(440.0, 8192, 44100.0);
        let frames = stft(&signal, 2048, 512);
        let rebuilt = istft(&frames, 2048, 512);

        // Interior samples should match closely; edges are window-dominated.
        for i in 2048..6144 {
            assert!(
                (rebuilt[i] - signal[i]).abs() < 1e-3,
                "Reconstruction mismatch at {}: {} vs {}",
                i,
                rebuilt[i],
                signal[i]
            );
        }
    }

    #[test]
    fn test_istft_empty() {
        assert!(istft(&[], 2048, 512).is_empty());
    }
}
