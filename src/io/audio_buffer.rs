//! In-memory representation of decoded audio

/// Decoded audio: one sample plane per channel plus the sample rate
///
/// All channel planes have equal length. The sample rate is set at decode
/// time and propagated unchanged through every transform (this pipeline
/// never resamples).
#[derive(Debug, Clone)]
pub struct AudioBuffer {
    /// Per-channel sample planes, samples in roughly [-1.0, 1.0]
    pub channels: Vec<Vec<f32>>,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl AudioBuffer {
    /// Create a buffer from channel planes
    ///
    /// Planes longer than the shortest one are truncated so the equal-length
    /// invariant holds.
    pub fn new(mut channels: Vec<Vec<f32>>, sample_rate: u32) -> Self {
        if let Some(min_len) = channels.iter().map(|c| c.len()).min() {
            for plane in channels.iter_mut() {
                plane.truncate(min_len);
            }
        }
        Self {
            channels,
            sample_rate,
        }
    }

    /// Number of channels
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel
    pub fn len(&self) -> usize {
        self.channels.first().map(|c| c.len()).unwrap_or(0)
    }

    /// Whether the buffer holds no samples
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the buffer has exactly one channel
    pub fn is_mono(&self) -> bool {
        self.channels.len() == 1
    }

    /// Duration in seconds
    pub fn duration_seconds(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.len() as f32 / self.sample_rate as f32
    }

    /// Left and right planes, dropping any channel past the first two
    ///
    /// Buffers with more than two channels are accepted with silent
    /// degradation to the first two. Returns `None` for mono input.
    pub fn stereo_pair(&self) -> Option<(&[f32], &[f32])> {
        if self.channels.len() < 2 {
            return None;
        }
        if self.channels.len() > 2 {
            log::debug!(
                "Buffer has {} channels, using only the first two",
                self.channels.len()
            );
        }
        Some((&self.channels[0], &self.channels[1]))
    }
}
