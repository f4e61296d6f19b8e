//! Zero-phase Butterworth high-pass filtering
//!
//! A 4th-order Butterworth high-pass built as a cascade of two second-order
//! sections (RBJ cookbook coefficients), run forward and then backward over
//! the signal. The forward pass and the time-reversed pass have conjugate
//! phase responses, so the net phase shift is zero and transient timing is
//! preserved while the squared magnitude response doubles the rolloff steepness.

/// Butterworth pole Q values for a 4th-order filter split into two
/// second-order sections: 1 / (2 cos(pi/8)) and 1 / (2 cos(3 pi/8))
const SECTION_Q: [f32; 2] = [0.541_196_1, 1.306_563_0];

/// Second-order IIR section, Direct Form II transposed
struct Biquad {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
}

impl Biquad {
    /// RBJ high-pass section for the given cutoff and Q
    fn highpass(cutoff_hz: f32, sample_rate: f32, q: f32) -> Self {
        let w0 = 2.0 * std::f32::consts::PI * cutoff_hz / sample_rate;
        let cos_w0 = w0.cos();
        let alpha = w0.sin() / (2.0 * q);

        let b0 = (1.0 + cos_w0) / 2.0;
        let b1 = -(1.0 + cos_w0);
        let b2 = (1.0 + cos_w0) / 2.0;
        let a0 = 1.0 + alpha;
        let a1 = -2.0 * cos_w0;
        let a2 = 1.0 - alpha;

        Self {
            b0: b0 / a0,
            b1: b1 / a0,
            b2: b2 / a0,
            a1: a1 / a0,
            a2: a2 / a0,
            x1: 0.0,
            x2: 0.0,
        }
    }

    fn process(&mut self, sample: f32) -> f32 {
        let output = self.b0 * sample + self.x1;
        self.x1 = self.b1 * sample + self.x2 - self.a1 * output;
        self.x2 = self.b2 * sample - self.a2 * output;
        output
    }

    fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
    }
}

/// Run the full cascade over the signal in place
fn run_cascade(sections: &mut [Biquad], samples: &mut [f32]) {
    for sample in samples.iter_mut() {
        let mut s = *sample;
        for section in sections.iter_mut() {
            s = section.process(s);
        }
        *sample = s;
    }
}

/// Apply a 4th-order Butterworth high-pass with zero phase distortion
///
/// Filters forward, then backward over the reversed signal, so the net group
/// delay is zero. The signal is modified in place and keeps its length.
///
/// # Arguments
///
/// * `samples` - Signal to filter in place
/// * `cutoff_hz` - Cutoff frequency in Hz (typically 80.0)
/// * `sample_rate` - Sample rate in Hz
///
/// Sample rates where the normalized cutoff `cutoff / (sample_rate / 2)`
/// falls outside (0, 1) leave the signal unchanged.
pub fn zero_phase_highpass(samples: &mut [f32], cutoff_hz: f32, sample_rate: u32) {
    let nyquist = sample_rate as f32 / 2.0;
    let normalized = cutoff_hz / nyquist;
    if normalized <= 0.0 || normalized >= 1.0 {
        log::warn!(
            "High-pass cutoff {:.1} Hz invalid for sample rate {} Hz, skipping filter",
            cutoff_hz,
            sample_rate
        );
        return;
    }

    log::debug!(
        "Zero-phase high-pass: cutoff {:.1} Hz at {} Hz ({} samples)",
        cutoff_hz,
        sample_rate,
        samples.len()
    );

    let mut sections = [
        Biquad::highpass(cutoff_hz, sample_rate as f32, SECTION_Q[0]),
        Biquad::highpass(cutoff_hz, sample_rate as f32, SECTION_Q[1]),
    ];

    run_cascade(&mut sections, samples);

    samples.reverse();
    for section in sections.iter_mut() {
        section.reset();
    }
    run_cascade(&mut sections, samples);
    samples.reverse();
}
