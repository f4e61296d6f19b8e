//! WAV output writing using hound

use std::path::Path;

use crate::error::RemovalError;

/// Write a mono f32 signal as a 32-bit float WAV file
///
/// The output is always waveform-encoded regardless of the extension on
/// `path`; derived output names keep the input's extension.
///
/// # Arguments
///
/// * `path` - Output file path
/// * `samples` - Mono samples
/// * `sample_rate` - Sample rate in Hz
///
/// # Errors
///
/// Returns `RemovalError::EncodeFailure` if the file cannot be created or
/// written.
pub fn encode_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<(), RemovalError> {
    log::debug!(
        "Encoding {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.display()
    );

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .map_err(|e| RemovalError::EncodeFailure(format!("{}: {}", path.display(), e)))?;

    for &sample in samples {
        writer
            .write_sample(sample)
            .map_err(|e| RemovalError::EncodeFailure(format!("{}: {}", path.display(), e)))?;
    }

    writer
        .finalize()
        .map_err(|e| RemovalError::EncodeFailure(format!("{}: {}", path.display(), e)))?;

    Ok(())
}
