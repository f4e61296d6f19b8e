//! Audio decoding using Symphonia
//!
//! Decodes any of the supported container formats to planar f32 samples,
//! preserving the original channel count and sample rate.

use std::fs::File;
use std::path::Path;

use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{DecoderOptions, CODEC_TYPE_NULL};
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::sample::i24;
use symphonia::default::{get_codecs, get_probe};

use crate::error::RemovalError;
use crate::io::audio_buffer::AudioBuffer;

/// Convert i24 to f32 in [-1.0, 1.0].
fn i24_to_f32(sample: i24) -> f32 {
    sample.inner() as f32 / 8_388_608.0
}

/// Append one decoded packet's samples to the per-channel planes.
macro_rules! extend_planes {
    ($buf:expr, $planes:expr, $channels:expr, $conv:expr) => {{
        let frames = $buf.frames();
        for (ch, plane) in $planes.iter_mut().enumerate().take($channels) {
            plane.extend($buf.chan(ch).iter().take(frames).map($conv));
        }
    }};
}

/// Decode an audio file to planar f32 samples
///
/// # Arguments
///
/// * `path` - Path to the audio file
///
/// # Returns
///
/// `AudioBuffer` with one plane per channel and the stream's sample rate
///
/// # Errors
///
/// Returns `RemovalError::DecodeFailure` if the file cannot be probed,
/// contains no audio track, or yields no samples.
pub fn decode_audio(path: &Path) -> Result<AudioBuffer, RemovalError> {
    log::debug!("Decoding audio file: {}", path.display());

    let src = File::open(path)
        .map_err(|e| RemovalError::DecodeFailure(format!("cannot open file: {}", e)))?;
    let mss = MediaSourceStream::new(Box::new(src), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let meta_opts: MetadataOptions = Default::default();
    let fmt_opts: FormatOptions = Default::default();

    let probed = get_probe()
        .format(&hint, mss, &fmt_opts, &meta_opts)
        .map_err(|e| RemovalError::DecodeFailure(format!("unrecognized stream: {}", e)))?;
    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
        .ok_or_else(|| {
            RemovalError::DecodeFailure("no supported audio track found".to_string())
        })?;

    let track_id = track.id;
    let sample_rate = track.codec_params.sample_rate.unwrap_or(44100);

    let mut decoder = get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| RemovalError::DecodeFailure(format!("cannot create decoder: {}", e)))?;

    // Channel count is taken from the first decoded packet; the track
    // parameters may not declare it for every codec.
    let mut planes: Vec<Vec<f32>> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(packet) => packet,
            Err(_) => break,
        };

        if packet.track_id() != track_id {
            continue;
        }

        match decoder.decode(&packet) {
            Ok(decoded) => {
                let channels = decoded.spec().channels.count();
                if planes.is_empty() {
                    planes = vec![Vec::new(); channels];
                }

                match decoded {
                    AudioBufferRef::F32(buf) => extend_planes!(buf, planes, channels, |&s| s),
                    AudioBufferRef::F64(buf) => {
                        extend_planes!(buf, planes, channels, |&s| s as f32)
                    }
                    AudioBufferRef::S16(buf) => {
                        extend_planes!(buf, planes, channels, |&s| s as f32 / 32_768.0)
                    }
                    AudioBufferRef::S24(buf) => {
                        extend_planes!(buf, planes, channels, |&s| i24_to_f32(s))
                    }
                    AudioBufferRef::S32(buf) => {
                        extend_planes!(buf, planes, channels, |&s| s as f32 / 2_147_483_648.0)
                    }
                    AudioBufferRef::U8(buf) => {
                        extend_planes!(buf, planes, channels, |&s| (s as f32 - 128.0) / 128.0)
                    }
                    _ => {
                        return Err(RemovalError::DecodeFailure(
                            "unsupported sample format".to_string(),
                        ));
                    }
                }
            }
            Err(symphonia::core::errors::Error::DecodeError(_)) => {
                // Corrupted packets are skipped; the rest of the stream may
                // still decode.
                continue;
            }
            Err(e) => return Err(RemovalError::DecodeFailure(e.to_string())),
        }
    }

    if planes.is_empty() || planes.iter().all(|p| p.is_empty()) {
        return Err(RemovalError::DecodeFailure(
            "no audio samples decoded".to_string(),
        ));
    }

    let buffer = AudioBuffer::new(planes, sample_rate);
    log::debug!(
        "Decoded {} channels, {} samples at {} Hz ({:.2}s)",
        buffer.channel_count(),
        buffer.len(),
        buffer.sample_rate,
        buffer.duration_seconds()
    );

    Ok(buffer)
}
