//! Audio I/O modules
//!
//! Audio decoding via Symphonia, WAV encoding via hound, and the in-memory
//! sample buffer shared by every pipeline stage.

pub mod audio_buffer;
pub mod decoder;
pub mod encoder;
