//! Error types for the vocal suppression pipeline

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur while processing an audio file
///
/// Every variant aborts only the file currently being processed. In batch
/// mode the orchestrator catches these per file and keeps going; in
/// single-file mode they surface to the caller.
#[derive(Debug, Clone)]
pub enum RemovalError {
    /// Input path does not exist
    InputNotFound(PathBuf),

    /// Input extension is not in the recognized audio format set
    UnsupportedFormat(String),

    /// Audio decoding failed
    DecodeFailure(String),

    /// Separation method name is not recognized
    InvalidMethod(String),

    /// Writing the output file (or creating the output directory) failed
    EncodeFailure(String),
}

impl fmt::Display for RemovalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemovalError::InputNotFound(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            RemovalError::UnsupportedFormat(msg) => write!(f, "Unsupported format: {}", msg),
            RemovalError::DecodeFailure(msg) => write!(f, "Decoding error: {}", msg),
            RemovalError::InvalidMethod(msg) => write!(f, "Invalid separation method: {}", msg),
            RemovalError::EncodeFailure(msg) => write!(f, "Encoding error: {}", msg),
        }
    }
}

impl std::error::Error for RemovalError {}
