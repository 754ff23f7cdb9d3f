//! Error types for the audio pipeline.

use thiserror::Error;

/// Errors surfaced by audio analysis operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AudioError {
    /// The audio segment is shorter than one analysis window. Fatal for
    /// feature extraction; swallowed per frame by the spectrogram, which
    /// zero-fills the affected row instead.
    #[error("audio segment of {actual} samples is shorter than the {required}-sample window")]
    SegmentTooShort { actual: usize, required: usize },
}
