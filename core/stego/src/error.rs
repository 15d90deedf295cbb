//! Error types for the audio steganography core.

use thiserror::Error;

/// Result type alias for stego operations.
pub type StegoResult<T> = Result<T, StegoError>;

/// Errors that can occur while encoding or decoding a payload.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StegoError {
    /// The payload does not fit in the carrier under the selected algorithm.
    #[error(
        "capacity exceeded: algorithm {algorithm} can hold {capacity} bytes, payload is {requested} bytes"
    )]
    CapacityExceeded {
        /// Human-readable name of the selected algorithm.
        algorithm: &'static str,
        /// Maximum payload size in bytes the carrier supports.
        capacity: usize,
        /// Size of the payload that was requested.
        requested: usize,
    },

    /// The carrier does not have enough samples for the header, or for the
    /// header plus the body under the selected algorithm.
    #[error("audio too short: need at least {needed} samples, got {available}")]
    AudioTooShort {
        /// Minimum number of samples required.
        needed: usize,
        /// Number of samples actually available.
        available: usize,
    },

    /// The Smart Header's magic bytes or checksum did not validate.
    #[error("header invalid: magic or checksum mismatch")]
    HeaderInvalid,

    /// The header named an `algo_id` outside `1..=4`.
    #[error("unknown algorithm id {id}")]
    UnknownAlgorithm {
        /// The unrecognized algorithm id read from the header.
        id: u8,
    },
}

impl StegoError {
    /// Create a new capacity-exceeded error.
    pub fn capacity_exceeded(algorithm: &'static str, capacity: usize, requested: usize) -> Self {
        StegoError::CapacityExceeded {
            algorithm,
            capacity,
            requested,
        }
    }

    /// Create a new audio-too-short error.
    pub fn audio_too_short(needed: usize, available: usize) -> Self {
        StegoError::AudioTooShort { needed, available }
    }

    /// Create a new unknown-algorithm error.
    pub fn unknown_algorithm(id: u8) -> Self {
        StegoError::UnknownAlgorithm { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_exceeded_error() {
        let err = StegoError::capacity_exceeded("LSB", 100, 200);
        assert!(matches!(err, StegoError::CapacityExceeded { .. }));
        let msg = err.to_string();
        assert!(msg.contains("LSB"));
        assert!(msg.contains("100"));
        assert!(msg.contains("200"));
    }

    #[test]
    fn test_audio_too_short_error() {
        let err = StegoError::audio_too_short(1000, 120);
        assert!(matches!(err, StegoError::AudioTooShort { .. }));
        let msg = err.to_string();
        assert!(msg.contains("1000"));
        assert!(msg.contains("120"));
    }

    #[test]
    fn test_unknown_algorithm_error() {
        let err = StegoError::unknown_algorithm(7);
        assert!(matches!(err, StegoError::UnknownAlgorithm { id: 7 }));
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_header_invalid_display() {
        let err = StegoError::HeaderInvalid;
        assert!(err.to_string().contains("header invalid"));
    }
}
