//! Errors for BLS12-381 key derivation.

use thiserror::Error;

use crate::derive::MIN_SEED_LEN;

/// Error type for key derivation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// The derivation path string was empty.
    #[error("path must not be empty")]
    EmptyPath,

    /// The seed does not carry enough entropy to derive a master key.
    #[error("seed is too short: expected at least {min} bytes, got {len}", min = MIN_SEED_LEN)]
    SeedTooShort {
        /// Length of the rejected seed in bytes.
        len: usize,
    },

    /// A path segment between two separators (or after a trailing one) was empty.
    #[error("path segment {index} is empty")]
    EmptyPathSegment {
        /// Position of the empty segment.
        index: usize,
    },

    /// The master marker `m` appeared somewhere other than the first segment.
    #[error("unexpected master node in segment {index}")]
    UnexpectedMasterMarker {
        /// Position of the misplaced marker.
        index: usize,
    },

    /// The first segment of the path was not the master marker `m`.
    #[error("missing master node at segment 0, found {segment:?}")]
    MissingMasterMarker {
        /// The segment found in place of the marker.
        segment: String,
    },

    /// A child segment is not a decimal integer in `[0, 2^32)`.
    #[error("invalid child node at segment {index}, value {segment:?}")]
    InvalidChildIndex {
        /// Position of the offending segment.
        index: usize,
        /// The literal segment.
        segment: String,
    },

    /// HKDF-Expand could not produce the requested output length.
    #[error("key derivation failed: HKDF-Expand cannot produce {len} bytes")]
    DerivationFailure {
        /// Number of output bytes requested from HKDF-Expand.
        len: usize,
    },
}
