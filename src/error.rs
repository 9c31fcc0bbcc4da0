//! Error types for xcheck-hash.
//!
//! Every hashing primitive is total: it cannot fail at runtime. The only
//! fallible boundary is building dispatch keys from arbitrary bit-widths,
//! which consumers hit when they resolve type descriptions read from
//! external metadata rather than from compile-time types.

use thiserror::Error;

/// Errors that can occur while resolving hash dispatch keys.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashError {
    /// The requested bit-width has no fixed-width hasher bucket.
    #[error("no hasher bucket for {bits}-bit integers (supported: 8, 16, 32, 64)")]
    UnsupportedWidth {
        /// Requested width in bits
        bits: u32,
    },
}

/// Result type alias for xcheck-hash operations.
pub type HashResult<T> = Result<T, HashError>;
