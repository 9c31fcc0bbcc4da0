//! xcheck-hash - Canonical runtime value digests for cross-check tracing
//!
//! ## Core Concepts
//!
//! A cross-checking harness runs two independently compiled variants of the
//! same program and compares their behavior point by point. Instead of
//! shipping full runtime values into the trace, each variant digests its
//! values into opaque 64-bit [`Digest`]s with the primitives in this crate;
//! the digests are equal exactly when the underlying bit patterns were.
//!
//! Every primitive is pure, constant-time, and free of shared state.
//! Digests carry no cryptographic guarantees: they distinguish diverging
//! runtime states with high practical probability, nothing more.
//!
//! ## Modules
//! - `digest`: the opaque [`Digest`] type
//! - `scalar`: fixed-width hashers, one per (signedness, width) bucket
//! - `dispatch`: build-time mapping from native types to buckets
//! - `float`: IEEE-754 bit-pattern hashers
//! - `pointer`: pointer classification and hashing
//! - `stream`: streaming accumulators for aggregates
//! - `value`: the [`Digestible`] per-type seam
//!
//! ## Usage
//!
//! ```
//! use xcheck_hash::{Accumulator, StreamHasher, hash_u32, hash_opaque};
//!
//! // Scalars digest directly
//! let d = hash_u32(42);
//!
//! // Aggregates digest field by field, in declaration order
//! let mut acc = Accumulator::new();
//! acc.update(hash_u32(3).as_raw());
//! acc.update(hash_u32(4).as_raw());
//! let aggregate = acc.finish();
//! # let _ = (d, aggregate);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Opaque digest type
pub mod digest;

/// Fixed-width integer hashers
pub mod scalar;

/// Native type width/signedness dispatch
pub mod dispatch;

/// Floating-point bit-pattern hashers
pub mod float;

/// Pointer classification and hashing
pub mod pointer;

/// Streaming accumulators
pub mod stream;

/// Per-type hashing seam
pub mod value;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Digest
pub use digest::Digest;

// Fixed-width hashers
pub use scalar::{hash_i8, hash_i16, hash_i32, hash_i64, hash_u8, hash_u16, hash_u32, hash_u64};

// Native-type dispatch
pub use dispatch::{
    Signedness, TypeWidthKey, Width, hash_c_char, hash_c_int, hash_c_long, hash_c_longlong,
    hash_c_schar, hash_c_short, hash_c_uchar, hash_c_uint, hash_c_ulong, hash_c_ulonglong,
    hash_c_ushort, hash_isize, hash_usize, key_for_native,
};

// Floating point
pub use float::{hash_f32, hash_f64};

// Pointers
pub use pointer::{PointerKind, hash_absent, hash_function_pointer, hash_opaque, pointer_is_valid};

// Streaming accumulators
pub use stream::{Accumulator, Djb2Hasher, SimpleHasher, StreamHasher};

// Per-type seam
pub use value::{Digestible, hash_aggregate};

// Error types
pub use error::{HashError, HashResult};

// =============================================================================
// Tests
// =============================================================================
