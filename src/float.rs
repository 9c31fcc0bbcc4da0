//! Floating-point bit-pattern hashers
//!
//! Floats are hashed by their exact IEEE-754 bit pattern, not their numeric
//! value: two NaNs with different payload bits, or `+0.0` versus `-0.0`,
//! produce different digests. The cross-checker exists to catch bit-level
//! divergence between the two program variants, so collapsing numerically
//! equal encodings would hide exactly the class of bug it hunts.
//!
//! The reinterpretation is a safe bit-cast (`to_bits`), never pointer
//! punning, and the layout preconditions are checked at build time below.

use static_assertions::const_assert_eq;

use crate::digest::Digest;

// A target without IEEE-754 binary32/binary64 must fail to build rather
// than emit digests the other variant cannot reproduce.
const_assert_eq!(size_of::<f32>(), 4);
const_assert_eq!(size_of::<f64>(), 8);

pub(crate) const XOR_F32: u64 = 0x3c3c_3c3c_3c3c_3c38;
pub(crate) const XOR_F64: u64 = 0x9696_9696_9696_9692;

/// Hash an `f32` by its IEEE-754 binary32 bit pattern.
#[inline]
#[must_use]
pub fn hash_f32(x: f32) -> Digest {
    Digest(XOR_F32 ^ u64::from(x.to_bits()))
}

/// Hash an `f64` by its IEEE-754 binary64 bit pattern.
#[inline]
#[must_use]
pub fn hash_f64(x: f64) -> Digest {
    Digest(XOR_F64 ^ x.to_bits())
}

// =============================================================================
// Tests
// =============================================================================
