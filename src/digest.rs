//! Opaque 64-bit digest type
//!
//! A [`Digest`] is the canonical output of every hashing primitive in this
//! crate. Two independently compiled program variants emit digests at
//! corresponding trace points; the harness compares them for equality and
//! nothing else.
//!
//! # Design Decision
//!
//! Digests are equality-comparable only. There is deliberately no `Ord`
//! implementation and no arithmetic: a digest is not a number, it is a
//! fingerprint of a runtime value. Exposing ordering would invite consumers
//! to build sorted structures whose layout depends on hash internals.

use std::fmt;

/// Canonical 64-bit digest of a runtime value.
///
/// # Memory Layout
///
/// - 8 bytes (u64)
/// - Copy, no heap allocation
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct Digest(pub(crate) u64);

impl Digest {
    /// Create a digest from a raw u64 value.
    ///
    /// Primarily intended for deserializing digests out of a recorded trace.
    /// Prefer the `hash_*` functions for producing new digests.
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 representation, e.g. for writing into a trace record.
    #[inline]
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:016x})", self.0)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let d = Digest::from_raw(0x123456789abcdef0);
        assert_eq!(d.as_raw(), 0x123456789abcdef0);
    }

    #[test]
    fn test_debug_format() {
        let d = Digest::from_raw(0xdeadbeef);
        assert_eq!(format!("{:?}", d), "Digest(00000000deadbeef)");
        assert_eq!(format!("{}", d), "00000000deadbeef");
    }

    #[test]
    fn test_is_copy_eq() {
        let a = Digest::from_raw(7);
        let b = a;
        assert_eq!(a, b);
    }
}
