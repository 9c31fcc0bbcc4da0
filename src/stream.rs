//! Streaming accumulators for aggregate hashing
//!
//! Aggregates (structs, arrays, argument lists) are hashed field by field:
//! the caller opens an accumulator, feeds one 64-bit word per field in
//! declaration order, and reads the final digest. The fold is deliberately
//! non-commutative so that permutations of identical field values produce
//! different digests.
//!
//! # Design Decision
//!
//! Accumulator state is an owned value type, one instance per logical
//! aggregate-hash operation. There is no type-erased buffer to mis-size or
//! alias, and sharing one accumulator across concurrent operations is a
//! compile error rather than a data race.

use crate::digest::Digest;

// =============================================================================
// StreamHasher trait
// =============================================================================

/// An init/update/finish state machine folding 64-bit words into a digest.
///
/// `finish` reads the state without resetting it; reuse for a new aggregate
/// requires a fresh value or an explicit `init`.
pub trait StreamHasher {
    /// Reset to the empty state.
    fn init(&mut self);

    /// Fold one 64-bit word into the state.
    fn update(&mut self, x: u64);

    /// Read the digest of everything folded so far.
    fn finish(&self) -> Digest;

    /// Storage footprint of the state in bytes, for callers that copy or
    /// allocate accumulator state generically.
    #[must_use]
    fn size() -> usize
    where
        Self: Sized,
    {
        size_of::<Self>()
    }
}

// =============================================================================
// Accumulator (default)
// =============================================================================

const FOLD_CONSTANT: u64 = 0x1f3d_5b79;

/// The default order-sensitive accumulator.
///
/// Each `update` applies, in this exact order: add the word; add a fixed
/// constant; rotate left 14; XOR the word; rotate left 14; XOR the
/// constant; add the word again. The sequence is non-commutative and
/// non-associative, so the digest depends on the order fields were fed in
/// and simple linear collisions are unlikely. Both program variants must
/// run the identical sequence, so the constants and rotation count are
/// fixed for good.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    state: u64,
}

impl Accumulator {
    /// Create an accumulator in the empty state.
    #[inline]
    pub const fn new() -> Self {
        Self { state: 0 }
    }
}

impl StreamHasher for Accumulator {
    #[inline]
    fn init(&mut self) {
        self.state = 0;
    }

    #[inline]
    fn update(&mut self, x: u64) {
        self.state = self.state.wrapping_add(x).wrapping_add(FOLD_CONSTANT);
        self.state = self.state.rotate_left(14);
        self.state ^= x;
        self.state = self.state.rotate_left(14);
        self.state ^= FOLD_CONSTANT;
        self.state = self.state.wrapping_add(x);
    }

    #[inline]
    fn finish(&self) -> Digest {
        Digest(self.state)
    }
}

// =============================================================================
// Alternative accumulators
// =============================================================================

/// Byte-wise djb2 fold over the little-endian bytes of each word.
///
/// Selected by harness glue that wants the classic multiplicative fold;
/// the empty digest is the djb2 seed, 5381.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Djb2Hasher {
    state: u64,
}

const DJB2_SEED: u64 = 5381;

impl Djb2Hasher {
    /// Create a djb2 accumulator in the empty state.
    #[inline]
    pub const fn new() -> Self {
        Self { state: DJB2_SEED }
    }
}

impl Default for Djb2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamHasher for Djb2Hasher {
    #[inline]
    fn init(&mut self) {
        self.state = DJB2_SEED;
    }

    fn update(&mut self, x: u64) {
        for byte in x.to_le_bytes() {
            self.state = self.state.wrapping_mul(33).wrapping_add(u64::from(byte));
        }
    }

    #[inline]
    fn finish(&self) -> Digest {
        Digest(self.state)
    }
}

/// Pass-through accumulator retaining only the last word fed.
///
/// For single-field aggregates the digest is the field's word itself,
/// which makes traces directly readable when debugging the harness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleHasher {
    state: u64,
}

impl SimpleHasher {
    /// Create a pass-through accumulator in the empty state.
    #[inline]
    pub const fn new() -> Self {
        Self { state: 0 }
    }
}

impl StreamHasher for SimpleHasher {
    #[inline]
    fn init(&mut self) {
        self.state = 0;
    }

    #[inline]
    fn update(&mut self, x: u64) {
        self.state = x;
    }

    #[inline]
    fn finish(&self) -> Digest {
        Digest(self.state)
    }
}

// =============================================================================
// Tests
// =============================================================================
