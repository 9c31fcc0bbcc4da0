//! Fixed-width integer hashers
//!
//! One hasher per (signedness, width) bucket. Each one XORs a
//! bucket-distinguishing constant into the zero-extended bit pattern of the
//! input, so the same bit pattern stored at a different width or signedness
//! always produces a different digest: `5u8` and `5u64` are distinct static
//! types in the traced program and must stay distinguishable in the trace.
//!
//! # Design Decision
//!
//! Signed inputs are *zero*-extended, not sign-extended: the digest covers
//! the value's in-memory bit pattern at its declared width, padded with
//! zeros. `-1i8` hashes as the 8-bit pattern `0xff`, not as
//! `0xffff_ffff_ffff_ffff`. The XOR constant, not the extension rule,
//! carries the signedness distinction.

use crate::digest::Digest;

// =============================================================================
// Bucket constants
// =============================================================================

pub(crate) const XOR_U8: u64 = 0x0000_0000_0000_0000;
pub(crate) const XOR_U16: u64 = 0x5a5a_5a5a_5a5a_5a5a;
pub(crate) const XOR_U32: u64 = 0xb4b4_b4b4_b4b4_b4b4;
pub(crate) const XOR_U64: u64 = 0x0f0f_0f0f_0f0f_0f0e;
pub(crate) const XOR_I8: u64 = 0xc3c3_c3c3_c3c3_c3c2;
pub(crate) const XOR_I16: u64 = 0x1e1e_1e1e_1e1e_1e1c;
pub(crate) const XOR_I32: u64 = 0x7878_7878_7878_7876;
pub(crate) const XOR_I64: u64 = 0xd2d2_d2d2_d2d2_d2d0;

/// Zero-extend a little-endian byte pattern to 64 bits.
#[inline]
pub(crate) fn zero_extend<const N: usize>(bytes: [u8; N]) -> u64 {
    let mut wide = [0u8; 8];
    wide[..N].copy_from_slice(&bytes);
    u64::from_le_bytes(wide)
}

// =============================================================================
// Fixed-width hasher generation
// =============================================================================

macro_rules! fixed_hashers {
    ($($ty:ident => $xor:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Hash a `" $ty "` value into its fixed-width bucket."]
                #[inline]
                #[must_use]
                pub fn [<hash_ $ty>](x: $ty) -> Digest {
                    Digest($xor ^ zero_extend(x.to_le_bytes()))
                }
            )*
        }
    };
}

fixed_hashers! {
    u8 => XOR_U8,
    u16 => XOR_U16,
    u32 => XOR_U32,
    u64 => XOR_U64,
    i8 => XOR_I8,
    i16 => XOR_I16,
    i32 => XOR_I32,
    i64 => XOR_I64,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_constant_is_zero() {
        assert_eq!(hash_u8(0).as_raw(), 0);
        assert_eq!(hash_u8(255).as_raw(), 255);
    }

    #[test]
    fn test_xor_identity_per_bucket() {
        assert_eq!(hash_u16(0x1234).as_raw(), XOR_U16 ^ 0x1234);
        assert_eq!(hash_u32(0xdead_beef).as_raw(), XOR_U32 ^ 0xdead_beef);
        assert_eq!(hash_u64(u64::MAX).as_raw(), XOR_U64 ^ u64::MAX);
        assert_eq!(hash_i32(5).as_raw(), XOR_I32 ^ 5);
    }

    #[test]
    fn test_same_value_different_width_differs() {
        // 5 stored as u8, u16, u32, u64 are distinct static types
        let digests = [
            hash_u8(5),
            hash_u16(5),
            hash_u32(5),
            hash_u64(5),
        ];
        for (i, a) in digests.iter().enumerate() {
            for b in &digests[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_same_bits_different_sign_differs() {
        assert_ne!(hash_u8(5), hash_i8(5));
        assert_ne!(hash_u16(5), hash_i16(5));
        assert_ne!(hash_u32(5), hash_i32(5));
        assert_ne!(hash_u64(5), hash_i64(5));
    }

    #[test]
    fn test_signed_inputs_zero_extend() {
        // -1i8 is the 8-bit pattern 0xff, padded with zeros
        assert_eq!(hash_i8(-1).as_raw(), XOR_I8 ^ 0xff);
        assert_eq!(hash_i16(-1).as_raw(), XOR_I16 ^ 0xffff);
        assert_eq!(hash_i64(-1).as_raw(), XOR_I64 ^ u64::MAX);
    }

    #[test]
    fn test_zero_extend_pads_high_bytes() {
        assert_eq!(zero_extend([0xff]), 0xff);
        assert_eq!(zero_extend([0x34, 0x12]), 0x1234);
        assert_eq!(zero_extend(u64::MAX.to_le_bytes()), u64::MAX);
    }
}
