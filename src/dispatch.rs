//! Type-width dispatch for platform-native integer types
//!
//! Native integer types (`c_int`, `c_long`, ...) have platform-defined
//! widths, so their hashers cannot be written against a fixed bucket by
//! name. Instead, every native type resolves to a [`TypeWidthKey`] at build
//! time by querying its actual size and signedness on the target, and the
//! key selects one of the eight fixed-width buckets. Two binaries built for
//! the same target therefore compute identical digests for identical
//! in-memory bit patterns, whatever the type was called in the source.
//!
//! A name-keyed table is also exposed for harness glue that reads type
//! names out of instrumentation metadata instead of knowing them statically.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::digest::Digest;
use crate::error::{HashError, HashResult};
use crate::scalar::{
    XOR_I8, XOR_I16, XOR_I32, XOR_I64, XOR_U8, XOR_U16, XOR_U32, XOR_U64, zero_extend,
};

// =============================================================================
// Dispatch keys
// =============================================================================

/// Whether an integer bucket holds signed or unsigned values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// Two's-complement signed integers
    Signed,
    /// Unsigned integers
    Unsigned,
}

/// Bit-width of an integer bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8-bit integers
    W8,
    /// 16-bit integers
    W16,
    /// 32-bit integers
    W32,
    /// 64-bit integers
    W64,
}

impl Width {
    /// Width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Width::W8 => 8,
            Width::W16 => 16,
            Width::W32 => 32,
            Width::W64 => 64,
        }
    }

    /// Resolve a runtime-supplied bit-width to a bucket width.
    pub fn from_bits(bits: u32) -> HashResult<Self> {
        match bits {
            8 => Ok(Width::W8),
            16 => Ok(Width::W16),
            32 => Ok(Width::W32),
            64 => Ok(Width::W64),
            _ => Err(HashError::UnsupportedWidth { bits }),
        }
    }
}

/// Key selecting one of the eight fixed-width hasher buckets.
///
/// Every native integer type maps to exactly one key, determined by the
/// platform's representation of that type at build time, never at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeWidthKey {
    sign: Signedness,
    width: Width,
}

impl TypeWidthKey {
    /// All eight buckets, signed and unsigned at each width.
    pub const ALL: [TypeWidthKey; 8] = [
        TypeWidthKey::new(Signedness::Unsigned, Width::W8),
        TypeWidthKey::new(Signedness::Unsigned, Width::W16),
        TypeWidthKey::new(Signedness::Unsigned, Width::W32),
        TypeWidthKey::new(Signedness::Unsigned, Width::W64),
        TypeWidthKey::new(Signedness::Signed, Width::W8),
        TypeWidthKey::new(Signedness::Signed, Width::W16),
        TypeWidthKey::new(Signedness::Signed, Width::W32),
        TypeWidthKey::new(Signedness::Signed, Width::W64),
    ];

    /// Create a key from explicit signedness and width.
    #[inline]
    pub const fn new(sign: Signedness, width: Width) -> Self {
        Self { sign, width }
    }

    /// Create a key from signedness and a runtime-supplied bit-width.
    pub fn from_bits(sign: Signedness, bits: u32) -> HashResult<Self> {
        Ok(Self::new(sign, Width::from_bits(bits)?))
    }

    /// Create a key from a type's layout, in const context.
    ///
    /// Evaluated at build time by the native hasher generator below; a
    /// native integer wider than 64 bits fails the build here.
    pub(crate) const fn of_layout(signed: bool, bytes: usize) -> Self {
        let sign = if signed {
            Signedness::Signed
        } else {
            Signedness::Unsigned
        };
        let width = match bytes {
            1 => Width::W8,
            2 => Width::W16,
            4 => Width::W32,
            8 => Width::W64,
            _ => panic!("native integer type has no 8/16/32/64-bit hasher bucket"),
        };
        Self { sign, width }
    }

    /// The signedness half of the key.
    #[inline]
    pub const fn sign(self) -> Signedness {
        self.sign
    }

    /// The width half of the key.
    #[inline]
    pub const fn width(self) -> Width {
        self.width
    }

    /// The XOR constant distinguishing this bucket.
    #[inline]
    pub const fn xor_constant(self) -> u64 {
        match (self.sign, self.width) {
            (Signedness::Unsigned, Width::W8) => XOR_U8,
            (Signedness::Unsigned, Width::W16) => XOR_U16,
            (Signedness::Unsigned, Width::W32) => XOR_U32,
            (Signedness::Unsigned, Width::W64) => XOR_U64,
            (Signedness::Signed, Width::W8) => XOR_I8,
            (Signedness::Signed, Width::W16) => XOR_I16,
            (Signedness::Signed, Width::W32) => XOR_I32,
            (Signedness::Signed, Width::W64) => XOR_I64,
        }
    }

    /// Hash an already zero-extended bit pattern under this key.
    ///
    /// For harness glue that carries values as raw 64-bit patterns next to
    /// metadata-derived keys. The typed `hash_*` functions are preferred
    /// when the type is known statically.
    #[inline]
    #[must_use]
    pub fn hash_raw(self, pattern: u64) -> Digest {
        let masked = match self.width {
            Width::W64 => pattern,
            w => pattern & ((1u64 << w.bits()) - 1),
        };
        Digest(self.xor_constant() ^ masked)
    }
}

// =============================================================================
// Native type hashers
// =============================================================================

macro_rules! native_hashers {
    ($($name:ident : $ty:ty),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Hash a native `" $name "` value via its build-time bucket."]
                #[inline]
                #[must_use]
                pub fn [<hash_ $name>](x: $ty) -> Digest {
                    const KEY: TypeWidthKey =
                        TypeWidthKey::of_layout(<$ty>::MIN != 0, size_of::<$ty>());
                    Digest(KEY.xor_constant() ^ zero_extend(x.to_le_bytes()))
                }
            )*
        }

        /// Native type name to dispatch key, for metadata-driven callers.
        static NATIVE_TYPES: LazyLock<FxHashMap<&'static str, TypeWidthKey>> =
            LazyLock::new(|| {
                let mut map = FxHashMap::default();
                $(
                    map.insert(
                        stringify!($name),
                        TypeWidthKey::of_layout(<$ty>::MIN != 0, size_of::<$ty>()),
                    );
                )*
                map
            });
    };
}

native_hashers! {
    c_char: core::ffi::c_char,
    c_schar: core::ffi::c_schar,
    c_uchar: core::ffi::c_uchar,
    c_short: core::ffi::c_short,
    c_ushort: core::ffi::c_ushort,
    c_int: core::ffi::c_int,
    c_uint: core::ffi::c_uint,
    c_long: core::ffi::c_long,
    c_ulong: core::ffi::c_ulong,
    c_longlong: core::ffi::c_longlong,
    c_ulonglong: core::ffi::c_ulonglong,
    usize: usize,
    isize: isize,
}

/// Look up the dispatch key for a native type by name (e.g. `"c_long"`).
///
/// Returns `None` for names with no registered bucket.
#[inline]
pub fn key_for_native(name: &str) -> Option<TypeWidthKey> {
    NATIVE_TYPES.get(name).copied()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{hash_i8, hash_i32, hash_i64, hash_u8, hash_u32, hash_u64};

    #[test]
    fn test_width_from_bits() {
        assert_eq!(Width::from_bits(8).unwrap(), Width::W8);
        assert_eq!(Width::from_bits(64).unwrap(), Width::W64);
        assert_eq!(
            Width::from_bits(24),
            Err(HashError::UnsupportedWidth { bits: 24 })
        );
    }

    #[test]
    fn test_all_buckets_distinct() {
        for (i, a) in TypeWidthKey::ALL.iter().enumerate() {
            for b in &TypeWidthKey::ALL[i + 1..] {
                assert_ne!(a.xor_constant(), b.xor_constant());
            }
        }
    }

    #[test]
    fn test_native_matches_fixed_width() {
        // c_int is 32-bit signed on every supported target
        assert_eq!(hash_c_int(5), hash_i32(5));
        assert_eq!(hash_c_uchar(0xff), hash_u8(0xff));
        assert_eq!(hash_c_ulonglong(7), hash_u64(7));
    }

    #[test]
    fn test_c_longlong_uses_signed_bucket() {
        assert_eq!(hash_c_longlong(5), hash_i64(5));
        assert_ne!(hash_c_longlong(5), hash_c_ulonglong(5));
    }

    #[test]
    fn test_char_matches_platform_signedness() {
        let expected = if core::ffi::c_char::MIN == 0 {
            hash_u8(65).as_raw()
        } else {
            hash_i8(65).as_raw()
        };
        assert_eq!(hash_c_char(65).as_raw(), expected);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_pointer_width_types() {
        assert_eq!(hash_usize(5), hash_u64(5));
        assert_eq!(hash_isize(-1), hash_i64(-1));
    }

    #[test]
    fn test_key_for_native() {
        let key = key_for_native("c_uint").unwrap();
        assert_eq!(key.sign(), Signedness::Unsigned);
        assert_eq!(key.width().bits() as usize, size_of::<core::ffi::c_uint>() * 8);
        assert!(key_for_native("c_bogus").is_none());
    }

    #[test]
    fn test_hash_raw_matches_typed() {
        let key = TypeWidthKey::new(Signedness::Unsigned, Width::W32);
        assert_eq!(key.hash_raw(0xdead_beef), hash_u32(0xdead_beef));
        // High bits beyond the bucket width are masked off
        assert_eq!(key.hash_raw(0xffff_0000_dead_beef), hash_u32(0xdead_beef));
    }
}
