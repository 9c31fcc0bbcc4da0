//! Pointer classification and hashing
//!
//! Raw addresses are never hashed: the two program variants being compared
//! run as independent processes with independent allocators, so addresses
//! are meaningless cross-run. Only a pointer's *kind* is digested — absent
//! (null or deliberately invalid), present-and-opaque, or function.

use crate::digest::Digest;

pub(crate) const NULL_POINTER_HASH: u64 = 0;
// "VoidStar" in ASCII
pub(crate) const OPAQUE_POINTER_HASH: u64 = 0x7261_7453_6469_6f56;
// "FuncStar" in ASCII
pub(crate) const FUNCTION_POINTER_HASH: u64 = 0x7261_7453_636e_7546;

// =============================================================================
// Classification
// =============================================================================

/// The cross-run-stable classification of a pointer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// Null, or known by the caller to be deliberately invalid
    Absent,
    /// Non-null data pointer; the pointee is not inspected
    Opaque,
    /// Function pointer
    Function,
}

impl PointerKind {
    /// Classify a data pointer by nullness.
    #[inline]
    pub fn of_data<T>(p: *const T) -> Self {
        if p.is_null() {
            PointerKind::Absent
        } else {
            PointerKind::Opaque
        }
    }

    /// The fixed digest emitted for this kind.
    #[inline]
    pub const fn sentinel(self) -> Digest {
        match self {
            PointerKind::Absent => Digest(NULL_POINTER_HASH),
            PointerKind::Opaque => Digest(OPAQUE_POINTER_HASH),
            PointerKind::Function => Digest(FUNCTION_POINTER_HASH),
        }
    }
}

// =============================================================================
// Hashers
// =============================================================================

/// Whether `p` passes the validity test.
///
/// Only nullness is actually tested; no deeper validity check is performed
/// despite the name, which follows the harness's vocabulary.
#[inline]
#[must_use]
pub fn pointer_is_valid<T>(p: *const T) -> bool {
    !p.is_null()
}

/// Hash a pointer the caller already knows must not be distinguished,
/// e.g. one that is intentionally uninitialized.
///
/// Always returns the null digest, whatever `p` holds.
#[inline]
#[must_use]
pub fn hash_absent<T>(_p: *const T) -> Digest {
    PointerKind::Absent.sentinel()
}

/// Hash a data pointer by presence only.
///
/// Non-null pointers all produce the same opaque-pointer digest; null
/// produces the null digest. The address itself is never folded in.
#[inline]
#[must_use]
pub fn hash_opaque<T>(p: *const T) -> Digest {
    PointerKind::of_data(p).sentinel()
}

/// Hash a function pointer.
///
/// Every function pointer, null or not, currently produces the same
/// sentinel digest: there is no identity for a function that is stable
/// across two independently compiled binaries, so none is discriminated.
// TODO: discriminate distinct functions once the harness assigns them
// stable cross-binary identifiers.
#[inline]
#[must_use]
pub fn hash_function_pointer(_f: *const ()) -> Digest {
    PointerKind::Function.sentinel()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_is_nullness() {
        let x = 42u32;
        assert!(pointer_is_valid(&raw const x));
        assert!(!pointer_is_valid(core::ptr::null::<u32>()));
    }

    #[test]
    fn test_absent_ignores_value() {
        let x = 42u32;
        assert_eq!(hash_absent(&raw const x).as_raw(), 0);
        assert_eq!(hash_absent(core::ptr::null::<u32>()).as_raw(), 0);
    }

    #[test]
    fn test_opaque_distinguishes_presence_only() {
        let a = 1u32;
        let b = 2u64;
        assert_eq!(hash_opaque(core::ptr::null::<u32>()).as_raw(), 0);
        assert_eq!(hash_opaque(&raw const a).as_raw(), OPAQUE_POINTER_HASH);
        // Two distinct non-null addresses hash identically
        assert_eq!(
            hash_opaque(&raw const a),
            hash_opaque((&raw const b).cast::<u32>())
        );
    }

    #[test]
    fn test_function_pointers_share_sentinel() {
        fn f() {}
        fn g(_x: u32) {}
        let pf = (f as fn()) as *const ();
        let pg = (g as fn(u32)) as *const ();
        assert_eq!(hash_function_pointer(pf).as_raw(), FUNCTION_POINTER_HASH);
        assert_eq!(hash_function_pointer(pf), hash_function_pointer(pg));
    }

    #[test]
    fn test_kind_sentinels_distinct() {
        assert_ne!(
            PointerKind::Opaque.sentinel(),
            PointerKind::Function.sentinel()
        );
        assert_ne!(
            PointerKind::Absent.sentinel(),
            PointerKind::Opaque.sentinel()
        );
    }
}
