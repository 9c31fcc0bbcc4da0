//! Per-type hashing seam for instrumentation glue
//!
//! [`Digestible`] maps each hashable Rust type to the hasher matching its
//! width and signedness, so aggregate-walking glue can digest fields
//! generically instead of naming a `hash_*` function per field type.

use crate::digest::Digest;
use crate::pointer::hash_opaque;
use crate::stream::{Accumulator, StreamHasher};

/// A value with a canonical digest.
pub trait Digestible {
    /// Digest this value with the hasher matching its type.
    fn digest(&self) -> Digest;
}

macro_rules! digestible_scalars {
    ($($ty:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                impl Digestible for $ty {
                    #[inline]
                    fn digest(&self) -> Digest {
                        crate::[<hash_ $ty>](*self)
                    }
                }
            )*
        }
    };
}

digestible_scalars!(u8, u16, u32, u64, i8, i16, i32, i64, usize, isize, f32, f64);

impl<T> Digestible for *const T {
    #[inline]
    fn digest(&self) -> Digest {
        hash_opaque(*self)
    }
}

impl<T> Digestible for *mut T {
    #[inline]
    fn digest(&self) -> Digest {
        hash_opaque(self.cast_const())
    }
}

/// References digest as *pointers*, not as their pointee.
///
/// A reference is a data pointer that is present by construction, so it
/// always yields the opaque-pointer sentinel. Beware in generic glue: a
/// type parameter bound to `&u32` digests as a pointer, while `u32`
/// digests as `hash_u32(x)` — and nothing at the call site shows which
/// one was picked. Method-call syntax on a reference (`r.digest()`)
/// auto-resolves to the pointee's impl; generic code must dereference
/// explicitly to digest the value rather than its address.
impl<T: ?Sized> Digestible for &T {
    #[inline]
    fn digest(&self) -> Digest {
        crate::pointer::PointerKind::Opaque.sentinel()
    }
}

/// Fold the digests of an aggregate's fields, in order, with the default
/// [`Accumulator`].
///
/// ```
/// use xcheck_hash::{hash_aggregate, Digestible};
///
/// let point = (3u32, 4u32);
/// let digest = hash_aggregate([point.0.digest(), point.1.digest()]);
/// assert_ne!(digest, hash_aggregate([point.1.digest(), point.0.digest()]));
/// ```
#[must_use]
pub fn hash_aggregate<I>(fields: I) -> Digest
where
    I: IntoIterator<Item = Digest>,
{
    let mut acc = Accumulator::new();
    for field in fields {
        acc.update(field.as_raw());
    }
    acc.finish()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{hash_i16, hash_u32};
    use crate::float::hash_f64;

    #[test]
    fn test_scalar_dispatch_matches_named_hashers() {
        assert_eq!(5u32.digest(), hash_u32(5));
        assert_eq!((-3i16).digest(), hash_i16(-3));
        assert_eq!(1.0f64.digest(), hash_f64(1.0));
    }

    #[test]
    fn test_pointer_dispatch() {
        let x = 9u8;
        let p: *const u8 = &raw const x;
        assert_eq!(p.digest(), hash_opaque(p));
        assert_eq!(core::ptr::null::<u8>().digest().as_raw(), 0);
    }

    #[test]
    fn test_reference_digests_as_pointer_not_pointee() {
        fn digest_of<T: Digestible>(v: T) -> Digest {
            v.digest()
        }

        let x = 5u32;
        // Generic code handed a reference digests the pointer, not the value
        assert_eq!(
            digest_of(&x),
            crate::pointer::PointerKind::Opaque.sentinel()
        );
        assert_ne!(digest_of(&x), digest_of(x));
        // Method-call syntax auto-resolves through the reference
        assert_eq!((&x).digest(), hash_u32(5));
    }

    #[test]
    fn test_empty_aggregate_is_zero() {
        assert_eq!(hash_aggregate([]).as_raw(), 0);
    }

    #[test]
    fn test_aggregate_field_order_matters() {
        let a = hash_aggregate([1u64.digest(), 2u64.digest()]);
        let b = hash_aggregate([2u64.digest(), 1u64.digest()]);
        assert_ne!(a, b);
    }
}
