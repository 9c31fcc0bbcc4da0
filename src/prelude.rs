//! Prelude module for common imports.
//!
//! ```ignore
//! use xcheck_hash::prelude::*;
//! ```

// Digest
pub use crate::digest::Digest;

// Fixed-width hashers
pub use crate::scalar::{
    hash_i8, hash_i16, hash_i32, hash_i64, hash_u8, hash_u16, hash_u32, hash_u64,
};

// Native-type dispatch
pub use crate::dispatch::{
    Signedness, TypeWidthKey, Width, hash_c_char, hash_c_int, hash_c_long, hash_c_longlong,
    hash_c_schar, hash_c_short, hash_c_uchar, hash_c_uint, hash_c_ulong, hash_c_ulonglong,
    hash_c_ushort, hash_isize, hash_usize, key_for_native,
};

// Floating point
pub use crate::float::{hash_f32, hash_f64};

// Pointers
pub use crate::pointer::{
    PointerKind, hash_absent, hash_function_pointer, hash_opaque, pointer_is_valid,
};

// Streaming accumulators
pub use crate::stream::{Accumulator, Djb2Hasher, SimpleHasher, StreamHasher};

// Per-type seam
pub use crate::value::{Digestible, hash_aggregate};

// Error
pub use crate::error::{HashError, HashResult};
