//! Byte-sequence hashing.
//!
//! Folds a byte accumulator over an input sequence in order, starting from
//! a caller-supplied basis. The default configuration folds the FNV-1a
//! accumulator from its offset basis; callers that want the
//! hardware-accelerated accumulator use [`crate::crc32c::compute`] with
//! the same fold-from-basis semantics.

use crate::{
  accumulate::fnv1a,
  constants::{FNV_OFFSET_BASIS, FNV_PRIME},
};

/// Hash a byte sequence with the FNV-1a accumulator from the standard
/// offset basis.
///
/// Empty input returns
/// [`FNV_OFFSET_BASIS`](crate::constants::FNV_OFFSET_BASIS) unchanged.
/// Two calls over byte-identical content return identical hashes, however
/// that content is referenced.
///
/// # Example
///
/// ```
/// use hashing::{constants::FNV_OFFSET_BASIS, hash_bytes};
///
/// assert_eq!(hash_bytes(b""), FNV_OFFSET_BASIS);
/// assert_eq!(hash_bytes(b"test"), hash_bytes(b"test"));
/// assert_ne!(hash_bytes(b"test"), hash_bytes(b"Test"));
/// ```
#[inline]
#[must_use]
pub fn hash_bytes(data: &[u8]) -> u32 {
  hash_bytes_with_basis(FNV_OFFSET_BASIS, data)
}

/// Hash a byte sequence with the FNV-1a accumulator from a caller-chosen
/// initial basis.
///
/// Empty input returns `basis` unchanged; this is the defined behavior of
/// the fold, not an edge case.
#[inline]
#[must_use]
pub fn hash_bytes_with_basis(basis: u32, data: &[u8]) -> u32 {
  let mut hash = basis;
  for &byte in data {
    hash = fnv1a(hash, byte, FNV_PRIME);
  }
  hash
}

/// Hash a string slice.
///
/// Identical to [`hash_bytes`] over the string's UTF-8 bytes.
#[inline]
#[must_use]
pub fn hash_str(s: &str) -> u32 {
  hash_bytes(s.as_bytes())
}
