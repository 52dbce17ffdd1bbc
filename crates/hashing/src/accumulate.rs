//! Byte-wise hash accumulators.
//!
//! Each accumulator folds one byte into a running 32-bit hash. The caller
//! owns the running value and threads it through successive calls; the
//! engine keeps no state.

/// Larson's multiplicative accumulator: `37 * hash + byte`.
///
/// Simple legacy-compatible string hashing. Start from `0`.
///
/// # Example
///
/// ```
/// use hashing::larson;
///
/// let mut hash = 0u32;
/// hash = larson(hash, b'A');
/// assert_eq!(hash, 65);
/// hash = larson(hash, b'B');
/// assert_eq!(hash, 2471);
/// ```
#[inline]
#[must_use]
pub const fn larson(hash: u32, byte: u8) -> u32 {
  hash.wrapping_mul(37).wrapping_add(byte as u32)
}

/// FNV-1a accumulator: `(hash ^ byte) * prime`.
///
/// XOR the byte in first, then multiply. Start from
/// [`FNV_OFFSET_BASIS`](crate::constants::FNV_OFFSET_BASIS) with
/// [`FNV_PRIME`](crate::constants::FNV_PRIME) for the standard parameters;
/// folding zero bytes leaves the hash equal to the basis.
#[inline]
#[must_use]
pub const fn fnv1a(hash: u32, byte: u8, prime: u32) -> u32 {
  (hash ^ byte as u32).wrapping_mul(prime)
}
