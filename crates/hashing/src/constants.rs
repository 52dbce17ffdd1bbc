//! Named mixing constants.
//!
//! Every multiplicative or offset constant the engine uses lives here, so
//! callers that parameterize an accumulator or combiner reference the same
//! values the defaults are built from.

/// FNV-1a offset basis: the initial hash value before any byte is folded in.
///
/// Hashing an empty sequence returns this value unchanged.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a prime multiplier.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// CRC32-C (Castagnoli) polynomial in reflected (bit-reversed) form.
///
/// The normal form is 0x1EDC6F41; the reflected form drives LSB-first
/// processing and matches the x86 `crc32` instruction family.
pub const CRC32C_POLYNOMIAL: u32 = 0x82F6_3B78;

/// Odd multiplier for the 32-bit integer avalanche mixer.
pub const INTEGER_MIX_32: u32 = 0x045D_9F3B;

/// First odd multiplier for the 64-bit integer avalanche mixer.
pub const INTEGER_MIX_64_C1: u64 = 0xBF58_476D_1CE4_E5B9;

/// Second odd multiplier for the 64-bit integer avalanche mixer.
pub const INTEGER_MIX_64_C2: u64 = 0x94D0_49BB_1331_11EB;

/// 64-bit golden ratio offset used by the word-sized combiner.
pub const GOLDEN_RATIO_64: u64 = 0x9E37_79B9_7F4A_7C15;

/// First finalizer multiplier of the word-sized combiner.
pub const COMBINE_MIX_64_C1: u64 = 0xFF51_AFD7_ED55_8CCD;

/// Second finalizer multiplier of the word-sized combiner.
pub const COMBINE_MIX_64_C2: u64 = 0xC4CE_B9FE_1A85_EC53;

/// Odd multiplier applied by [`seed_mix`](crate::seed_mix) before the
/// power-of-two mask reduction.
pub const SEED_MIX_64: u64 = 0x2545_F491_4F6C_DD1D;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_multipliers_are_odd() {
    // Odd multipliers are invertible mod 2^n; an even one would shed
    // low-order entropy on every round.
    assert_eq!(FNV_PRIME & 1, 1);
    assert_eq!(INTEGER_MIX_32 & 1, 1);
    assert_eq!(INTEGER_MIX_64_C1 & 1, 1);
    assert_eq!(INTEGER_MIX_64_C2 & 1, 1);
    assert_eq!(COMBINE_MIX_64_C1 & 1, 1);
    assert_eq!(COMBINE_MIX_64_C2 & 1, 1);
    assert_eq!(SEED_MIX_64 & 1, 1);
  }
}
