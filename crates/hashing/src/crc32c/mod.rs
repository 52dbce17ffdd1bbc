//! CRC32-C (Castagnoli) byte accumulator with hardware/software dispatch.
//!
//! CRC32-C uses polynomial 0x1EDC6F41, the polynomial the x86 SSE4.2
//! `crc32` instruction family implements. Here it serves as a fast
//! byte-mixing accumulator, not as an error-detecting checksum: values use
//! raw-register semantics with no implicit initial value or final XOR, so
//! the caller owns the accumulator and typically starts it at `0` or at a
//! sequence-hashing basis.
//!
//! # Dispatch
//!
//! | Tier | Condition | Path |
//! |------|-----------|------|
//! | 1 | `target_feature = "sse4.2"` at compile time | hardware, no runtime check |
//! | 2 | capability probe reports hardware CRC | hardware, probed once |
//! | 3 | otherwise | bit-serial software |
//!
//! The hardware and software paths are bit-identical for every input;
//! callers can switch between them transparently without changing output.
//!
//! # Usage
//!
//! ```
//! use hashing::crc32c;
//!
//! let mut hash = 0u32;
//! hash = crc32c::step(hash, b'A');
//! hash = crc32c::step(hash, b'B');
//!
//! // Equivalent slice fold:
//! assert_eq!(crc32c::compute(0, b"AB"), hash);
//! ```

pub mod bitwise;

#[cfg(target_arch = "x86_64")]
pub(crate) mod x86_64;

/// Fold one byte into a CRC32-C accumulator.
///
/// Selects the hardware `crc32b` instruction when available and the
/// bit-serial software path otherwise; results are identical either way.
#[inline]
#[must_use]
pub fn step(crc: u32, byte: u8) -> u32 {
  // Tier 1: compile-time target feature.
  #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
  {
    x86_64::step_sse42_enabled(crc, byte)
  }

  // Tier 2: runtime probe, detected once and cached by `platform`.
  #[cfg(all(target_arch = "x86_64", not(target_feature = "sse4.2")))]
  {
    if platform::has_hardware_crc() {
      return x86_64::step_sse42_runtime(crc, byte);
    }
    bitwise::step(crc, byte)
  }

  // Tier 3: software on every other architecture.
  #[cfg(not(target_arch = "x86_64"))]
  {
    bitwise::step(crc, byte)
  }
}

/// Fold a byte slice into a CRC32-C accumulator.
///
/// Semantics are identical to calling [`step`] on each byte in order; the
/// hardware path consumes 8-byte chunks per instruction instead.
#[inline]
#[must_use]
pub fn compute(crc: u32, data: &[u8]) -> u32 {
  // Tier 1: compile-time target feature.
  #[cfg(all(target_arch = "x86_64", target_feature = "sse4.2"))]
  {
    x86_64::compute_sse42_enabled(crc, data)
  }

  // Tier 2: runtime probe, detected once and cached by `platform`.
  #[cfg(all(target_arch = "x86_64", not(target_feature = "sse4.2")))]
  {
    if platform::has_hardware_crc() {
      return x86_64::compute_sse42_runtime(crc, data);
    }
    bitwise::compute(crc, data)
  }

  // Tier 3: software on every other architecture.
  #[cfg(not(target_arch = "x86_64"))]
  {
    bitwise::compute(crc, data)
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::*;

  #[test]
  fn test_dispatch_matches_bitwise() {
    let lengths = [0usize, 1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 63, 64, 255, 256];
    let inits = [0u32, 0xFFFF_FFFF, 0x0123_4567];

    for &len in &lengths {
      let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(i as u8 >> 3)).collect();
      for &init in &inits {
        assert_eq!(
          compute(init, &data),
          bitwise::compute(init, &data),
          "dispatch mismatch at len={len} init={init:#010x}"
        );
      }
    }
  }

  #[test]
  fn test_step_matches_compute() {
    for byte in 0..=255u8 {
      assert_eq!(step(0, byte), compute(0, &[byte]));
      assert_eq!(step(0xFFFF_FFFF, byte), compute(0xFFFF_FFFF, &[byte]));
    }
  }

  #[test]
  fn test_check_value_via_dispatch() {
    assert_eq!(compute(0xFFFF_FFFF, b"123456789") ^ 0xFFFF_FFFF, 0xE306_9283);
  }

  #[test]
  fn test_empty_is_identity() {
    for &init in &[0u32, 1, 0xFFFF_FFFF, 0xDEAD_BEEF] {
      assert_eq!(compute(init, b""), init);
    }
  }

  #[test]
  fn test_incremental_matches_oneshot() {
    let data = b"the quick brown fox jumps over the lazy dog";
    let oneshot = compute(0, data);

    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      assert_eq!(compute(compute(0, a), b), oneshot, "mismatch at split {split}");
    }
  }
}
