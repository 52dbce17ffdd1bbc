//! x86_64-accelerated CRC32-C (Castagnoli).
//!
//! Uses the SSE4.2 `crc32` instruction family.
//!
//! Safety:
//! - This file is allowed to use `unsafe` for ISA-specific intrinsics.
//! - All unsafe is contained within this module.

#![allow(unsafe_code)]

use core::arch::x86_64::{_mm_crc32_u16, _mm_crc32_u32, _mm_crc32_u64, _mm_crc32_u8};

/// Fold one byte into a CRC32-C accumulator with the `crc32b` instruction.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
pub(crate) unsafe fn step_sse42_unchecked(crc: u32, byte: u8) -> u32 {
  _mm_crc32_u8(crc, byte)
}

/// Fold a byte slice into a CRC32-C accumulator with SSE4.2 instructions.
///
/// Consumes 8-byte chunks with `crc32q`, then narrows through 4-, 2-, and
/// 1-byte tails. Bit-identical to the bit-serial software path for every
/// input and every initial value.
///
/// # Safety
/// Caller must ensure the CPU supports the `sse4.2` target feature.
#[target_feature(enable = "sse4.2")]
pub(crate) unsafe fn compute_sse42_unchecked(crc: u32, data: &[u8]) -> u32 {
  let mut current = crc;

  let mut chunks = data.chunks_exact(8);
  for chunk in chunks.by_ref() {
    // SAFETY: chunks_exact guarantees exactly 8 bytes.
    let bytes: [u8; 8] = chunk.try_into().unwrap();
    current = _mm_crc32_u64(current as u64, u64::from_le_bytes(bytes)) as u32;
  }

  let mut rest = chunks.remainder();

  if rest.len() >= 4 {
    let (head, tail) = rest.split_at(4);
    // SAFETY: split_at(4) yields exactly 4 bytes in `head`.
    let bytes: [u8; 4] = head.try_into().unwrap();
    current = _mm_crc32_u32(current, u32::from_le_bytes(bytes));
    rest = tail;
  }

  if rest.len() >= 2 {
    let (head, tail) = rest.split_at(2);
    // SAFETY: split_at(2) yields exactly 2 bytes in `head`.
    let bytes: [u8; 2] = head.try_into().unwrap();
    current = _mm_crc32_u16(current, u16::from_le_bytes(bytes));
    rest = tail;
  }

  if let [byte] = rest {
    current = _mm_crc32_u8(current, *byte);
  }

  current
}

/// Byte step using SSE4.2 when it is enabled at compile time.
#[cfg(target_feature = "sse4.2")]
#[inline]
pub(crate) fn step_sse42_enabled(crc: u32, byte: u8) -> u32 {
  // SAFETY: this function is only compiled when `target_feature="sse4.2"`.
  unsafe { step_sse42_unchecked(crc, byte) }
}

/// Slice fold using SSE4.2 when it is enabled at compile time.
#[cfg(target_feature = "sse4.2")]
#[inline]
pub(crate) fn compute_sse42_enabled(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: this function is only compiled when `target_feature="sse4.2"`.
  unsafe { compute_sse42_unchecked(crc, data) }
}

/// Byte step selected after a positive runtime capability probe.
#[cfg(not(target_feature = "sse4.2"))]
#[inline]
pub(crate) fn step_sse42_runtime(crc: u32, byte: u8) -> u32 {
  // SAFETY: selected only when `platform::has_hardware_crc()` is true.
  unsafe { step_sse42_unchecked(crc, byte) }
}

/// Slice fold selected after a positive runtime capability probe.
#[cfg(not(target_feature = "sse4.2"))]
#[inline]
pub(crate) fn compute_sse42_runtime(crc: u32, data: &[u8]) -> u32 {
  // SAFETY: selected only when `platform::has_hardware_crc()` is true.
  unsafe { compute_sse42_unchecked(crc, data) }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use std::vec::Vec;

  use super::*;
  use crate::crc32c::bitwise;

  fn hw_available() -> bool {
    platform::has_hardware_crc()
  }

  #[test]
  #[cfg(not(miri))]
  fn test_step_matches_bitwise() {
    if !hw_available() {
      return;
    }

    for byte in 0..=255u8 {
      for &init in &[0u32, 0xFFFF_FFFF, 0x0123_4567] {
        // SAFETY: hardware support verified above.
        let hw = unsafe { step_sse42_unchecked(init, byte) };
        assert_eq!(hw, bitwise::step(init, byte), "byte {byte:#04x} init {init:#010x}");
      }
    }
  }

  #[test]
  #[cfg(not(miri))]
  fn test_compute_matches_bitwise_across_tail_shapes() {
    if !hw_available() {
      return;
    }

    // Lengths straddling the 8/4/2/1 narrowing ladder.
    for len in 0..=64usize {
      let data: Vec<u8> = (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(7)).collect();
      for &init in &[0u32, 0xFFFF_FFFF, 0x89AB_CDEF] {
        // SAFETY: hardware support verified above.
        let hw = unsafe { compute_sse42_unchecked(init, &data) };
        assert_eq!(hw, bitwise::compute(init, &data), "len {len} init {init:#010x}");
      }
    }
  }
}
