//! CPU capability detection for hashkit.
//!
//! This crate is the single source of truth for the instruction-set
//! capabilities the hash engine dispatches on. It answers the question:
//! "Which accelerated code paths can this machine legally run?"
//!
//! # Capabilities
//!
//! | Capability | Query | Bit tested |
//! |---|---|---|
//! | [`has_hardware_crc`] | CPUID leaf 1 | ECX bit 20 (SSE4.2) |
//! | [`has_avx`] | CPUID leaf 1 | ECX bit 28 (AVX) |
//! | [`has_avx2`] | CPUID leaf 7, sub-leaf 0 | EBX bit 5 (AVX2) |
//!
//! # Main Entry Points
//!
//! ```
//! use platform::caps;
//!
//! if platform::has_hardware_crc() {
//!   // Use the SSE4.2 CRC32 kernel
//! }
//!
//! // Or take the whole set at once:
//! let c = platform::caps();
//! if c.has(caps::AVX2) {
//!   // 256-bit integer vectors available
//! }
//! ```
//!
//! # Design
//!
//! 1. **Infallible**: a missing capability, an unimplemented CPUID leaf, or
//!    a non-x86 architecture all report `false`, never an error.
//! 2. **One-shot**: detection runs once per process on first query and is
//!    cached for the process lifetime; hardware does not change under us.
//! 3. **Zero-cost when possible**: features enabled at compile time are
//!    detected via `cfg!` with no runtime check.
//! 4. **Cached otherwise**: runtime detection is cached in a `OnceLock`
//!    (std) or an atomic once-flag (no_std).
//! 5. **Miri-safe**: under Miri, every capability reports `false`.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(unsafe_code)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

pub use caps::CpuCaps;
pub use detect::{caps_static, detect_uncached};

/// Get the detected CPU capability set.
///
/// Detection runs once per process; every subsequent call is a cached load.
#[inline]
#[must_use]
pub fn caps() -> CpuCaps {
  detect::get()
}

/// Whether hardware CRC accumulation is available (x86 SSE4.2 `crc32`
/// instructions; CPUID leaf 1, ECX bit 20).
#[inline]
#[must_use]
pub fn has_hardware_crc() -> bool {
  detect::get().has(caps::HW_CRC)
}

/// Whether the 256-bit floating-point vector extension is available
/// (x86 AVX; CPUID leaf 1, ECX bit 28).
#[inline]
#[must_use]
pub fn has_avx() -> bool {
  detect::get().has(caps::AVX)
}

/// Whether the 256-bit integer vector extension is available
/// (x86 AVX2; CPUID leaf 7, sub-leaf 0, EBX bit 5).
#[inline]
#[must_use]
pub fn has_avx2() -> bool {
  detect::get().has(caps::AVX2)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_accessors_match_caps() {
    let c = caps();
    assert_eq!(has_hardware_crc(), c.has(caps::HW_CRC));
    assert_eq!(has_avx(), c.has(caps::AVX));
    assert_eq!(has_avx2(), c.has(caps::AVX2));
  }

  #[test]
  fn test_accessors_are_stable() {
    let crc = has_hardware_crc();
    let avx = has_avx();
    let avx2 = has_avx2();
    for _ in 0..8 {
      assert_eq!(has_hardware_crc(), crc);
      assert_eq!(has_avx(), avx);
      assert_eq!(has_avx2(), avx2);
    }
  }
}
