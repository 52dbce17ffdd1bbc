//! CPU capability representation.
//!
//! [`CpuCaps`] is a small feature bitset covering the instruction-set
//! extensions the hash engine can dispatch on. The bits are x86-specific;
//! on other architectures the set is always empty.

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities relevant to hash acceleration.
///
/// # Thread Safety
///
/// `CpuCaps` is `Copy`, `Send`, and `Sync`. It can be freely shared across
/// threads.
///
/// # Example
///
/// ```
/// use platform::caps;
///
/// let c = platform::caps();
/// if c.has(caps::HW_CRC) {
///   // Use the SSE4.2 CRC32 kernel
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct CpuCaps(u8);

/// Hardware CRC accumulation: x86 SSE4.2 `crc32` instructions
/// (CPUID leaf 1, ECX bit 20).
pub const HW_CRC: CpuCaps = CpuCaps(1 << 0);

/// 256-bit floating-point vector extension: x86 AVX
/// (CPUID leaf 1, ECX bit 28).
pub const AVX: CpuCaps = CpuCaps(1 << 1);

/// 256-bit integer vector extension: x86 AVX2
/// (CPUID leaf 7, sub-leaf 0, EBX bit 5).
pub const AVX2: CpuCaps = CpuCaps(1 << 2);

impl CpuCaps {
  /// Empty capability set (no features).
  pub const NONE: CpuCaps = CpuCaps(0);

  /// Check whether every capability in `required` is present.
  #[inline]
  #[must_use]
  pub const fn has(self, required: CpuCaps) -> bool {
    self.0 & required.0 == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: CpuCaps) -> CpuCaps {
    CpuCaps(self.0 | other.0)
  }

  /// Whether no capability is set.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Raw bit pattern, for the atomic cache.
  #[inline]
  pub(crate) const fn bits(self) -> u8 {
    self.0
  }

  /// Reconstruct from a raw bit pattern, for the atomic cache.
  #[inline]
  pub(crate) const fn from_bits(bits: u8) -> CpuCaps {
    CpuCaps(bits)
  }
}

impl core::ops::BitOr for CpuCaps {
  type Output = CpuCaps;

  #[inline]
  fn bitor(self, rhs: CpuCaps) -> CpuCaps {
    self.union(rhs)
  }
}

impl core::ops::BitOrAssign for CpuCaps {
  #[inline]
  fn bitor_assign(&mut self, rhs: CpuCaps) {
    *self = self.union(rhs);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_none_has_nothing() {
    assert!(!CpuCaps::NONE.has(HW_CRC));
    assert!(!CpuCaps::NONE.has(AVX));
    assert!(!CpuCaps::NONE.has(AVX2));
    assert!(CpuCaps::NONE.is_empty());
  }

  #[test]
  fn test_union_accumulates() {
    let c = CpuCaps::NONE.union(HW_CRC).union(AVX2);
    assert!(c.has(HW_CRC));
    assert!(!c.has(AVX));
    assert!(c.has(AVX2));
    assert!(c.has(HW_CRC.union(AVX2)));
    assert!(!c.has(HW_CRC.union(AVX)));
  }

  #[test]
  fn test_bits_roundtrip() {
    let c = HW_CRC.union(AVX);
    assert_eq!(CpuCaps::from_bits(c.bits()), c);
  }

  #[test]
  fn test_flags_are_distinct() {
    assert_ne!(HW_CRC, AVX);
    assert_ne!(AVX, AVX2);
    assert_ne!(HW_CRC, AVX2);
  }
}
