//! One-shot CPU capability detection.
//!
//! This module provides the cached `get()` function behind the crate's
//! public accessors. It handles:
//!
//! - Compile-time detection (via `cfg!(target_feature = "...")`)
//! - Runtime detection (via CPUID on x86/x86_64)
//! - Caching (`OnceLock` with `std`, atomics without)
//! - Miri fallback (always reports no capabilities)
//!
//! Detection never fails: an unsupported CPUID leaf simply leaves its
//! capability bits unset.

use crate::caps::{self, CpuCaps};

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Returns capabilities known at compile time.
///
/// Detects features enabled via `-C target-feature=...` or
/// `-C target-cpu=native`. Returns a `const` value, so the compiler
/// eliminates all runtime checks.
///
/// For generic binaries that run on multiple CPUs, use the crate's cached
/// accessors instead; they union this baseline with runtime CPUID results.
#[inline(always)]
#[must_use]
pub const fn caps_static() -> CpuCaps {
  let mut result = CpuCaps::NONE;

  // cfg!() is a const bool; dead branches vanish at compile time. The
  // probed features are x86-only, so these are all false elsewhere.
  if cfg!(target_feature = "sse4.2") {
    result = result.union(caps::HW_CRC);
  }
  if cfg!(target_feature = "avx") {
    result = result.union(caps::AVX);
  }
  if cfg!(target_feature = "avx2") {
    result = result.union(caps::AVX2);
  }

  result
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime Detection
// ─────────────────────────────────────────────────────────────────────────────

/// Runtime x86_64 capability detection using CPUID.
///
/// Makes at most three CPUID calls:
/// - Leaf 0: maximum supported leaf
/// - Leaf 1: SSE4.2 (ECX bit 20), AVX (ECX bit 28)
/// - Leaf 7, sub-leaf 0: AVX2 (EBX bit 5), only when the CPU reports leaf 7
///
/// A leaf that is not implemented leaves its capability bits unset; this
/// function cannot fail.
#[cfg(target_arch = "x86_64")]
fn cpuid_caps() -> CpuCaps {
  use core::arch::x86_64::{__cpuid, __cpuid_count};

  let mut result = CpuCaps::NONE;

  // CPUID leaf 0: EAX holds the highest supported standard leaf.
  let cpuid0 = __cpuid(0);
  let max_leaf = cpuid0.eax;

  if max_leaf >= 1 {
    let cpuid1 = __cpuid(1);
    if cpuid1.ecx & (1 << 20) != 0 {
      result |= caps::HW_CRC;
    }
    if cpuid1.ecx & (1 << 28) != 0 {
      result |= caps::AVX;
    }
  }

  if max_leaf >= 7 {
    let cpuid7 = __cpuid_count(7, 0);
    if cpuid7.ebx & (1 << 5) != 0 {
      result |= caps::AVX2;
    }
  }

  result
}

/// Runtime x86 (32-bit) capability detection using CPUID.
///
/// # Safety
/// Uses the CPUID intrinsics, which are `unsafe` on 32-bit x86; they are
/// safe to execute on every CPU this crate's baseline targets support.
#[cfg(target_arch = "x86")]
#[allow(unsafe_code)]
fn cpuid_caps() -> CpuCaps {
  use core::arch::x86::{__cpuid, __cpuid_count};

  let mut result = CpuCaps::NONE;

  // SAFETY: CPUID is available on all i586+ targets this crate builds for.
  let cpuid0 = unsafe { __cpuid(0) };
  let max_leaf = cpuid0.eax;

  if max_leaf >= 1 {
    // SAFETY: leaf 1 is within the reported maximum leaf.
    let cpuid1 = unsafe { __cpuid(1) };
    if cpuid1.ecx & (1 << 20) != 0 {
      result |= caps::HW_CRC;
    }
    if cpuid1.ecx & (1 << 28) != 0 {
      result |= caps::AVX;
    }
  }

  if max_leaf >= 7 {
    // SAFETY: leaf 7 is within the reported maximum leaf.
    let cpuid7 = unsafe { __cpuid_count(7, 0) };
    if cpuid7.ebx & (1 << 5) != 0 {
      result |= caps::AVX2;
    }
  }

  result
}

/// Detect capabilities without caching.
///
/// Unions the compile-time baseline with runtime CPUID results. On
/// architectures without the probed extensions this returns the
/// compile-time set.
#[inline]
#[must_use]
pub fn detect_uncached() -> CpuCaps {
  #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
  {
    caps_static().union(cpuid_caps())
  }

  #[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
  {
    caps_static()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Caching
// ─────────────────────────────────────────────────────────────────────────────

/// Cache state for no_std builds.
#[cfg(not(feature = "std"))]
mod cache {
  use core::sync::atomic::{AtomicU8, Ordering};

  use crate::caps::CpuCaps;

  /// Initialization state.
  /// 0 = uninitialized, 1 = initializing, 2 = initialized
  static STATE: AtomicU8 = AtomicU8::new(0);

  /// Cached capability bits.
  static CACHED_BITS: AtomicU8 = AtomicU8::new(0);

  /// Try to get the cached value, or compute and cache.
  ///
  /// Exactly one caller runs `f`; concurrent first callers spin until the
  /// winner publishes the result.
  #[inline]
  pub fn get_or_init(f: fn() -> CpuCaps) -> CpuCaps {
    // Fast path: already initialized.
    if STATE.load(Ordering::Acquire) == 2 {
      return CpuCaps::from_bits(CACHED_BITS.load(Ordering::Acquire));
    }

    match STATE.compare_exchange(0, 1, Ordering::AcqRel, Ordering::Acquire) {
      Ok(_) => {
        // We won the race: compute and publish.
        let result = f();
        CACHED_BITS.store(result.bits(), Ordering::Release);
        STATE.store(2, Ordering::Release);
        result
      }
      Err(1) => {
        // Someone else is initializing, spin until published.
        while STATE.load(Ordering::Acquire) == 1 {
          core::hint::spin_loop();
        }
        CpuCaps::from_bits(CACHED_BITS.load(Ordering::Acquire))
      }
      Err(_) => {
        // Already initialized.
        CpuCaps::from_bits(CACHED_BITS.load(Ordering::Acquire))
      }
    }
  }
}

/// Get detected CPU capabilities, computed once per process.
///
/// # Caching
///
/// - With `std`: the result is cached in a `OnceLock`.
/// - Without `std`: the result is cached with an atomic once-flag.
///
/// Repeated calls within one process always return an identical value;
/// only the first call executes CPUID.
///
/// # Miri
///
/// Under Miri, always returns the empty capability set: the interpreter
/// cannot execute CPUID, and every hardware path must stay unselected.
#[inline]
#[must_use]
pub fn get() -> CpuCaps {
  #[cfg(miri)]
  {
    CpuCaps::NONE
  }

  #[cfg(not(miri))]
  {
    #[cfg(feature = "std")]
    {
      use std::sync::OnceLock;
      static CACHED: OnceLock<CpuCaps> = OnceLock::new();
      *CACHED.get_or_init(detect_uncached)
    }

    #[cfg(not(feature = "std"))]
    {
      cache::get_or_init(detect_uncached)
    }
  }
}
