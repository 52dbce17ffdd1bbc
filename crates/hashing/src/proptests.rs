//! Property tests for the hash engine.
//!
//! These verify the invariants that hold for *all* inputs, not just the
//! fixed vectors in the unit tests:
//!
//! 1. **Dispatch equivalence**: the CRC32-C entry points match the
//!    bit-serial software oracle regardless of which path dispatch picks.
//! 2. **Chunking equivalence**: folding a sequence in two pieces equals
//!    the one-shot fold, for any split point.
//! 3. **Index bounds**: `seed_mix` never escapes a power-of-two table.
//! 4. **Fold definition**: sequence hashing equals the per-byte
//!    accumulator fold it is defined as.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;

use crate::{
  constants::{FNV_OFFSET_BASIS, FNV_PRIME},
  crc32c, fnv1a, hash_bytes, hash_bytes_with_basis, seed_mix,
};

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn crc_dispatch_matches_bitwise(
    data in proptest::collection::vec(any::<u8>(), 0..=2048),
    init in any::<u32>()
  ) {
    prop_assert_eq!(crc32c::compute(init, &data), crc32c::bitwise::compute(init, &data));
  }

  #[test]
  fn crc_chunking_equivalence(
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);

    let oneshot = crc32c::compute(0, &data);
    let chunked = crc32c::compute(crc32c::compute(0, a), b);
    prop_assert_eq!(chunked, oneshot, "mismatch at split {}/{}", split, data.len());
  }

  #[test]
  fn crc_step_matches_single_byte_compute(init in any::<u32>(), byte in any::<u8>()) {
    prop_assert_eq!(crc32c::step(init, byte), crc32c::compute(init, &[byte]));
  }

  #[test]
  fn seed_mix_stays_in_bounds(seed in any::<u32>(), hash in any::<u32>(), pow in 0_u32..=20) {
    let size = 1_usize << pow;
    prop_assert!((seed_mix(seed, hash, size) as usize) < size);
  }

  #[test]
  fn hash_bytes_is_the_fnv1a_fold(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
    let mut expected = FNV_OFFSET_BASIS;
    for &byte in &data {
      expected = fnv1a(expected, byte, FNV_PRIME);
    }
    prop_assert_eq!(hash_bytes(&data), expected);
  }

  #[test]
  fn hash_bytes_basis_fold_is_deterministic(
    basis in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    prop_assert_eq!(
      hash_bytes_with_basis(basis, &data),
      hash_bytes_with_basis(basis, &data)
    );
  }
}
