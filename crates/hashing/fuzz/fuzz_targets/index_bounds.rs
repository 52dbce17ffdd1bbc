//! Fuzzing of the seed-mix index bound.
//!
//! For every power-of-two table size, the produced index must stay inside
//! the table, and identical inputs must reproduce the identical index.

#![no_main]

use arbitrary::Arbitrary;
use hashing::seed_mix;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  seed: u32,
  hash: u32,
  size_pow: u8,
}

fuzz_target!(|input: Input| {
  // Power-of-two sizes up to 2^31 keep `usize` portable across targets.
  let size = 1_usize << (input.size_pow % 32);

  let index = seed_mix(input.seed, input.hash, size);
  assert!(
    (index as usize) < size,
    "index {index} escaped table of {size} (seed={:#010x}, hash={:#010x})",
    input.seed,
    input.hash
  );

  assert_eq!(index, seed_mix(input.seed, input.hash, size));
});
