//! Differential fuzzing of the CRC32-C dispatch.
//!
//! Compares the dispatched entry points against the bit-serial software
//! oracle, and checks that arbitrary chunking never changes the result.

#![no_main]

use arbitrary::Arbitrary;
use hashing::crc32c;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  init: u32,
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  // Dispatched path must match the software oracle bit-for-bit.
  let dispatched = crc32c::compute(input.init, data);
  let oracle = crc32c::bitwise::compute(input.init, data);
  assert_eq!(
    dispatched,
    oracle,
    "hardware/software divergence: init={:#010x}, len={}",
    input.init,
    data.len()
  );

  // Chunked folding must match one-shot.
  let split = input.split_point % (data.len() + 1);
  let (a, b) = data.split_at(split);
  let chunked = crc32c::compute(crc32c::compute(input.init, a), b);
  assert_eq!(chunked, dispatched, "chunking divergence at split {split}");

  // Per-byte stepping must match the slice fold.
  let mut stepped = input.init;
  for &byte in data.iter() {
    stepped = crc32c::step(stepped, byte);
  }
  assert_eq!(stepped, dispatched, "step/fold divergence");
});
