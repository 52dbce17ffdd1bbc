//! Fast bit-mixing hash primitives (**NOT CRYPTO**).
//!
//! A library of pure, stateless mixing functions for hash tables, string
//! interning, sharding, and fingerprinting. Nothing here resists
//! adversarial input; do not use these hashes for signatures, MACs,
//! password storage, or untrusted-input deduplication.
//!
//! # Operations
//!
//! | Function | Output | Purpose |
//! |----------|--------|---------|
//! | [`larson`] | `u32` | Legacy-compatible byte accumulator (`37 * h + b`) |
//! | [`fnv1a`] | `u32` | XOR-multiply byte accumulator, prime-parameterized |
//! | [`crc32c::step`] / [`crc32c::compute`] | `u32` | Hardware-dispatched CRC32-C accumulator |
//! | [`hash_bytes`] / [`hash_str`] | `u32` | Sequence hashing from an offset basis |
//! | [`hash_integer`] | `usize` | Avalanche integer hashing, width-polymorphic |
//! | [`combine32`] / [`combine_word`] | `u32` / `usize` | Order-sensitive hash composition |
//! | [`seed_mix`] | `u32` | Seeded reduction into a power-of-two index space |
//!
//! # Hardware Acceleration
//!
//! The CRC32-C accumulator consults the `platform` crate once per process
//! and selects the x86 SSE4.2 `crc32` instruction family when available.
//! The software fallback is bit-identical for every input, so the selected
//! path is never observable through results.
//!
//! # Example
//!
//! ```
//! use hashing::{combine32, constants::FNV_PRIME, hash_bytes, hash_integer, seed_mix};
//!
//! // Hash a record key: name + id, combined in fixed field order.
//! let mut key = combine32(0, hash_bytes(b"name"), FNV_PRIME);
//! key = combine32(key, hash_integer(42_i32) as u32, FNV_PRIME);
//!
//! // Place it in a 1024-slot probe table.
//! let slot = seed_mix(0x5EED, key, 1024);
//! assert!(slot < 1024);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for
//! embedded use:
//!
//! ```toml
//! [dependencies]
//! hashing = { version = "0.1", default-features = false }
//! ```
//!
//! Every operation is a synchronous, non-blocking pure computation: no
//! allocation, no I/O, no errors, no shared mutable state beyond the
//! capability probe's one-shot cache.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(unsafe_code)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod constants;
pub mod crc32c;

mod accumulate;
mod bytes;
mod combine;
mod integer;
mod mix;

mod proptests;

pub use accumulate::{fnv1a, larson};
pub use bytes::{hash_bytes, hash_bytes_with_basis, hash_str};
pub use combine::{combine32, combine_word};
pub use integer::{hash_integer, hash_u32, hash_u64, HashableInteger};
pub use mix::seed_mix;
