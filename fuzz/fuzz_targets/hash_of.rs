//! Fuzz target for the public hashing surface.
//!
//! Tests that:
//! - No panics on arbitrary scalars, tuples, and sequences
//! - Repeated hashing is deterministic
//! - The sequence fold matches its definition (left fold from seed 0)

#![no_main]

use arbitrary::Arbitrary;
use hashfold::{combine, combined_hash, hash_of};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  bytes: Vec<u8>,
  ints: Vec<u64>,
  text: String,
  flag: bool,
}

fuzz_target!(|input: Input| {
  let tuple = (input.text.as_str(), input.flag, input.ints.len() as u64);
  assert_eq!(hash_of(&tuple), hash_of(&tuple));
  assert_eq!(
    combined_hash!(input.text.as_str(), input.flag, input.ints.len() as u64),
    hash_of(&tuple)
  );

  let mut seed = 0u64;
  for value in &input.ints {
    seed = combine(seed, hash_of(value));
  }
  assert_eq!(hash_of(input.ints.as_slice()), seed);
  if input.ints.is_empty() {
    assert_eq!(seed, 0);
  }

  assert_eq!(hash_of(input.bytes.as_slice()), hash_of(input.bytes.as_slice()));
});
