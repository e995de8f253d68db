//! Fuzz target for streaming writes.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Chunked writes produce the same digest as a one-shot write

#![no_main]

use core::hash::Hasher as _;

use arbitrary::Arbitrary;
use hashfold::SipHasher13;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  splits: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut oneshot = SipHasher13::new();
  oneshot.write(data);
  let expected = oneshot.finish();

  // Normalize splits to valid range and sort
  let mut splits: Vec<usize> = input.splits.iter().map(|s| s % (data.len() + 1)).collect();
  splits.sort();
  splits.dedup();

  let mut chunked = SipHasher13::new();
  let mut prev = 0;
  for &split in &splits {
    chunked.write(&data[prev..split]);
    prev = split;
  }
  chunked.write(&data[prev..]);

  assert_eq!(chunked.finish(), expected, "chunked digest mismatch");
});
