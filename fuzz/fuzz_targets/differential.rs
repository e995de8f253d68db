//! Fuzz target comparing the in-tree SipHash-1-3 against the siphasher crate.

#![no_main]

use core::hash::Hasher as _;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let mut ours = hashfold::SipHasher13::new();
  ours.write(data);

  let mut oracle = siphasher::sip::SipHasher13::new_with_keys(0, 0);
  oracle.write(data);

  assert_eq!(ours.finish(), oracle.finish(), "siphash13 mismatch");
});
