//! Generic value hashing for hash-based containers and cache keys.
//!
//! `hashfold` folds arbitrary values (primitives, enums, user-defined types,
//! tuples, and ordered sequences) into a single `u64` digest. It is **not**
//! a cryptographic hash: digests have good practical distribution for map
//! buckets, deduplication, and memoization keys, and offer no resistance to
//! adversarial collision construction. Digests are also not a stable format;
//! they may change between builds and must never be persisted or transmitted.
//!
//! # Hashing Strategies
//!
//! Exactly one strategy applies to any given type, resolved at compile time:
//!
//! | Strategy | Applies to | Mechanism |
//! |----------|------------|-----------|
//! | Custom | types with a hand-written [`ValueHash`] impl | the impl itself |
//! | Enumerated | fieldless enums | [`value_hash_enum!`] forwards to the underlying integer |
//! | Standard | primitives, `str`, `String`, floats | [`standard_hash`] over `core::hash::Hash` |
//!
//! Because Rust admits exactly one trait impl per type, a hand-written impl
//! *is* the selected strategy even when the type also implements
//! `core::hash::Hash`. A type with no impl fails to compile at the call
//! site; there is no runtime "unhashable" condition.
//!
//! # Quick Start
//!
//! ```
//! use hashfold::{combined_hash, hash_of};
//!
//! // Scalars, tuples, and sequences are hashable out of the box.
//! let digest = hash_of(&(1u32, "label", true));
//! assert_eq!(digest, hash_of(&(1u32, "label", true)));
//!
//! // Sequences fold in iteration order; the empty sequence hashes to 0.
//! assert_ne!(hash_of(&[1u8, 2, 3][..]), hash_of(&[3u8, 2, 1][..]));
//! assert_eq!(hash_of(&[0u8; 0][..]), 0);
//!
//! // Hash several independent values in one expression.
//! assert_eq!(combined_hash!(1u32, "label", true), digest);
//! ```
//!
//! # Custom Types
//!
//! Implementing [`ValueHash`] is the sole extension point. A type hashes the
//! fields that define its identity, typically via [`combined_hash!`]:
//!
//! ```
//! use hashfold::{Digest, ValueHash, combined_hash};
//!
//! struct Span {
//!   file: String,
//!   lo: u32,
//!   hi: u32,
//! }
//!
//! impl ValueHash for Span {
//!   fn value_hash(&self) -> Digest {
//!     combined_hash!(self.file, self.lo, self.hi)
//!   }
//! }
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `FixedHashMap`/`FixedHashSet` container aliases |
//! | `alloc` | Yes | `String` and `Vec<T>` impls (implied by `std`) |
//!
//! Without either feature the crate is fully `no_std`: the mixing primitive,
//! dispatch, and composite rules have no allocation or I/O of any kind.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod combine;
mod composite;
mod macros;
#[cfg(feature = "std")]
mod map;
mod scalar;
mod sip;
mod value_hash;

pub use combine::{GOLDEN_GAMMA, combine};
#[cfg(feature = "std")]
pub use map::{FixedHashMap, FixedHashSet, FixedState};
pub use scalar::standard_hash;
pub use sip::SipHasher13;
pub use value_hash::{Digest, ValueHash, hash_of};
