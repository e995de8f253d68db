//! Deterministic hash-container aliases.
//!
//! `std`'s default map hasher randomizes its keys per process, so bucket
//! layouts (and any digest derived through it) differ run to run. These
//! aliases swap in the fixed-key [`SipHasher13`], which keeps container
//! behavior reproducible within a build; useful for tests and for tools that
//! want stable intermediate state. The usual caveat applies: fixed keys mean
//! no protection against adversarial keys, same as the rest of this crate.

use core::hash::BuildHasher;
use std::collections::{HashMap, HashSet};

use crate::sip::SipHasher13;

/// [`BuildHasher`] producing the fixed-key [`SipHasher13`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedState;

impl BuildHasher for FixedState {
  type Hasher = SipHasher13;

  #[inline]
  fn build_hasher(&self) -> SipHasher13 {
    SipHasher13::new()
  }
}

/// `HashMap` hashed by [`FixedState`].
///
/// ```
/// use hashfold::{FixedHashMap, hash_of};
///
/// let mut cache: FixedHashMap<u64, &str> = FixedHashMap::default();
/// cache.insert(hash_of(&("query", 7u32)), "result");
/// assert_eq!(cache.get(&hash_of(&("query", 7u32))), Some(&"result"));
/// ```
pub type FixedHashMap<K, V> = HashMap<K, V, FixedState>;

/// `HashSet` counterpart of [`FixedHashMap`].
pub type FixedHashSet<T> = HashSet<T, FixedState>;
