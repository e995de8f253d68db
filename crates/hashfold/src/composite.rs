//! Composite hashing: tuples and ordered sequences.
//!
//! A composite's digest is a deterministic, order-sensitive fold of its
//! elements' digests through [`combine`], never the composite's address.
//!
//! Tuples fold lowest index innermost: the digest of `(a, b)` is
//! `combine(hash_of(&b), hash_of(&a))`, and each further element wraps the
//! accumulator once more. Sequences fold left-to-right from a zero seed:
//! `seed = combine(seed, hash_of(&element))` per element, so the empty
//! sequence hashes to 0 for every element type.

use crate::combine::combine;
use crate::value_hash::{Digest, ValueHash};

impl<T0: ValueHash> ValueHash for (T0,) {
  #[inline]
  fn value_hash(&self) -> Digest {
    self.0.value_hash()
  }
}

/// Generate the tuple impl for one arity of two or more.
macro_rules! impl_value_hash_tuple {
  ($first:ident . $first_idx:tt $(, $rest:ident . $rest_idx:tt)+) => {
    impl<$first: ValueHash $(, $rest: ValueHash)+> ValueHash for ($first, $($rest,)+) {
      #[inline]
      fn value_hash(&self) -> Digest {
        let mut acc = self.$first_idx.value_hash();
        $(acc = combine(self.$rest_idx.value_hash(), acc);)+
        acc
      }
    }
  };
}

impl_value_hash_tuple!(T0.0, T1.1);
impl_value_hash_tuple!(T0.0, T1.1, T2.2);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10);
impl_value_hash_tuple!(T0.0, T1.1, T2.2, T3.3, T4.4, T5.5, T6.6, T7.7, T8.8, T9.9, T10.10, T11.11);

impl<T: ValueHash> ValueHash for [T] {
  fn value_hash(&self) -> Digest {
    // Iterative fold: stack usage stays flat however long the sequence is.
    let mut seed = 0;
    for element in self {
      seed = combine(seed, element.value_hash());
    }
    seed
  }
}

impl<T: ValueHash, const N: usize> ValueHash for [T; N] {
  #[inline]
  fn value_hash(&self) -> Digest {
    self.as_slice().value_hash()
  }
}

#[cfg(feature = "alloc")]
impl<T: ValueHash> ValueHash for alloc::vec::Vec<T> {
  #[inline]
  fn value_hash(&self) -> Digest {
    self.as_slice().value_hash()
  }
}
