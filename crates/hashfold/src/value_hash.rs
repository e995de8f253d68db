//! The value-hashing capability trait and the general entry point.

/// Digest produced by every hashing operation in this crate.
///
/// Word-sized and transient: digests are produced, consumed, and discarded
/// within a process. They are not stable across builds or versions.
pub type Digest = u64;

/// A value that can be folded into a 64-bit digest.
///
/// Implementing this trait is how a domain type registers itself as hashable
/// (the custom strategy). The impl controls exactly which parts of the value
/// contribute to the digest, so a type wrapping a resource identifier can
/// hash only its semantically relevant fields:
///
/// ```
/// use hashfold::{Digest, ValueHash, combined_hash};
///
/// struct Interned {
///   id: u64,
///   cached_display: String, // derived, not part of identity
/// }
///
/// impl ValueHash for Interned {
///   fn value_hash(&self) -> Digest {
///     combined_hash!(self.id)
///   }
/// }
/// ```
///
/// Impls for primitives delegate to the standard facility via
/// [`standard_hash`](crate::standard_hash); fieldless enums get impls from
/// [`value_hash_enum!`](crate::value_hash_enum); tuples and sequences fold
/// their elements through [`combine`](crate::combine). Coherence guarantees
/// that exactly one of these applies to any type.
pub trait ValueHash {
  /// Compute this value's digest.
  ///
  /// Must be deterministic for the lifetime of the process: repeated calls
  /// on the same value return the same digest.
  #[must_use]
  fn value_hash(&self) -> Digest;
}

/// References hash as the values they point to, never by address.
impl<T: ValueHash + ?Sized> ValueHash for &T {
  #[inline]
  fn value_hash(&self) -> Digest {
    (**self).value_hash()
  }
}

/// Hash any hashable value.
///
/// The general entry point: dispatches to the value's [`ValueHash`] impl,
/// which covers scalars, tuples of hashables, and sequences of hashables
/// alike. Stateless; safe to call concurrently from any number of threads.
///
/// ```
/// use hashfold::hash_of;
///
/// let a = hash_of(&("proc", 42u16));
/// let b = hash_of(&("proc", 42u16));
/// assert_eq!(a, b);
/// ```
#[inline]
#[must_use]
pub fn hash_of<T: ValueHash + ?Sized>(value: &T) -> Digest {
  value.value_hash()
}
