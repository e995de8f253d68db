//! Standard-strategy impls: delegate to the platform hash facility.
//!
//! Ordinary types hash through `core::hash::Hash` driven by the fixed-key
//! [`SipHasher13`]. Floats are the exception: `core::hash::Hash` does not
//! cover them, so they hash their IEEE-754 bit pattern here.

use core::hash::{Hash, Hasher};

use crate::sip::SipHasher13;
use crate::value_hash::{Digest, ValueHash};

/// Hash a value through the standard facility (`core::hash::Hash`).
///
/// This is the visible bridge to the fallback strategy: a custom
/// [`ValueHash`] impl that wants the platform's view of a `Hash` type calls
/// this instead of re-implementing byte-level hashing.
///
/// ```
/// use hashfold::{Digest, ValueHash, standard_hash};
///
/// #[derive(Hash)]
/// struct Opaque([u8; 16]);
///
/// impl ValueHash for Opaque {
///   fn value_hash(&self) -> Digest {
///     standard_hash(self)
///   }
/// }
/// ```
#[inline]
#[must_use]
pub fn standard_hash<T: Hash + ?Sized>(value: &T) -> Digest {
  let mut hasher = SipHasher13::new();
  value.hash(&mut hasher);
  hasher.finish()
}

/// Generate standard-strategy impls for `Hash` types.
macro_rules! impl_standard {
  ($($ty:ty),+ $(,)?) => {$(
    impl ValueHash for $ty {
      #[inline]
      fn value_hash(&self) -> Digest {
        standard_hash(self)
      }
    }
  )+};
}

impl_standard!(u8, u16, u32, u64, u128, usize);
impl_standard!(i8, i16, i32, i64, i128, isize);
impl_standard!(bool, char, str);

#[cfg(feature = "alloc")]
impl ValueHash for alloc::string::String {
  #[inline]
  fn value_hash(&self) -> Digest {
    self.as_str().value_hash()
  }
}

// Floats hash by bit pattern, with -0.0 normalized so equal values hash
// equally. NaNs keep their payload bits: two NaNs with different payloads
// may hash apart.
impl ValueHash for f32 {
  #[inline]
  fn value_hash(&self) -> Digest {
    let canonical = if *self == 0.0 { 0.0f32 } else { *self };
    standard_hash(&canonical.to_bits())
  }
}

impl ValueHash for f64 {
  #[inline]
  fn value_hash(&self) -> Digest {
    let canonical = if *self == 0.0 { 0.0f64 } else { *self };
    standard_hash(&canonical.to_bits())
  }
}
