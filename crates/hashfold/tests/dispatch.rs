//! Strategy dispatch: custom precedence, enum stability, and the extension
//! point a domain type uses to register itself.

use hashfold::{Digest, ValueHash, combined_hash, hash_of, standard_hash, value_hash_enum};

/// A domain type whose digest covers only its identity fields. Also derives
/// `Hash`, so the standard facility has its own (different) opinion of it.
#[derive(Hash)]
struct ResourceKey {
  namespace: &'static str,
  id: u64,
  refreshed_at: u64, // bookkeeping, not identity
}

impl ValueHash for ResourceKey {
  fn value_hash(&self) -> Digest {
    combined_hash!(self.namespace, self.id)
  }
}

#[derive(Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
enum Opcode {
  Halt = 0,
  Load = 0x10,
  Store = 0x20,
  Branch = 0x0300,
}

value_hash_enum!(Opcode => u16);

#[test]
fn custom_impl_takes_precedence_over_the_standard_facility() {
  let key = ResourceKey {
    namespace: "volumes",
    id: 7,
    refreshed_at: 123_456,
  };
  assert_eq!(hash_of(&key), combined_hash!(key.namespace, key.id));
  assert_ne!(hash_of(&key), standard_hash(&key));
}

#[test]
fn custom_impl_ignores_non_identity_fields() {
  let before = ResourceKey {
    namespace: "volumes",
    id: 7,
    refreshed_at: 1,
  };
  let after = ResourceKey {
    namespace: "volumes",
    id: 7,
    refreshed_at: 2,
  };
  assert_eq!(hash_of(&before), hash_of(&after));

  // The standard facility would have seen the bookkeeping field.
  assert_ne!(standard_hash(&before), standard_hash(&after));
}

#[test]
fn enum_hash_equals_its_underlying_integer_hash() {
  for op in [Opcode::Halt, Opcode::Load, Opcode::Store, Opcode::Branch] {
    assert_eq!(hash_of(&op), hash_of(&(op as u16)));
  }
}

#[test]
fn distinct_discriminants_hash_apart() {
  assert_ne!(hash_of(&Opcode::Load), hash_of(&Opcode::Store));
}

#[test]
fn custom_types_compose_into_tuples_and_sequences() {
  let a = ResourceKey {
    namespace: "volumes",
    id: 1,
    refreshed_at: 0,
  };
  let b = ResourceKey {
    namespace: "snapshots",
    id: 2,
    refreshed_at: 0,
  };

  let pair = hash_of(&(&a, &b));
  assert_eq!(pair, hashfold::combine(hash_of(&b), hash_of(&a)));

  let seq = [&a, &b];
  let mut seed = 0;
  seed = hashfold::combine(seed, hash_of(&a));
  seed = hashfold::combine(seed, hash_of(&b));
  assert_eq!(hash_of(&seq[..]), seed);
}

#[cfg(feature = "std")]
#[test]
fn digests_key_deterministic_containers() {
  use hashfold::FixedHashMap;

  let mut memo: FixedHashMap<u64, &'static str> = FixedHashMap::default();
  let key = ResourceKey {
    namespace: "volumes",
    id: 7,
    refreshed_at: 0,
  };
  memo.insert(hash_of(&key), "attached");
  assert_eq!(memo.get(&hash_of(&key)), Some(&"attached"));
}
