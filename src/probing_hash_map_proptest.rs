#![cfg(test)]

// Property tests for ProbingHashMap kept inside the crate so they sit next
// to the module under test. Small capacities are deliberate: they force
// wrap-around probing, tombstone runs, and saturation.

use crate::map::InsertError;
use crate::probing_hash_map::ProbingHashMap;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::hash::Hasher;

// Key newtype with Borrow<str> to exercise borrowed lookup.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
struct Key(String);
impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
impl std::borrow::Borrow<str> for Key {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug)]
enum OpI {
    Put(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    Mutate(usize, i32),
    Keys,
}

fn key_from(pool: &[String], i: usize) -> Key {
    Key(pool[i].clone())
}

fn arb_scenario() -> impl Strategy<Value = (usize, Vec<String>, Vec<OpI>)> {
    (1usize..=8, proptest::collection::vec("[a-z]{0,5}", 1..=8)).prop_flat_map(
        |(capacity, pool)| {
            let idxs: Vec<usize> = (0..pool.len()).collect();
            let idx = proptest::sample::select(idxs);
            let contains_pool = proptest::sample::select(pool.clone());
            let op = prop_oneof![
                (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Put(i, v)),
                idx.clone().prop_map(OpI::Remove),
                idx.clone().prop_map(OpI::Get),
                prop_oneof![
                    contains_pool.prop_map(|s: String| s),
                    "[a-z]{0,5}".prop_map(|s| s)
                ]
                .prop_map(OpI::Contains),
                (idx.clone(), any::<i32>()).prop_map(|(i, d)| OpI::Mutate(i, d)),
                Just(OpI::Keys),
            ];
            proptest::collection::vec(op, 1..60)
                .prop_map(move |ops| (capacity, pool.clone(), ops))
        },
    )
}

fn run_scenario<S>(
    mut sut: ProbingHashMap<Key, i32, S>,
    capacity: usize,
    pool: Vec<String>,
    ops: Vec<OpI>,
) -> Result<(), TestCaseError>
where
    S: std::hash::BuildHasher,
{
    let mut model: HashMap<Key, i32> = HashMap::new();

    for op in ops {
        match op {
            OpI::Put(i, v) => {
                let k = key_from(&pool, i);
                // Saturation is deterministic: a new key fails exactly when
                // every slot already holds a distinct other key. Tombstones
                // never cause failure because an insert probe stops at the
                // first one.
                let expect_full = model.len() == capacity && !model.contains_key(&k);
                match sut.put(k.clone(), v) {
                    Ok(prev) => {
                        prop_assert!(!expect_full, "put succeeded on a saturated table");
                        prop_assert_eq!(prev, model.insert(k, v));
                    }
                    Err(InsertError::TableFull) => {
                        prop_assert!(expect_full, "spurious TableFull");
                        prop_assert!(sut.get(&k).is_none());
                    }
                }
            }
            OpI::Remove(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.remove(&k), model.remove(&k));
                prop_assert!(sut.get(&k).is_none());
            }
            OpI::Get(i) => {
                let k = key_from(&pool, i);
                prop_assert_eq!(sut.get(&k), model.get(&k));
            }
            OpI::Contains(s) => {
                let has_model = model.keys().any(|k| k.0 == s);
                prop_assert_eq!(sut.contains_key(s.as_str()), has_model);
            }
            OpI::Mutate(i, d) => {
                let k = key_from(&pool, i);
                match (sut.get_mut(&k), model.get_mut(&k)) {
                    (Some(sv), Some(mv)) => {
                        *sv = sv.saturating_add(d);
                        *mv = mv.saturating_add(d);
                    }
                    (None, None) => {}
                    _ => prop_assert!(false, "get_mut presence must match model"),
                }
            }
            OpI::Keys => {
                let keys = sut.keys();
                let set: BTreeSet<Key> = keys.iter().cloned().collect();
                prop_assert_eq!(set.len(), keys.len(), "keys() yielded a duplicate");
                let expected: BTreeSet<Key> = model.keys().cloned().collect();
                prop_assert_eq!(set, expected);
            }
        }

        // Post-conditions after each op.
        prop_assert_eq!(sut.len(), model.len());
        prop_assert_eq!(sut.is_empty(), model.is_empty());
        prop_assert!(sut.len() <= capacity);
    }
    Ok(())
}

// Property: State-machine equivalence against std::collections::HashMap
// across random op sequences at capacities 1..=8.
// Invariants exercised:
// - Saturation parity: `TableFull` exactly when the model is at capacity
//   and the key is absent; the table is unchanged on failure.
// - Removed keys stay removed (tombstones never resurrect a key).
// - `keys` yields each live key exactly once (overwrites never duplicate,
//   even across tombstones).
// - `get`/`remove`/`len` parity with the model after every op.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((capacity, pool, ops) in arb_scenario()) {
        let sut: ProbingHashMap<Key, i32> = ProbingHashMap::with_capacity(capacity);
        run_scenario(sut, capacity, pool, ops)?;
    }
}

// Collision variant using a constant hasher so every key probes from slot
// zero. This maximizes displacement, tombstone crossings, and wrap-around.
#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl std::hash::BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine_with_collisions((capacity, pool, ops) in arb_scenario()) {
        let sut: ProbingHashMap<Key, i32, ConstBuildHasher> =
            ProbingHashMap::with_capacity_and_hasher(capacity, ConstBuildHasher);
        run_scenario(sut, capacity, pool, ops)?;
    }
}
