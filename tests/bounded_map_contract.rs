// Contract test suite: every case is written once against the BoundedMap
// trait and run against both tables, since the two implementations must be
// observationally identical for any workload that fits in the probing
// table's capacity.
//
// The core invariants exercised:
// - Round-trip: get returns the last value put for a key.
// - Idempotent overwrite: repeated put rewrites in place, len unchanged.
// - Removal: after remove(k), get(k) misses, in any table state.
// - Absent-key safety: get/remove of a never-inserted key is a no-op.
// - Enumeration: keys() is the exact live key set, each key once.
use bounded_hashmap::{BoundedMap, ChainedHashMap, ProbingHashMap};
use std::collections::BTreeSet;

const MANY: i32 = 500;

fn chained() -> ChainedHashMap<String, i32> {
    ChainedHashMap::new()
}

// Sized so the 500-key workloads below always fit.
fn probing() -> ProbingHashMap<String, i32> {
    ProbingHashMap::with_capacity(MANY as usize)
}

// Test: round-trip for a handful of keys and for 500 sequential keys.
// Verifies: get returns the last value written for each key.
fn round_trip(mut m: impl BoundedMap<String, i32>) {
    for i in 0..MANY {
        m.put(i.to_string(), i).unwrap();
    }
    assert_eq!(m.len(), MANY as usize);
    for i in 0..MANY {
        assert_eq!(m.get(&i.to_string()), Some(&i));
    }
}

#[test]
fn round_trip_chained() {
    round_trip(chained());
}

#[test]
fn round_trip_probing() {
    round_trip(probing());
}

// Test: overwriting every key.
// Verifies: the new value is observed and the key count is unchanged.
fn overwrite_all(mut m: impl BoundedMap<String, i32>) {
    for i in 0..MANY {
        m.put(i.to_string(), i).unwrap();
    }
    for i in 0..MANY {
        assert_eq!(m.put(i.to_string(), i + 1), Ok(Some(i)));
        assert_eq!(m.get(&i.to_string()), Some(&(i + 1)));
    }
    assert_eq!(m.len(), MANY as usize);
}

#[test]
fn overwrite_all_chained() {
    overwrite_all(chained());
}

#[test]
fn overwrite_all_probing() {
    overwrite_all(probing());
}

// Test: removing every key one by one.
// Verifies: each removed key misses immediately; the rest stay reachable.
fn remove_all(mut m: impl BoundedMap<String, i32>) {
    for i in 0..MANY {
        m.put(i.to_string(), i).unwrap();
    }
    for i in 0..MANY {
        assert_eq!(m.remove(&i.to_string()), Some(i));
        assert_eq!(m.get(&i.to_string()), None);
    }
    assert!(m.is_empty());
}

#[test]
fn remove_all_chained() {
    remove_all(chained());
}

#[test]
fn remove_all_probing() {
    remove_all(probing());
}

// Test: get/remove on keys never inserted, on empty and non-empty tables.
// Verifies: misses are ordinary outcomes and mutate nothing.
fn absent_key_safety(mut m: impl BoundedMap<String, i32>) {
    assert_eq!(m.get("missing"), None);
    assert_eq!(m.remove("missing"), None);
    assert!(m.is_empty());

    m.put("one".to_string(), 1).unwrap();
    assert_eq!(m.get("two"), None);
    assert_eq!(m.get(""), None);
    assert_eq!(m.get(" "), None);
    assert_eq!(m.remove("two"), None);
    assert_eq!(m.len(), 1);
    assert_eq!(m.get("one"), Some(&1));
}

#[test]
fn absent_key_safety_chained() {
    absent_key_safety(chained());
}

#[test]
fn absent_key_safety_probing() {
    absent_key_safety(probing());
}

// Test: key enumeration after a mix of inserts and removals.
// Verifies: keys() equals the live key set with no duplicates, in any
// enumeration order.
fn enumeration_exact(mut m: impl BoundedMap<String, i32>) {
    assert!(m.keys().is_empty());
    for i in 0..MANY {
        m.put(i.to_string(), i).unwrap();
    }
    for i in (0..MANY).step_by(3) {
        m.remove(&i.to_string());
    }

    let keys = m.keys();
    let set: BTreeSet<String> = keys.iter().cloned().collect();
    assert_eq!(set.len(), keys.len(), "keys() yielded a duplicate");
    let expected: BTreeSet<String> = (0..MANY).filter(|i| i % 3 != 0).map(|i| i.to_string()).collect();
    assert_eq!(set, expected);
}

#[test]
fn enumeration_exact_chained() {
    enumeration_exact(chained());
}

#[test]
fn enumeration_exact_probing() {
    enumeration_exact(probing());
}

// Test: churn — insert 500 keys, remove every even key, reinsert them.
// Verifies: the final state equals the state reached by inserting all 500
// keys directly (order-independent equality on the key/value set). For the
// probing table this drags the probe paths across hundreds of tombstones.
fn churn_equals_direct(mut churned: impl BoundedMap<String, i32>, mut direct: impl BoundedMap<String, i32>) {
    for i in 0..MANY {
        churned.put(i.to_string(), i).unwrap();
    }
    for i in (0..MANY).step_by(2) {
        assert_eq!(churned.remove(&i.to_string()), Some(i));
    }
    for i in (0..MANY).step_by(2) {
        churned.put(i.to_string(), i).unwrap();
    }

    for i in 0..MANY {
        direct.put(i.to_string(), i).unwrap();
    }

    assert_eq!(churned.len(), direct.len());
    let churned_keys: BTreeSet<String> = churned.keys().into_iter().collect();
    let direct_keys: BTreeSet<String> = direct.keys().into_iter().collect();
    assert_eq!(churned_keys, direct_keys);
    for k in &direct_keys {
        assert_eq!(churned.get(k.as_str()), direct.get(k.as_str()));
    }
}

#[test]
fn churn_equals_direct_chained() {
    churn_equals_direct(chained(), chained());
}

#[test]
fn churn_equals_direct_probing() {
    churn_equals_direct(probing(), probing());
}

// Test: capacity accessors across both tables.
// Verifies: capacity is the constructed value and never moves; default is
// DEFAULT_CAPACITY.
#[test]
fn capacity_is_fixed() {
    let chained: ChainedHashMap<String, i32> = ChainedHashMap::with_capacity(7);
    assert_eq!(BoundedMap::capacity(&chained), 7);

    let mut probing: ProbingHashMap<String, i32> = ProbingHashMap::with_capacity(7);
    for i in 0..7 {
        probing.put(i.to_string(), i).unwrap();
    }
    assert_eq!(BoundedMap::capacity(&probing), 7);

    assert_eq!(
        BoundedMap::capacity(&ChainedHashMap::<String, i32>::new()),
        bounded_hashmap::DEFAULT_CAPACITY
    );
    assert_eq!(
        BoundedMap::capacity(&ProbingHashMap::<String, i32>::new()),
        bounded_hashmap::DEFAULT_CAPACITY
    );
}
