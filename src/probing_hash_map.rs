//! ProbingHashMap: flat slot array, linear probing, tombstone deletion.

use crate::map::{slot_index, BoundedMap, InsertError, DEFAULT_CAPACITY};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use std::collections::hash_map::RandomState;

/// Slot state. `Tombstone` marks a vacated slot so probes for keys
/// inserted past it keep going; only `Empty` ends a probe unconditionally.
#[derive(Debug)]
enum Slot<K, V> {
    Empty,
    Tombstone,
    Occupied { key: K, value: V },
}

/// A fixed-capacity map resolving collisions by linear probing.
///
/// `capacity` bounds the number of entries: once every slot is occupied by
/// a distinct key, `put` of a further new key fails with
/// [`InsertError::TableFull`]. Removal writes a tombstone rather than
/// emptying the slot; tombstones never revert to empty but are reclaimed
/// by later inserts.
///
/// For any present key, the probe sequence starting at
/// `hash(key) % capacity` reaches that key's slot before reaching an empty
/// slot. Every mutation here preserves that reachability invariant.
pub struct ProbingHashMap<K, V, S = RandomState> {
    hasher: S,
    slots: Vec<Slot<K, V>>,
    len: usize, // occupied slots only, tombstones excluded
}

impl<K, V> ProbingHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Create a map with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a map with `capacity` slots.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for ProbingHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ProbingHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create a map with [`DEFAULT_CAPACITY`] slots and the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Create a map with `capacity` slots and the given hasher.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        Self {
            hasher,
            slots: std::iter::repeat_with(|| Slot::Empty).take(capacity).collect(),
            len: 0,
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Probe for `q` starting at its home slot, advancing one slot at a
    /// time and wrapping, for at most `capacity` steps. Stops at an empty
    /// slot, at an occupied slot holding an equal key, or, when
    /// `stop_at_tombstone` is set, at the first tombstone (insert-oriented
    /// probing may reclaim it; lookup-oriented probing must pass it).
    /// Returns `None` only when all `capacity` slots were visited without
    /// stopping.
    fn probe<Q>(&self, q: &Q, stop_at_tombstone: bool) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let capacity = self.slots.len();
        let mut index = slot_index(self.make_hash(q), capacity);
        for _ in 0..capacity {
            match &self.slots[index] {
                Slot::Empty => return Some(index),
                Slot::Tombstone if stop_at_tombstone => return Some(index),
                Slot::Tombstone => {}
                Slot::Occupied { key, .. } if key.borrow() == q => return Some(index),
                Slot::Occupied { .. } => {}
            }
            index = (index + 1) % capacity;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert or overwrite. Overwrite is resolved with a lookup-oriented
    /// probe first: an insert-oriented probe alone could claim a tombstone
    /// ahead of an existing occurrence and duplicate the key. Only when the
    /// key is absent is the first free or tombstoned slot claimed. Fails
    /// with `TableFull` when all slots hold distinct other keys; the table
    /// is left unchanged.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, InsertError> {
        if let Some(index) = self.probe(&key, false) {
            if let Slot::Occupied { value: v, .. } = &mut self.slots[index] {
                return Ok(Some(mem::replace(v, value)));
            }
        }
        match self.probe(&key, true) {
            Some(index) => {
                self.slots[index] = Slot::Occupied { key, value };
                self.len += 1;
                Ok(None)
            }
            None => Err(InsertError::TableFull),
        }
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        // A lookup probe stops at either the match or an empty slot.
        match &self.slots[self.probe(key, false)?] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.probe(key, false)?;
        match &mut self.slots[index] {
            Slot::Occupied { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Replace the key's slot with a tombstone. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let index = self.probe(key, false)?;
        match mem::replace(&mut self.slots[index], Slot::Tombstone) {
            Slot::Occupied { value, .. } => {
                self.len -= 1;
                Some(value)
            }
            prev => {
                // Probe stopped on an empty slot: key absent, restore it.
                self.slots[index] = prev;
                None
            }
        }
    }

    /// Every present key exactly once, in slot order; empty and tombstoned
    /// slots are skipped.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.len);
        for slot in &self.slots {
            if let Slot::Occupied { key, .. } = slot {
                out.push(key.clone());
            }
        }
        out
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.slots.iter(),
        }
    }
}

/// Iterator over immutable entries in `ProbingHashMap`, in slot order.
pub struct Iter<'a, K, V> {
    it: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.it.next()? {
                Slot::Occupied { key, value } => return Some((key, value)),
                _ => continue,
            }
        }
    }
}

impl<K, V, S> BoundedMap<K, V> for ProbingHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, InsertError> {
        ProbingHashMap::put(self, key, value)
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        ProbingHashMap::get(self, key)
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        ProbingHashMap::remove(self, key)
    }

    fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        ProbingHashMap::keys(self)
    }

    fn len(&self) -> usize {
        ProbingHashMap::len(self)
    }

    fn capacity(&self) -> usize {
        ProbingHashMap::capacity(self)
    }
}
