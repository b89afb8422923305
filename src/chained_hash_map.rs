//! ChainedHashMap: fixed bucket array, collisions chained per bucket.

use crate::map::{slot_index, BoundedMap, InsertError, DEFAULT_CAPACITY};
use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use core::mem;
use slotmap::{DefaultKey, SlotMap};
use std::collections::hash_map::RandomState;

/// One chain link. Nodes live in the arena and link forward by arena key;
/// a node is reachable from exactly one bucket head or one predecessor.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    next: Option<DefaultKey>,
}

/// A fixed-capacity map resolving collisions by separate chaining.
///
/// `capacity` fixes the number of buckets, never the number of entries:
/// chains grow without bound, so `put` cannot fail. Each key occupies at
/// most one node, in the chain at `hash(key) % capacity`. New keys are
/// prepended to their chain; repeated `put` overwrites the value in place.
pub struct ChainedHashMap<K, V, S = RandomState> {
    hasher: S,
    buckets: Vec<Option<DefaultKey>>,
    nodes: SlotMap<DefaultKey, Node<K, V>>, // chain storage, arena-keyed
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    /// Create a map with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a map with `capacity` buckets.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl<K, V> Default for ChainedHashMap<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Create a map with [`DEFAULT_CAPACITY`] buckets and the given hasher.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Create a map with `capacity` buckets and the given hasher.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        assert!(capacity >= 1, "capacity must be at least 1");
        Self {
            hasher,
            buckets: vec![None; capacity],
            nodes: SlotMap::with_key(),
        }
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    fn bucket_of<Q>(&self, q: &Q) -> usize
    where
        Q: ?Sized + Hash,
    {
        slot_index(self.make_hash(q), self.buckets.len())
    }

    /// Walk the chain at `bucket` for a node whose key equals `q`.
    fn find_in_chain<Q>(&self, bucket: usize, q: &Q) -> Option<DefaultKey>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let mut cur = self.buckets[bucket];
        while let Some(nk) = cur {
            let node = &self.nodes[nk];
            if node.key.borrow() == q {
                return Some(nk);
            }
            cur = node.next;
        }
        None
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Insert or overwrite. An existing equal key keeps its node and gets
    /// its value replaced in place; a new key is prepended to its chain.
    /// Infallible: chains are unbounded, so the `Err` arm never fires.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>, InsertError> {
        let bucket = self.bucket_of(&key);
        if let Some(nk) = self.find_in_chain(bucket, &key) {
            let node = &mut self.nodes[nk];
            return Ok(Some(mem::replace(&mut node.value, value)));
        }
        let head = self.buckets[bucket];
        let nk = self.nodes.insert(Node {
            key,
            value,
            next: head,
        });
        self.buckets[bucket] = Some(nk);
        Ok(None)
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.bucket_of(key);
        self.find_in_chain(bucket, key).map(|nk| &self.nodes[nk].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.bucket_of(key);
        let nk = self.find_in_chain(bucket, key)?;
        Some(&mut self.nodes[nk].value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.bucket_of(key);
        self.find_in_chain(bucket, key).is_some()
    }

    /// Unlink and drop the node holding `key`, rewiring either the bucket
    /// head or the predecessor's link. Absent keys are a no-op.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let bucket = self.bucket_of(key);
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[bucket];
        while let Some(nk) = cur {
            if self.nodes[nk].key.borrow() == key {
                let next = self.nodes[nk].next;
                match prev {
                    None => self.buckets[bucket] = next,
                    Some(pk) => self.nodes[pk].next = next,
                }
                return self.nodes.remove(nk).map(|n| n.value);
            }
            prev = cur;
            cur = self.nodes[nk].next;
        }
        None
    }

    /// Every present key exactly once. Walks bucket order, then chain
    /// order; within a chain that is most-recently-inserted first. An
    /// artifact of head insertion, not a guarantee.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        let mut out = Vec::with_capacity(self.nodes.len());
        for bucket in &self.buckets {
            let mut cur = *bucket;
            while let Some(nk) = cur {
                let node = &self.nodes[nk];
                out.push(node.key.clone());
                cur = node.next;
            }
        }
        out
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            it: self.nodes.iter(),
        }
    }
}

/// Iterator over immutable entries in `ChainedHashMap`, in unspecified
/// order.
pub struct Iter<'a, K, V> {
    it: slotmap::basic::Iter<'a, DefaultKey, Node<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|(_, n)| (&n.key, &n.value))
    }
}

impl<K, V, S> BoundedMap<K, V> for ChainedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, InsertError> {
        ChainedHashMap::put(self, key, value)
    }

    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        ChainedHashMap::get(self, key)
    }

    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        ChainedHashMap::remove(self, key)
    }

    fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        ChainedHashMap::keys(self)
    }

    fn len(&self) -> usize {
        ChainedHashMap::len(self)
    }

    fn capacity(&self) -> usize {
        ChainedHashMap::capacity(self)
    }
}
