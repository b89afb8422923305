//! bounded-hashmap: fixed-capacity hash maps implemented twice, once with
//! separately chained buckets and once with linear probing and tombstone
//! deletion.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: two independent collision-resolution strategies behind one
//!   contract, each small enough to reason about slot-by-slot.
//! - Components:
//!   - ChainedHashMap<K, V, S>: fixed array of bucket heads; each bucket
//!     owns a singly-linked chain of nodes kept in a slotmap arena and
//!     linked by arena key. Collisions prepend; chains are unbounded, so
//!     insertion never fails.
//!   - ProbingHashMap<K, V, S>: fixed array of slots, each
//!     `Empty | Tombstone | Occupied`. Collisions advance one slot at a
//!     time, wrapping; removal writes a tombstone so probes for keys
//!     inserted past the vacated slot keep going. Saturation is an
//!     explicit `InsertError::TableFull`, never a silent drop.
//!   - BoundedMap<K, V>: the shared put/get/remove/keys contract both
//!     satisfy identically.
//!
//! Constraints
//! - Capacity is fixed at construction (default 100) and never grows;
//!   there is no rehashing.
//! - Single-threaded: operations read-then-write without atomicity, and
//!   callers hold `&mut self` for mutation.
//! - Every operation is bounded by chain length or `capacity` and always
//!   terminates; the probe loop visits at most `capacity` slots even on a
//!   table saturated with tombstones.
//! - Hashing is delegated to `S: BuildHasher` (default `RandomState`).
//!   Equal keys must hash equally; distribution quality only affects
//!   performance for chaining, but can drive the probing table to
//!   clustering and early saturation.
//!
//! Misses are ordinary outcomes: `get` returns `Option`, `remove` of an
//! absent key is a no-op. The one real failure mode, inserting a new key
//! into a probing table whose every slot holds a distinct other key, is
//! surfaced as `InsertError::TableFull` with the table left unchanged.

mod chained_hash_map;
mod chained_hash_map_proptest;
mod map;
mod probing_hash_map;
mod probing_hash_map_proptest;

// Public surface
pub use chained_hash_map::{ChainedHashMap, Iter as ChainedIter};
pub use map::{BoundedMap, InsertError, DEFAULT_CAPACITY};
pub use probing_hash_map::{Iter as ProbingIter, ProbingHashMap};
