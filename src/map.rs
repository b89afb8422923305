//! Shared mapping contract and hash-to-index utilities.

use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;

/// Table size used by the `new()` constructors.
pub const DEFAULT_CAPACITY: usize = 100;

/// Error returned by [`BoundedMap::put`] when no slot can be found for a new
/// key. Only the probing table can produce this; chained buckets grow
/// without bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertError {
    TableFull,
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsertError::TableFull => write!(f, "table is full"),
        }
    }
}

impl std::error::Error for InsertError {}

/// The uniform contract both tables satisfy: a finite set of key/value
/// pairs with unique keys over a backing array whose size is fixed at
/// construction.
///
/// Misses are ordinary outcomes (`None`), never errors. The only failure is
/// [`InsertError::TableFull`] from a saturated probing table; a failed `put`
/// leaves the table unchanged.
pub trait BoundedMap<K, V>
where
    K: Eq + Hash,
{
    /// Insert `key`/`value`, or overwrite the value of an existing equal
    /// key in place. Returns the previous value on overwrite.
    fn put(&mut self, key: K, value: V) -> Result<Option<V>, InsertError>;

    /// Look up the value for a key.
    fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Remove a key if present, returning its value. Absent keys are a
    /// no-op.
    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq;

    /// Every present key, each exactly once, in unspecified order.
    fn keys(&self) -> Vec<K>
    where
        K: Clone;

    fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get(key).is_some()
    }

    /// Number of live entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Backing-array size fixed at construction.
    fn capacity(&self) -> usize;
}

/// Map a key hash onto a backing-array index. `u64` hashes are already
/// non-negative, so this is a plain modulo; distribution quality is the
/// hasher's problem, only sign and range are normalized here.
#[inline]
pub(crate) fn slot_index(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}
