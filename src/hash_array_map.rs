#![cfg(feature = "maps")]
//! Sorted array map keyed by the hash of an arbitrary key object.
//!
//! [`HashArrayMap`] extends the parallel-array layout of
//! [`ArrayMap`](crate::ArrayMap) to non-primitive keys by adding a third
//! buffer: the FNV hash of each key, kept in ascending order and used as the
//! sort/search key. The key objects themselves are never compared.

use core::fmt::{self, Debug};
use core::hash::{Hash, Hasher};
use core::mem;

use fnv::FnvHasher;

use crate::grow;

/// A `key → value` map for arbitrary hashable keys, backed by three parallel
/// flat arrays: sorted key hashes, the key objects, and the values.
///
/// Every lookup hashes the key with FNV (fast on small keys) and
/// binary-searches the hash array; the matching index addresses all three
/// buffers.
///
/// # Known limitation
/// Hash collisions are **not** resolved. Two distinct keys that hash equal
/// are indistinguishable to every operation: the first match in hash order
/// wins, and an insert under a colliding key overwrites the resident entry's
/// value. There is no secondary equality check, and adding one would change
/// observable behavior for colliding keys.
///
/// # Generic parameters
/// | Parameter | Meaning |
/// |-----------|---------|
/// | `K` | Key type; must implement `Hash` (equality is never consulted) |
/// | `V` | Value type |
///
/// # Examples
///
/// ```rust
/// use array_collections::HashArrayMap;
///
/// let mut weights: HashArrayMap<String, f64> = HashArrayMap::new();
/// weights.insert("carbon".to_string(), 12.011);
/// weights.insert("oxygen".to_string(), 15.999);
///
/// assert_eq!(weights.get_or(&"carbon".to_string(), 0.0), 12.011);
/// assert_eq!(weights.len(), 2);
/// ```
#[derive(Clone)]
pub struct HashArrayMap<K, V> {
    hashes: Vec<u64>,
    keys: Vec<K>,
    values: Vec<V>,
}

fn hash_key<K: Hash>(key: &K) -> u64 {
    let mut hasher = FnvHasher::default();
    key.hash(&mut hasher);
    hasher.finish()
}

impl<K: Hash, V> HashArrayMap<K, V> {
    /// Creates an empty map with the family's default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(10)
    }

    /// Creates an empty map holding room for `capacity` mappings; 0 makes no
    /// allocation.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hashes: Vec::with_capacity(capacity),
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of mappings currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.hashes.len()
    }

    /// Returns `true` if the map holds no mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.hashes.is_empty()
    }

    /// Returns the current capacity of the backing buffers.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.hashes.capacity()
    }

    /// Removes all mappings. The backing buffers are kept for reuse.
    pub fn clear(&mut self) {
        self.hashes.clear();
        self.keys.clear();
        self.values.clear();
    }

    /// Resets the map to its empty no-allocation representation, releasing
    /// all three buffers. Unlike [`clear`](HashArrayMap::clear), this gives
    /// the memory back.
    pub fn free(&mut self) {
        self.hashes = Vec::new();
        self.keys = Vec::new();
        self.values = Vec::new();
    }

    /// Returns a reference to the value whose key hashes like `key`, or
    /// `None`. O(log n).
    pub fn get(&self, key: &K) -> Option<&V> {
        match grow::binary_search(&self.hashes, &hash_key(key)) {
            Ok(index) => Some(&self.values[index]),
            Err(_) => None,
        }
    }

    /// Returns the value whose key hashes like `key`, or `default_value`.
    pub fn get_or(&self, key: &K, default_value: V) -> V
    where
        V: Copy,
    {
        match grow::binary_search(&self.hashes, &hash_key(key)) {
            Ok(index) => self.values[index],
            Err(_) => default_value,
        }
    }

    /// Maps `key` to `value`.
    ///
    /// When the hash is already present only the value slot is rewritten:
    /// the resident key object stays in place, the given `key` is dropped,
    /// and the old value is returned. Otherwise all three buffers get a
    /// shift-insert at the hash's insertion point.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&key);
        match grow::binary_search(&self.hashes, &hash) {
            Ok(index) => Some(mem::replace(&mut self.values[index], value)),
            Err(index) => {
                grow::insert(&mut self.hashes, index, hash);
                grow::insert(&mut self.keys, index, key);
                grow::insert(&mut self.values, index, value);
                None
            }
        }
    }

    /// Maps `key` to `value`, optimized for keys whose hashes arrive in
    /// ascending order. Falls back to [`insert`](HashArrayMap::insert)
    /// whenever the fast path does not apply.
    pub fn append(&mut self, key: K, value: V) -> Option<V> {
        let hash = hash_key(&key);
        if let Some(&last) = self.hashes.last() {
            if hash <= last {
                return self.insert(key, value);
            }
        }
        grow::append(&mut self.hashes, hash);
        grow::append(&mut self.keys, key);
        grow::append(&mut self.values, value);
        None
    }

    /// Removes the mapping whose key hashes like `key`, returning its value.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match grow::binary_search(&self.hashes, &hash_key(key)) {
            Ok(index) => Some(self.remove_at(index)),
            Err(_) => None,
        }
    }

    /// Removes the mapping at `index`, shifting everything above it left by
    /// one across all three arrays, and returns the removed value.
    ///
    /// `index` must be in `[0, len)`.
    pub fn remove_at(&mut self, index: usize) -> V {
        self.hashes.remove(index);
        self.keys.remove(index);
        self.values.remove(index)
    }

    /// Returns the key object at `index` in hash order.
    ///
    /// `index` must be in `[0, len)`.
    #[inline]
    pub fn key_at(&self, index: usize) -> &K {
        &self.keys[index]
    }

    /// Returns the value at `index`.
    ///
    /// `index` must be in `[0, len)`.
    #[inline]
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Overwrites the value at `index` without touching the key buffers.
    ///
    /// `index` must be in `[0, len)`.
    #[inline]
    pub fn set_value_at(&mut self, index: usize, value: V) {
        self.values[index] = value;
    }

    /// Returns `true` if some stored key hashes like `key`. O(log n).
    pub fn contains_key(&self, key: &K) -> bool {
        grow::binary_search(&self.hashes, &hash_key(key)).is_ok()
    }

    /// Returns the index [`key_at`] would report for `key`, or `None`.
    ///
    /// [`key_at`]: HashArrayMap::key_at
    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        grow::binary_search(&self.hashes, &hash_key(key)).ok()
    }

    /// Linear scan for the leftmost index whose value equals `value`. Values
    /// only; there is no value-side key lookup.
    pub fn index_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.values.iter().position(|v| v == value)
    }

    /// Returns an iterator over `(&key, &value)` pairs in hash order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.keys.iter().zip(self.values.iter())
    }
}

// ─── Traits ───────────────────────────────────────────────────────────────────

impl<K: Hash, V> Default for HashArrayMap<K, V> {
    /// Creates an empty map with the default capacity of 10.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Debug, V: Debug> Debug for HashArrayMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Hash, V> FromIterator<(K, V)> for HashArrayMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = HashArrayMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Hash, V> Extend<(K, V)> for HashArrayMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
