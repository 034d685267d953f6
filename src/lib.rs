//! # Array Collections
//!
//! Flat, binary-searched `key → value` maps and growable primitive lists that
//! keep everything in contiguous parallel arrays: no per-entry nodes, no
//! buckets, no linked structure.
//!
//! This crate provides [`ArrayMap`], [`HashArrayMap`], and [`ArrayList`].
//! They are deliberate trades against `HashMap`/`BTreeMap`/`Vec` for the
//! small-data regime (roughly under 100 entries) where compact storage and
//! cache-friendly scans beat asymptotics.
//!
//! ## Key Features
//!
//! * **Parallel flat storage:** keys and values live in separate contiguous
//!   buffers correlated by index; a map entry costs exactly one key slot and
//!   one value slot.
//! * **Binary-searched keys:** map key arrays stay sorted ascending, so every
//!   lookup is O(log n) with no hashing of primitive keys.
//! * **Family growth curves:** maps grow by doubling (tiny maps jump to 8
//!   slots), lists grow by 1.5×; neither ever shrinks, and `clear` keeps the
//!   buffers for reuse.
//! * **Two removal modes:** lists offer an order-preserving `remove` and an
//!   O(1) `fast_remove` that swaps the last element into the hole.
//! * **Ascending-key append:** maps take an `append` fast path for
//!   monotonically increasing keys that skips the search and shift entirely.
//!
//! ## Examples
//!
//! ### ArrayMap
//!
//! ```rust
//! use array_collections::ArrayMap;
//!
//! let mut population: ArrayMap<i32, i64> = ArrayMap::new();
//! population.insert(81, 1_400_000);
//! population.insert(33, 2_100_000);
//! population.insert(49, 600_000);
//!
//! // Keys are kept sorted; lookups binary-search.
//! assert_eq!(population.keys(), &[33, 49, 81]);
//! assert_eq!(population.get_or(49, 0), 600_000);
//! assert_eq!(population.get_or(50, 0), 0);
//! ```
//!
//! ### ArrayList
//!
//! ```rust
//! use array_collections::ArrayList;
//!
//! let mut ids: ArrayList<i32> = ArrayList::new();
//! ids.extend_from_slice(&[10, 20, 30, 40]);
//!
//! // Order-preserving removal shifts the tail...
//! ids.remove(1);
//! assert_eq!(ids.as_slice(), &[10, 30, 40]);
//!
//! // ...while fast_remove trades order for O(1).
//! ids.fast_remove(0);
//! assert_eq!(ids.as_slice(), &[40, 30]);
//! ```
//!
//! ### HashArrayMap
//!
//! ```rust
//! use array_collections::HashArrayMap;
//!
//! let mut prices: HashArrayMap<String, f64> = HashArrayMap::new();
//! prices.insert("apple".to_string(), 1.25);
//! prices.insert("pear".to_string(), 2.50);
//!
//! assert_eq!(prices.get_or(&"pear".to_string(), 0.0), 2.50);
//! ```

// --- Module Declarations ---

mod grow;

pub mod array_list;
pub mod array_map;
pub mod hash_array_map;

// --- Re-exports ---

#[cfg(feature = "lists")]
pub use array_list::ArrayList;
#[cfg(feature = "maps")]
pub use array_map::ArrayMap;
#[cfg(feature = "maps")]
pub use hash_array_map::HashArrayMap;
