//! The abstract ordered-map contract.
//!
//! [`OrderedMap`] captures the operation set a key-value map exposes,
//! independent of the backing structure. [`TreeMap`] is the red-black-tree
//! implementation of this contract; alternative structures (skip lists,
//! B-trees, sorted vectors) could satisfy the same interface.
//!
//! [`TreeMap`]: crate::ordered::TreeMap

/// A mutable key-value map.
///
/// The trait is object safe, so heterogeneous backing structures can be
/// driven through `&mut dyn OrderedMap<K, V>`.
///
/// Absence is reported explicitly: [`get`](Self::get) and
/// [`remove`](Self::remove) return `None` for a key the map does not hold,
/// never an unrelated stored value.
///
/// # Examples
///
/// ```rust
/// use rbmap::ordered::{OrderedMap, TreeMap};
///
/// fn count_up(map: &mut dyn OrderedMap<u32, u32>, up_to: u32) {
///     for key in 0..up_to {
///         map.insert(key, key * key);
///     }
/// }
///
/// let mut map = TreeMap::new();
/// count_up(&mut map, 4);
/// assert_eq!(map.len(), 4);
/// assert_eq!(map.get(&3), Some(&9));
/// ```
pub trait OrderedMap<K, V> {
    /// Returns `true` if the map contains the key.
    fn contains_key(&self, key: &K) -> bool;

    /// Returns a reference to the value stored under the key, or `None`
    /// if the key is absent.
    fn get(&self, key: &K) -> Option<&V>;

    /// Inserts a key-value pair, returning the previous value if the key
    /// was already present.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Removes the key, returning its value, or `None` if the key is
    /// absent (in which case the map is unchanged).
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Returns the number of entries in the map.
    fn len(&self) -> usize;

    /// Returns `true` if the map contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every entry. Safe to call on an already-empty map.
    fn clear(&mut self);
}
