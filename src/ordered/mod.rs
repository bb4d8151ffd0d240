//! Ordered (comparator-sorted) associative containers.
//!
//! This module provides the ordered map engine and the pieces it is built
//! from:
//!
//! - [`TreeMap`]: mutable ordered map backed by an arena-allocated
//!   red-black tree
//! - [`OrderedMap`]: the abstract map contract `TreeMap` satisfies
//! - [`Comparator`] and [`Natural`]: the injected ordering capability
//!
//! # Ordering
//!
//! Every `TreeMap` carries a comparator fixed at construction. The default,
//! [`Natural`], delegates to the key type's [`Ord`] implementation; any
//! closure of shape `Fn(&K, &K) -> Ordering` can be injected instead:
//!
//! ```rust
//! use rbmap::ordered::TreeMap;
//!
//! let mut descending = TreeMap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! descending.insert(1, "one");
//! descending.insert(2, "two");
//!
//! assert_eq!(descending.get(&1), Some(&"one"));
//! assert_eq!(descending.get(&2), Some(&"two"));
//! ```
//!
//! # Example
//!
//! ```rust
//! use rbmap::ordered::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert("b", 2);
//! map.insert("a", 1);
//!
//! assert!(map.contains_key(&"a"));
//! assert_eq!(map.insert("a", 10), Some(1));
//! assert_eq!(map.remove(&"b"), Some(2));
//! assert_eq!(map.len(), 1);
//! ```

mod compare;
mod map;
mod treemap;

pub use compare::Comparator;
pub use compare::Natural;
pub use map::OrderedMap;
pub use treemap::TreeMap;
