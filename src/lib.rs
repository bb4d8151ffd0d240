//! # rbmap
//!
//! An ordered map for Rust backed by an arena-allocated red-black tree.
//!
//! ## Overview
//!
//! This library provides [`TreeMap`](ordered::TreeMap), a mutable key-value
//! map that keeps its entries sorted under a total-order comparator while
//! guaranteeing logarithmic lookup, insertion and removal:
//!
//! - **Red-black balancing**: the classic coloring discipline bounds the
//!   tree height to O(log N) across arbitrary insert/remove sequences.
//! - **Arena storage**: nodes live in one flat `Vec` and reference each
//!   other by index, so the parent/child pointer cycle needs no reference
//!   counting and no `unsafe`.
//! - **Injected ordering**: keys are compared through a
//!   [`Comparator`](ordered::Comparator) bound at construction, defaulting
//!   to the natural [`Ord`] order.
//! - **Abstract contract**: the public operation set is also expressed as
//!   the [`OrderedMap`](ordered::OrderedMap) trait, so alternative backing
//!   structures can satisfy the same interface.
//!
//! ## Example
//!
//! ```rust
//! use rbmap::ordered::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert(3, "three");
//! map.insert(1, "one");
//! map.insert(2, "two");
//!
//! assert_eq!(map.get(&2), Some(&"two"));
//! assert_eq!(map.remove(&1), Some("one"));
//! assert_eq!(map.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rbmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::ordered::*;
}

pub mod ordered;
