//! Sorted set containers over contiguous storage.
//!
//! This module provides [`OrderedSet`], a duplicate-free collection that
//! keeps its elements in ascending order at all times:
//!
//! - Binary-search based `contains`, `insert`, and `remove` (O(log n) search)
//! - O(1) length and indexed reads in sorted order
//! - An order-preserving [`filter`](OrderedSet::filter) producing a new,
//!   independent set
//! - Linear-time set algebra (`union`, `intersection`, `difference`) over the
//!   sorted backing slices
//!
//! # Storage
//!
//! Elements live in a `SmallVec` that stores up to 8 elements inline and
//! spills to the heap beyond that, so small sets allocate nothing while large
//! sets stay contiguous and cache-friendly.
//!
//! # Examples
//!
//! ```rust
//! use ordset::set::OrderedSet;
//!
//! let set: OrderedSet<i32> = [5, 1, 3, 3].into_iter().collect();
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//! assert!(set.contains(&1));
//! assert!(!set.contains(&2));
//!
//! let large = set.filter(|&x| x > 2);
//! assert_eq!(large.as_slice(), &[3, 5]);
//! ```

mod ordered;

pub use ordered::IndexOutOfRange;
pub use ordered::OrderedSet;
pub use ordered::OrderedSetIntoIterator;
pub use ordered::OrderedSetIterator;
