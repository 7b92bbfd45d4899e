//! An always-sorted, duplicate-free set over contiguous storage.
//!
//! This module provides [`OrderedSet`], a mutable collection that keeps its
//! elements strictly ascending under their [`Ord`] at all times. Insertion,
//! removal, and membership all locate their target with binary search over
//! the backing slice, so lookups are O(log n) while iteration and indexed
//! reads are plain slice accesses.
//!
//! # Invariant
//!
//! For every pair of adjacent elements `(a, b)` in the backing store,
//! `a.cmp(b) == Ordering::Less`. In particular no two elements compare equal:
//! duplicate detection is derived from the same ordering used for sorting,
//! never from a separate structural equality, so "is a duplicate" and "sorts
//! to the same position" can never diverge.
//!
//! # Time Complexity
//!
//! | Operation    | Cost                 |
//! |--------------|----------------------|
//! | `contains`   | O(log n)             |
//! | `insert`     | O(log n) + O(n) shift|
//! | `remove`     | O(log n) + O(n) shift|
//! | `get` / `at` | O(1)                 |
//! | `len`        | O(1)                 |
//! | `filter`     | O(n)                 |
//! | `union`      | O(n + m)             |
//!
//! # Examples
//!
//! ```rust
//! use ordset::OrderedSet;
//!
//! let mut set = OrderedSet::new();
//! set.insert(5);
//! set.insert(1);
//! set.insert(3);
//! assert_eq!(set.as_slice(), &[1, 3, 5]);
//!
//! // Duplicates are rejected silently
//! assert!(!set.insert(3));
//! assert_eq!(set.len(), 3);
//! ```

use smallvec::SmallVec;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

/// Number of elements stored inline before the backing store spills to the
/// heap.
const INLINE_CAPACITY: usize = 8;

/// The contiguous backing store: inline up to [`INLINE_CAPACITY`] elements,
/// heap-allocated beyond, always kept strictly sorted.
type Backing<T> = SmallVec<[T; INLINE_CAPACITY]>;

/// Message constant for panic when `from_sorted_*` receives invalid input.
const SORTED_INPUT_PANIC_MESSAGE: &str =
    "from_sorted_* requires strictly increasing elements (sorted + deduplicated)";

/// Error returned by [`OrderedSet::at`] when the requested index is not a
/// valid position in the set.
///
/// Carries the offending index and the length of the set at the time of the
/// call; the set itself is left unmodified.
///
/// # Examples
///
/// ```rust
/// use ordset::{IndexOutOfRange, OrderedSet};
///
/// let set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
/// assert_eq!(set.at(5), Err(IndexOutOfRange { index: 5, len: 3 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The length of the set at the time of the failed access.
    pub len: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "index {} out of range for ordered set of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfRange {}

/// A mutable set that keeps its elements sorted and duplicate-free.
///
/// Elements are stored in a single contiguous sequence, strictly ascending
/// under `T`'s [`Ord`]. Up to 8 elements are stored inline without heap
/// allocation; larger sets spill to the heap but stay contiguous.
///
/// Inserting an element that compares equal to one already present is a
/// silent no-op (the `bool` return is the only signal). Removing an absent
/// element is likewise a no-op. Indexed reads observe elements in sorted
/// order.
///
/// # Type Parameters
///
/// * `T` - The element type. Core operations require [`Ord`]; `filter` and
///   the set-algebra operations additionally require [`Clone`].
///
/// # Examples
///
/// ```rust
/// use ordset::OrderedSet;
///
/// let mut names: OrderedSet<&str> = ["Juan", "Pedro", "Ana"].into_iter().collect();
/// assert_eq!(names.as_slice(), &["Ana", "Juan", "Pedro"]);
///
/// names.insert("Carlos");
/// assert_eq!(names.as_slice(), &["Ana", "Carlos", "Juan", "Pedro"]);
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    elements: Backing<T>,
}

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// Does not allocate; up to 8 elements are stored inline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: SmallVec::new(),
        }
    }

    /// Creates a new empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: SmallVec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the sorted elements as a slice.
    ///
    /// The slice is strictly ascending and duplicate-free.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns a reference to the element at `index` in sorted order, or
    /// `None` if `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
    /// assert_eq!(set.get(0), Some(&1));
    /// assert_eq!(set.get(2), Some(&5));
    /// assert_eq!(set.get(3), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns a reference to the element at `index` in sorted order, or an
    /// [`IndexOutOfRange`] error if `index >= len()`.
    ///
    /// The check happens before any state is read; on failure the set is
    /// unmodified and unobserved.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfRange`] carrying the requested index and the
    /// current length when `index` is not a valid position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
    /// assert_eq!(set.at(1), Ok(&3));
    /// assert!(set.at(3).is_err());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.elements.get(index).ok_or(IndexOutOfRange {
            index,
            len: self.elements.len(),
        })
    }

    /// Returns a reference to the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns a reference to the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes all elements from the set, keeping the allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [2, 3, 1].into_iter().collect();
    /// let collected: Vec<&i32> = set.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        OrderedSetIterator {
            inner: self.elements.iter(),
        }
    }

    /// Retains only the elements for which the predicate returns `true`,
    /// in place.
    ///
    /// Elements are visited in ascending order. Removing elements never
    /// reorders the survivors, so the sorted-unique invariant is preserved
    /// without re-running insertion logic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = (1..=6).collect();
    /// set.retain(|&x| x % 2 == 0);
    /// assert_eq!(set.as_slice(), &[2, 4, 6]);
    /// ```
    pub fn retain<P>(&mut self, mut predicate: P)
    where
        P: FnMut(&T) -> bool,
    {
        self.elements.retain(|element| predicate(element));
    }
}

impl<T: Ord> OrderedSet<T> {
    /// Returns `true` if the set contains an element comparing equal to
    /// `element`.
    ///
    /// Supports borrowed forms of the element type through [`Borrow`]: with
    /// an `OrderedSet<String>` you can search using `&str` directly.
    ///
    /// # Complexity
    ///
    /// O(log n) binary search.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    ///
    /// let strings: OrderedSet<String> =
    ///     ["hello".to_string(), "world".to_string()].into_iter().collect();
    /// assert!(strings.contains("hello")); // no allocation needed
    /// ```
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.elements
            .binary_search_by(|item| item.borrow().cmp(element))
            .is_ok()
    }

    /// Returns the position of the element comparing equal to `element`, or
    /// `None` if the set contains no such element.
    #[inline]
    #[must_use]
    pub fn index_of<Q>(&self, element: &Q) -> Option<usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.elements
            .binary_search_by(|item| item.borrow().cmp(element))
            .ok()
    }

    /// Inserts `element`, keeping the set sorted and duplicate-free.
    ///
    /// Binary search locates the insertion point: the first index whose
    /// element is strictly greater than `element` (or the end if none is).
    /// If an element comparing equal already exists, the set is untouched
    /// (no replacement, no error) and `false` is returned.
    ///
    /// Returns `true` when the element was inserted; the length then grew by
    /// exactly one.
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set = OrderedSet::new();
    /// assert!(set.insert(5));
    /// assert!(set.insert(1));
    /// assert!(!set.insert(5)); // duplicate, silently rejected
    /// assert_eq!(set.as_slice(), &[1, 5]);
    /// ```
    pub fn insert(&mut self, element: T) -> bool {
        match self.elements.binary_search(&element) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, element);
                true
            }
        }
    }

    /// Removes the element comparing equal to `element`, if present.
    ///
    /// Returns `true` when an element was removed; the length then shrank by
    /// exactly one. Removing an absent element is a silent no-op returning
    /// `false`.
    ///
    /// Supports borrowed forms of the element type through [`Borrow`].
    ///
    /// # Complexity
    ///
    /// O(log n) search plus O(n) shift.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let mut set: OrderedSet<i32> = [1, 2, 3].into_iter().collect();
    /// assert!(set.remove(&2));
    /// assert!(!set.remove(&100)); // absent, silently ignored
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn remove<Q>(&mut self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self
            .elements
            .binary_search_by(|item| item.borrow().cmp(element))
        {
            Ok(position) => {
                self.elements.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Removes and returns the smallest element, or `None` if empty.
    pub fn pop_first(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.elements.remove(0))
        }
    }

    /// Removes and returns the largest element, or `None` if empty.
    #[inline]
    pub fn pop_last(&mut self) -> Option<T> {
        self.elements.pop()
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Complexity
    ///
    /// O(n log m).
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.len() <= other.len() && self.iter().all(|element| other.contains(element))
    }

    /// Returns `true` if `self` and `other` share no element.
    ///
    /// Walks both sorted backing slices with two cursors.
    ///
    /// # Complexity
    ///
    /// O(n + m).
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let left = self.as_slice();
        let right = other.as_slice();
        let mut left_index = 0;
        let mut right_index = 0;

        while left_index < left.len() && right_index < right.len() {
            match left[left_index].cmp(&right[right_index]) {
                Ordering::Less => left_index += 1,
                Ordering::Greater => right_index += 1,
                Ordering::Equal => return false,
            }
        }
        true
    }

    /// Creates an `OrderedSet` from an iterator of strictly ascending
    /// elements.
    ///
    /// This bypasses the per-element binary search of [`FromIterator`],
    /// making bulk construction O(n).
    ///
    /// # Preconditions
    ///
    /// The iterator must yield elements in strictly ascending order with no
    /// duplicates. Debug builds validate this with `debug_assert!`; release
    /// builds accept invalid input and produce a set with a broken invariant
    /// (a logic error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set = OrderedSet::from_sorted_iter([1, 3, 5, 7, 9]);
    /// assert_eq!(set.len(), 5);
    /// ```
    #[must_use]
    pub fn from_sorted_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let elements: Backing<T> = iter.into_iter().collect();
        debug_assert!(
            is_strictly_sorted(&elements),
            "{SORTED_INPUT_PANIC_MESSAGE}"
        );
        Self { elements }
    }

    /// Creates an `OrderedSet` from a `Vec` of strictly ascending elements,
    /// consuming the vector without copying its elements.
    ///
    /// # Preconditions
    ///
    /// Same as [`from_sorted_iter`](Self::from_sorted_iter): strictly
    /// ascending, no duplicates, validated in debug builds only.
    #[must_use]
    pub fn from_sorted_vec(vec: Vec<T>) -> Self {
        debug_assert!(is_strictly_sorted(&vec), "{SORTED_INPUT_PANIC_MESSAGE}");
        Self {
            elements: SmallVec::from_vec(vec),
        }
    }
}

impl<T: Clone> OrderedSet<T> {
    /// Produces a new, independent set containing the elements for which the
    /// predicate returns `true`, in the same relative order.
    ///
    /// The source is already sorted and duplicate-free, and filtering only
    /// drops elements, so qualifying elements are carried straight into the
    /// new backing store; the insertion/duplicate logic is never re-run.
    /// Mutating either set afterwards has no effect on the other.
    ///
    /// # Complexity
    ///
    /// O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = [5, 1, 3].into_iter().collect();
    /// let filtered = set.filter(|&x| x > 2);
    /// assert_eq!(filtered.as_slice(), &[3, 5]);
    /// assert_eq!(set.len(), 3); // source untouched
    /// ```
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        Self {
            elements: self
                .elements
                .iter()
                .filter(|element| predicate(element))
                .cloned()
                .collect(),
        }
    }

    /// Returns a `Vec` containing clones of all elements in ascending order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.elements.to_vec()
    }
}

impl<T: Clone + Ord> OrderedSet<T> {
    /// Returns the union of `self` and `other` as a new set.
    ///
    /// Merges the two sorted backing slices with two cursors; elements
    /// present in both appear once.
    ///
    /// # Complexity
    ///
    /// O(n + m), with a concatenation fast path when the ranges are
    /// disjoint.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ordset::OrderedSet;
    ///
    /// let left: OrderedSet<i32> = [1, 3, 5].into_iter().collect();
    /// let right: OrderedSet<i32> = [2, 3, 4].into_iter().collect();
    /// assert_eq!(left.union(&right).as_slice(), &[1, 2, 3, 4, 5]);
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        Self {
            elements: merge_slices(self.as_slice(), other.as_slice()),
        }
    }

    /// Returns the intersection of `self` and `other` as a new set.
    ///
    /// # Complexity
    ///
    /// O(n + m), returning empty without per-element work when the ranges
    /// are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return Self::new();
        }
        Self {
            elements: intersection_slices(self.as_slice(), other.as_slice()),
        }
    }

    /// Returns the difference `self - other` as a new set.
    ///
    /// # Complexity
    ///
    /// O(n + m), returning a plain clone of `self` when the ranges are
    /// disjoint.
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        if self.is_empty() || other.is_empty() {
            return self.clone();
        }
        Self {
            elements: difference_slices(self.as_slice(), other.as_slice()),
        }
    }
}

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedSet<T> {
    /// Both sides hold their elements in sorted order, so equality is a
    /// plain element-wise slice comparison.
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for OrderedSet<T> {}

impl<T: Hash> Hash for OrderedSet<T> {
    /// Hashes like the sorted slice of elements, so equal sets hash equally
    /// regardless of insertion history.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: Ord> FromIterator<T> for OrderedSet<T> {
    /// Builds a set by inserting each element in input order.
    ///
    /// Later elements comparing equal to an already-present element are
    /// dropped: the first occurrence wins.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<T: Ord> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: Ord> From<Vec<T>> for OrderedSet<T> {
    /// Equivalent to inserting each vector element in order; later
    /// duplicates are dropped.
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T> Index<usize> for OrderedSet<T> {
    type Output = T;

    /// Returns the element at `index` in sorted order.
    ///
    /// # Panics
    ///
    /// Panics when `index >= len()`, like slice indexing. Use
    /// [`OrderedSet::at`] for a recoverable [`IndexOutOfRange`] error or
    /// [`OrderedSet::get`] for an `Option`.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

/// Iterator over references to the elements of an [`OrderedSet`] in
/// ascending order.
pub struct OrderedSetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> std::iter::FusedIterator for OrderedSetIterator<'_, T> {}

/// Owning iterator over the elements of an [`OrderedSet`] in ascending
/// order.
pub struct OrderedSetIntoIterator<T> {
    inner: smallvec::IntoIter<[T; INLINE_CAPACITY]>,
}

impl<T> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for OrderedSetIntoIterator<T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for OrderedSetIntoIterator<T> {}

impl<T> std::iter::FusedIterator for OrderedSetIntoIterator<T> {}

/// Merges two strictly sorted slices into one strictly sorted backing store.
///
/// Elements present in both slices appear once. When the ranges do not
/// overlap the comparison loop is skipped entirely and the slices are
/// concatenated in range order.
///
/// # Preconditions
///
/// Both `left` and `right` are strictly ascending (sorted, no duplicates).
fn merge_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Backing<T> {
    // Disjoint fast path: no overlap between ranges. `Option` ordering is
    // fine here since both slices are non-empty at every call site.
    if left.last() < right.first() {
        let mut result = Backing::with_capacity(left.len() + right.len());
        result.extend(left.iter().cloned());
        result.extend(right.iter().cloned());
        return result;
    }
    if right.last() < left.first() {
        let mut result = Backing::with_capacity(left.len() + right.len());
        result.extend(right.iter().cloned());
        result.extend(left.iter().cloned());
        return result;
    }

    let mut result = Backing::with_capacity(left.len() + right.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => {
                result.push(right[right_index].clone());
                right_index += 1;
            }
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    // Tail: copy remaining elements in bulk
    if left_index < left.len() {
        result.extend(left[left_index..].iter().cloned());
    }
    if right_index < right.len() {
        result.extend(right[right_index..].iter().cloned());
    }

    result
}

/// Intersects two strictly sorted slices into a strictly sorted backing
/// store, with an empty-result fast path when the ranges are disjoint.
fn intersection_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Backing<T> {
    if left.last() < right.first() || right.last() < left.first() {
        return Backing::new();
    }

    let mut result = Backing::with_capacity(left.len().min(right.len()));
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => left_index += 1,
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                result.push(left[left_index].clone());
                left_index += 1;
                right_index += 1;
            }
        }
    }

    result
}

/// Subtracts `right` from `left` over strictly sorted slices, with a
/// copy-everything fast path when the ranges are disjoint.
fn difference_slices<T: Clone + Ord>(left: &[T], right: &[T]) -> Backing<T> {
    if left.last() < right.first() || right.last() < left.first() {
        return left.iter().cloned().collect();
    }

    let mut result = Backing::with_capacity(left.len());
    let mut left_index = 0;
    let mut right_index = 0;

    while left_index < left.len() && right_index < right.len() {
        match left[left_index].cmp(&right[right_index]) {
            Ordering::Less => {
                result.push(left[left_index].clone());
                left_index += 1;
            }
            Ordering::Greater => right_index += 1,
            Ordering::Equal => {
                left_index += 1;
                right_index += 1;
            }
        }
    }

    // Remaining left elements are all in the difference
    if left_index < left.len() {
        result.extend(left[left_index..].iter().cloned());
    }

    result
}

#[inline]
fn is_strictly_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|window| window[0] < window[1])
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for OrderedSet<T> {
    /// Serializes as a sequence in ascending order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct OrderedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> OrderedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for OrderedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = OrderedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    /// Inserts each element in input order, so unsorted or duplicated input
    /// still deserializes to a valid set (first occurrence wins).
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut set = OrderedSet::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for OrderedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(OrderedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use static_assertions::assert_impl_all;

    assert_impl_all!(OrderedSet<i32>: Send, Sync, Clone);

    /// Representation probe: whether the backing store is still inline.
    fn is_inline(set: &OrderedSet<i32>) -> bool {
        !set.elements.spilled()
    }

    #[rstest]
    fn test_inline_capacity_constant() {
        assert_eq!(INLINE_CAPACITY, 8);
    }

    #[rstest]
    fn test_new_does_not_allocate() {
        let set: OrderedSet<i32> = OrderedSet::new();
        assert!(is_inline(&set));
    }

    #[rstest]
    fn test_stays_inline_up_to_capacity() {
        let set: OrderedSet<i32> = (1..=8).collect();
        assert_eq!(set.len(), 8);
        assert!(is_inline(&set));
    }

    #[rstest]
    fn test_spills_past_inline_capacity() {
        let set: OrderedSet<i32> = (1..=9).collect();
        assert_eq!(set.len(), 9);
        assert!(!is_inline(&set));
        assert_eq!(set.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[rstest]
    fn test_insert_reports_position_tie_break() {
        // The insertion point is the first index whose element is strictly
        // greater; an equal element blocks insertion instead.
        let mut set: OrderedSet<i32> = [10, 30].into_iter().collect();
        set.insert(20);
        assert_eq!(set.index_of(&20), Some(1));
        assert!(!set.insert(20));
        assert_eq!(set.as_slice(), &[10, 20, 30]);
    }

    #[rstest]
    fn test_invariant_holds_after_interleaved_operations() {
        let mut set = OrderedSet::new();
        for value in [5, 1, 9, 1, 7, 3, 9, 2] {
            set.insert(value);
        }
        set.remove(&9);
        set.insert(4);
        assert!(is_strictly_sorted(set.as_slice()));
    }

    #[rstest]
    fn test_index_out_of_range_display() {
        let error = IndexOutOfRange { index: 5, len: 3 };
        assert_eq!(
            error.to_string(),
            "index 5 out of range for ordered set of length 3"
        );
    }

    #[rstest]
    fn test_at_does_not_mutate_on_failure() {
        let set: OrderedSet<i32> = [1, 2].into_iter().collect();
        let before = set.clone();
        assert!(set.at(2).is_err());
        assert_eq!(set, before);
    }

    #[rstest]
    fn test_debug_formats_as_set() {
        let set: OrderedSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(format!("{set:?}"), "{1, 2}");
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly increasing")]
    fn test_from_sorted_iter_unsorted_panics_in_debug() {
        let _ = OrderedSet::from_sorted_iter([3, 1, 2]);
    }

    #[rstest]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "strictly increasing")]
    fn test_from_sorted_vec_duplicate_panics_in_debug() {
        let _ = OrderedSet::from_sorted_vec(vec![1, 2, 2, 3]);
    }

    #[rstest]
    fn test_merge_slices_disjoint_fast_path() {
        let merged = merge_slices(&[4, 5, 6], &[1, 2, 3]);
        assert_eq!(merged.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[rstest]
    fn test_intersection_slices_disjoint_ranges() {
        let result = intersection_slices(&[1, 2], &[5, 6]);
        assert!(result.is_empty());
    }

    #[rstest]
    fn test_difference_slices_overlapping_ranges() {
        let result = difference_slices(&[1, 2, 3, 4, 5], &[3, 4, 5, 6, 7]);
        assert_eq!(result.as_slice(), &[1, 2]);
    }
}
