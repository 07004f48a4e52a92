//! Binary heap ordered by a caller-supplied comparator.
//!
//! Unlike [`std::collections::BinaryHeap`], [`Heap`] takes its ordering from
//! a closure instead of an `Ord` impl, so the same element type can be queued
//! by different keys. The element for which the comparator returns
//! [`Ordering::Less`] comes out first.

use std::cmp::Ordering;

use crate::cost::order;

/// Plain function comparator, the default comparator type of [`Heap`].
pub type Compare<T> = fn(&T, &T) -> Ordering;

/// A binary min-heap under an arbitrary comparator.
///
/// The order between elements that compare equal is unspecified.
pub struct Heap<T, F = Compare<T>> {
    items: Vec<T>,
    compare: F,
}

impl<T: Ord> Heap<T> {
    /// Heap yielding the smallest element first.
    pub fn min() -> Self {
        Self::new(T::cmp)
    }

    /// Heap yielding the largest element first.
    pub fn max() -> Self {
        Self::new(|a: &T, b: &T| b.cmp(a))
    }
}

impl<T> Heap<T> {
    /// Heap yielding the element with the smallest `key` first.
    ///
    /// Keys that cannot be compared (NaN) are treated as equal.
    pub fn min_by_key<K, G>(key: G) -> Heap<T, impl Fn(&T, &T) -> Ordering>
    where
        K: PartialOrd,
        G: Fn(&T) -> K,
    {
        Heap::new(move |a: &T, b: &T| order(&key(a), &key(b)))
    }

    /// Heap yielding the element with the largest `key` first.
    pub fn max_by_key<K, G>(key: G) -> Heap<T, impl Fn(&T, &T) -> Ordering>
    where
        K: PartialOrd,
        G: Fn(&T) -> K,
    {
        Heap::new(move |a: &T, b: &T| order(&key(b), &key(a)))
    }
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `compare`.
    pub fn new(compare: F) -> Self {
        Self {
            items: Vec::new(),
            compare,
        }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(compare: F, capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remove all elements, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The element that [`extract`](Self::extract) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Add an element. O(log n).
    pub fn insert(&mut self, element: T) {
        self.items.push(element);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimal element, or `None` when empty.
    pub fn extract(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let element = self.items.pop();
        self.sift_down(0);
        element
    }

    /// Drain the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.items.len());
        while let Some(element) = self.extract() {
            out.push(element);
        }
        out
    }

    /// Linear membership scan.
    pub fn contains(&self, element: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(element)
    }

    #[inline]
    fn in_order(&self, a: usize, b: usize) -> bool {
        (self.compare)(&self.items[a], &self.items[b]) != Ordering::Greater
    }

    fn sift_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.in_order(parent, child) {
                break;
            }
            self.items.swap(parent, child);
            child = parent;
        }
    }

    fn sift_down(&mut self, mut parent: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * parent + 1;
            let right = left + 1;

            // Earliest of the parent and its two children.
            let mut earliest = parent;
            if left < len && !self.in_order(earliest, left) {
                earliest = left;
            }
            if right < len && !self.in_order(earliest, right) {
                earliest = right;
            }
            if earliest == parent {
                break;
            }
            self.items.swap(parent, earliest);
            parent = earliest;
        }
    }
}

impl<T, F> Extend<T> for Heap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T: std::fmt::Debug, F> std::fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap").field("items", &self.items).finish()
    }
}
