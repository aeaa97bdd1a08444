//! In-memory queue kept sorted by a pluggable comparator.

use std::cmp::Ordering;
use std::fmt;

/// Three-way ordering used to position elements in an [`OrderedQueue`].
///
/// Implementations must be consistent and transitive over the elements they
/// are asked to compare. Ties are left to the implementation's secondary
/// keys; the queue never breaks them itself.
pub trait Comparator<T> {
    /// Compare two elements. `Less` means `a` is dispatched before `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Sorted queue with index-addressable elements.
///
/// Insertion is O(n) and stable: a new element lands after every existing
/// element it compares equal to. Removal by identity goes through
/// [`OrderedQueue::remove_matching`] and never consults the comparator.
pub struct OrderedQueue<T, C> {
    comparator: C,
    items: Vec<T>,
}

impl<T, C> OrderedQueue<T, C>
where
    C: Comparator<T>,
{
    /// Create an empty queue bound to `comparator`.
    pub const fn new(comparator: C) -> Self {
        Self {
            comparator,
            items: Vec::new(),
        }
    }

    /// Insert `item` behind every element ranked before or equal to it and
    /// return the zero-based index it now occupies.
    pub fn insert(&mut self, item: T) -> usize {
        let index = self
            .items
            .iter()
            .take_while(|existing| self.comparator.compare(existing, &item) != Ordering::Greater)
            .count();
        self.items.insert(index, item);
        index
    }

    /// Front element without removing it.
    pub fn peek_front(&self) -> Option<&T> {
        self.items.first()
    }

    /// Remove and return the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items.remove(0))
    }

    /// Element at `index`, or `None` when `index >= len()`.
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Mutable element at `index`.
    ///
    /// Callers that change ordering keys through this handle must call
    /// [`OrderedQueue::resort`] before the next insertion.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Index of the first element accepted by `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Remove every element accepted by `predicate` and return how many
    /// were removed. Relative order of the survivors is preserved.
    pub fn remove_matching<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| !predicate(item));
        before - self.items.len()
    }

    /// Remove and return the element at `index`, shifting later elements
    /// forward. `None` when `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    /// Stable re-sort after ordering keys were mutated in place.
    pub fn resort(&mut self) {
        let comparator = &self.comparator;
        self.items.sort_by(|a, b| comparator.compare(a, b));
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate front to back.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterate front to back with mutable access. See [`OrderedQueue::at_mut`].
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// True when every adjacent pair is in non-descending comparator order.
    pub fn is_sorted(&self) -> bool {
        self.items
            .windows(2)
            .all(|pair| self.comparator.compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for OrderedQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
