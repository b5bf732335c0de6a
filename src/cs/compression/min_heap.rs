//! Array-backed binary min-heap.
//!
//! Elements live in a dense, zero-indexed `Vec`. The parent of slot `i` is at
//! `(i - 1) / 2` and its children at `2i + 1` and `2i + 2`. Ordering comes
//! entirely from `T: Ord`, so ties between entries are resolved by whatever total
//! order the element type defines; the heap itself never reorders equal keys on
//! purpose.

/// A binary min-heap: `extract_min` always returns the smallest element.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    data: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the smallest element without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Adds an element, restoring heap order by sifting it up. O(log n).
    pub fn insert(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns the smallest element, or `None` if the heap is empty.
    ///
    /// The last element replaces the root and is sifted down. O(log n).
    pub fn extract_min(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        let min = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(min)
    }

    /// Removes the two smallest elements and returns them in ascending order.
    ///
    /// With fewer than two elements left, returns whatever is available (one or
    /// none). Running out is not an error.
    pub fn extract_two_minimum(&mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(2);
        for _ in 0..2 {
            match self.extract_min() {
                Some(item) => out.push(item),
                None => break,
            }
        }
        out
    }

    /// Consumes the heap, returning its elements in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.data.len());
        while let Some(item) = self.extract_min() {
            out.push(item);
        }
        out
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.data[index] < self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.data[left] < self.data[smallest] {
                smallest = left;
            }
            if right < len && self.data[right] < self.data[smallest] {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.data.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}
