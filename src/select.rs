//! Bounded top-K selection.
//!
//! A [`BoundedSelector`] ingests values one at a time and retains at most
//! `capacity` of them: the largest seen so far under its ordering. The
//! retained values are kept in a min-heap, so the smallest retained value
//! (the one to evict next) is always at the root.

use log::debug;

use crate::{
    error::{Error, Result},
    heap,
    order::{Less, Order},
};

#[derive(Clone, Debug)]
pub struct BoundedSelector<T, C> {
    /// Retained values, in min-heap order
    heap: Vec<T>,
    capacity: usize,
    less: C,
}

impl<T, F> BoundedSelector<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Creates a selector keeping the `capacity` largest values, where
    /// `less(a, b)` tells whether a is smaller than b
    pub fn new(capacity: usize, less: F) -> Result<Self> {
        Self::with_less(capacity, less)
    }
}

impl<T: Ord> BoundedSelector<T, Order> {
    /// Keeps the `capacity` largest values
    pub fn largest(capacity: usize) -> Result<Self> {
        Self::with_order(capacity, Order::Largest)
    }

    /// Keeps the `capacity` smallest values
    pub fn smallest(capacity: usize) -> Result<Self> {
        Self::with_order(capacity, Order::Smallest)
    }

    pub fn with_order(capacity: usize, order: Order) -> Result<Self> {
        Self::with_less(capacity, order)
    }

    pub fn order(&self) -> Order {
        self.less
    }
}

impl<T, C> BoundedSelector<T, C>
where
    C: Less<T>,
{
    pub(crate) fn with_less(capacity: usize, less: C) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        debug!("Creating a selector with capacity {}", capacity);

        Ok(Self {
            heap: Vec::with_capacity(capacity),
            capacity,
            less,
        })
    }

    /// Builds a selector from values that are not in heap order
    pub(crate) fn from_values(capacity: usize, less: C, mut values: Vec<T>) -> Result<Self> {
        if capacity < 1 {
            return Err(Error::InvalidCapacity(capacity));
        }
        if values.len() > capacity {
            return Err(Error::Overfull {
                len: values.len(),
                capacity,
            });
        }

        heap::heapify(&mut values, &less);
        values.reserve_exact(capacity - values.len());
        Ok(Self {
            heap: values,
            capacity,
            less,
        })
    }

    /// Offers a value to the selector
    ///
    /// While filling, the value is always kept. Once full, it replaces the
    /// current minimum if it is larger, and is discarded otherwise.
    #[inline]
    pub fn offer(&mut self, value: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(value);
            let last = self.heap.len() - 1;
            heap::sift_up(&mut self.heap, last, &self.less);
        } else if self.less.less(&self.heap[0], &value) {
            self.heap[0] = value;
            heap::sift_down(&mut self.heap, 0, &self.less);
        }
    }

    pub fn offer_all<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.offer(value);
        }
    }

    /// The retained values, in heap order (the minimum comes first)
    pub fn result(&self) -> &[T] {
        &self.heap
    }

    /// Returns the minimum of the retained values
    ///
    /// Once the selector is full, this is the k-th largest value seen.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Returns the value a candidate has to beat to be retained, if any
    #[inline]
    pub fn threshold(&self) -> Option<&T> {
        if self.is_full() {
            self.peek()
        } else {
            None
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Forgets all the retained values
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }

    /// Returns the retained values, largest first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let less = self.less;
        let mut values = self.heap;
        values.sort_by(|a, b| {
            if less.less(b, a) {
                std::cmp::Ordering::Less
            } else if less.less(a, b) {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        });
        values
    }
}

impl<T, C: Less<T>> Extend<T> for BoundedSelector<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.offer_all(iter)
    }
}
