//! Binary min-heap primitives over a slice.
//!
//! The heap is stored in array form: the children of node `i` are at
//! `2i + 1` and `2i + 2`. All functions take the comparison as a parameter
//! so that the same code serves any ordering.

use crate::order::Less;

#[inline]
fn parent(pos: usize) -> usize {
    (pos - 1) / 2
}

/// Moves the element at `pos` up until its parent is not greater
pub fn sift_up<T, C: Less<T>>(data: &mut [T], mut pos: usize, less: &C) {
    while pos > 0 {
        let up = parent(pos);
        if !less.less(&data[pos], &data[up]) {
            break;
        }
        data.swap(pos, up);
        pos = up;
    }
}

/// Moves the element at `pos` down until no child is smaller
pub fn sift_down<T, C: Less<T>>(data: &mut [T], mut pos: usize, less: &C) {
    let len = data.len();
    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }

        let mut smallest = pos;
        if less.less(&data[left], &data[smallest]) {
            smallest = left;
        }

        let right = left + 1;
        if right < len && less.less(&data[right], &data[smallest]) {
            smallest = right;
        }

        if smallest == pos {
            break;
        }
        data.swap(pos, smallest);
        pos = smallest;
    }
}

/// Builds a heap in place, bottom-up
pub fn heapify<T, C: Less<T>>(data: &mut [T], less: &C) {
    for pos in (0..data.len() / 2).rev() {
        sift_down(data, pos, less);
    }
}

/// Checks that no element is smaller than its parent
pub fn is_heap<T, C: Less<T>>(data: &[T], less: &C) -> bool {
    (1..data.len()).all(|pos| !less.less(&data[pos], &data[parent(pos)]))
}
