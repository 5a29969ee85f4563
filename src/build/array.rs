use std::rc::Rc;

use crate::Iterable;

/// Walks a shared, read-only array by index.
///
/// Cloning the state clones the `Rc`, never the elements, so every branch of
/// an array-backed sequence reads the same backing storage.
#[derive(Debug)]
pub struct ArrayIter<T> {
    items: Rc<[T]>,
    index: usize,
}

impl<T> Clone for ArrayIter<T> {
    fn clone(&self) -> Self {
        ArrayIter {
            items: Rc::clone(&self.items),
            index: self.index,
        }
    }
}

/// Create a sequence over the elements of `items`, front to back.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let letters = from_array(vec!['x', 'y']);
/// assert_eq!(letters.to_array(), vec!['x', 'y']);
/// ```
pub fn from_array<T>(items: Vec<T>) -> ArrayIter<T> {
    ArrayIter::from(items)
}

impl<T> ArrayIter<T> {
    /// Number of elements not yet produced.
    pub fn remaining(&self) -> usize {
        self.items.len() - self.index
    }

    /// The backing storage, including already produced elements.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for ArrayIter<T> {
    fn from(items: Vec<T>) -> Self {
        ArrayIter {
            items: items.into(),
            index: 0,
        }
    }
}

impl<T> From<Rc<[T]>> for ArrayIter<T> {
    fn from(items: Rc<[T]>) -> Self {
        ArrayIter { items, index: 0 }
    }
}

impl<T: Clone> Iterable for ArrayIter<T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        let item = self.items.get(self.index)?.clone();
        Some((
            ArrayIter {
                items: self.items,
                index: self.index + 1,
            },
            item,
        ))
    }
}
