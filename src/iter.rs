//! Interop with [`std::iter::Iterator`].
//!
//! [`Iter`] drives an [`Iterable`] through the standard `next(&mut self)`
//! protocol, keeping the current state inside the adapter. [`FromStd`] goes
//! the other way and wraps a cloneable standard iterator as a sequence state.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let total: i32 = range(1, 4).iter().map(|x| x * x).sum();
//! assert_eq!(total, 14);
//!
//! let doubled = from_std("abc".chars()).map(|c| c.to_ascii_uppercase()).to_array();
//! assert_eq!(doubled, vec!['A', 'B', 'C']);
//! ```

use crate::Iterable;

/// Iterator adapter for an [`Iterable`].
///
/// Once the wrapped sequence is exhausted the adapter keeps returning `None`.
#[derive(Debug, Clone)]
pub struct Iter<I> {
    state: Option<I>,
}

impl<I> Iter<I>
where
    I: Iterable,
{
    /// Create a new iterator starting at `iter`.
    pub fn new(iter: I) -> Self {
        Self { state: Some(iter) }
    }

    /// Check if the wrapped sequence has been exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.state.is_none()
    }

    /// The current sequence state, or `None` once exhausted.
    pub fn into_state(self) -> Option<I> {
        self.state
    }
}

impl<I> Iterator for Iter<I>
where
    I: Iterable,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let (rest, item) = Option::take(&mut self.state)?.advance()?;
        self.state = Some(rest);
        Some(item)
    }
}

/// A standard iterator viewed as a sequence state.
///
/// Branching the state clones the underlying iterator, so both branches
/// replay the same elements.
#[derive(Debug, Clone)]
pub struct FromStd<T>(T);

pub fn from_std<T>(iter: T) -> FromStd<T::IntoIter>
where
    T: IntoIterator,
    T::IntoIter: Clone,
{
    FromStd(iter.into_iter())
}

impl<T> Iterable for FromStd<T>
where
    T: Iterator,
{
    type Item = T::Item;

    fn advance(self) -> Option<(Self, T::Item)> {
        let mut iter = self.0;
        let item = iter.next()?;
        Some((FromStd(iter), item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_up, range};

    #[test]
    fn test_iter_drains_sequence() {
        let mut iter = range(0, 2).iter();
        assert_eq!(iter.next(), Some(0));
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next(), None);
        assert!(iter.is_exhausted());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_resumes_from_state() {
        let mut iter = count_up(0u8).iter();
        let firsts: Vec<_> = iter.by_ref().take(3).collect();
        assert_eq!(firsts, vec![0, 1, 2]);

        let rest = iter.into_state().unwrap();
        assert_eq!(rest.front(), 3);
    }

    #[test]
    fn test_iter_stays_exhausted() {
        let mut iter = from_std(vec!['a']).iter();
        assert_eq!(iter.next(), Some('a'));
        for _ in 0..3 {
            assert_eq!(iter.next(), None);
        }
        assert!(iter.into_state().is_none());
    }

    #[test]
    fn test_iter_in_for_loop() {
        let mut seen = Vec::new();
        for x in range(5, 8).iter() {
            seen.push(x);
        }
        assert_eq!(seen, vec![5, 6, 7]);
    }

    #[test]
    fn test_from_std_is_persistent() {
        let words = from_std(vec!["p", "q"]);
        let (rest, first) = words.clone().advance().unwrap();
        assert_eq!(first, "p");
        assert_eq!(rest.to_array(), vec!["q"]);
        assert_eq!(words.to_array(), vec!["p", "q"]);
    }
}
