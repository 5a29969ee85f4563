//! Type-erased sequences.
//!
//! [`DynIter`] hides the concrete state type of a sequence behind a shared
//! closure. Every `advance` runs the closure on a clone of the captured state
//! and wraps the successor state in a fresh closure, so the erased sequence
//! keeps the persistence of the sequence it came from. The price is one
//! allocation and one indirect call per element.
//!
//! `DynIter` is itself [`Iterable`], so every combinator and consumer accepts
//! it, and erasing an already erased sequence is just another wrap.

use std::{fmt, rc::Rc};

use crate::Iterable;

type Advance<'a, T> = dyn Fn() -> Option<(DynIter<'a, T>, T)> + 'a;

/// A sequence of `T` whose concrete state type has been erased.
///
/// Cloning shares the captured state; the two clones advance independently.
pub struct DynIter<'a, T> {
    next: Rc<Advance<'a, T>>,
}

impl<'a, T> DynIter<'a, T> {
    /// Erase the state type of `iter`.
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterable<Item = T> + Clone + 'a,
    {
        DynIter {
            next: Rc::new(move || {
                iter.clone()
                    .advance()
                    .map(|(rest, item)| (DynIter::new(rest), item))
            }),
        }
    }
}

impl<T> Clone for DynIter<'_, T> {
    fn clone(&self) -> Self {
        DynIter {
            next: Rc::clone(&self.next),
        }
    }
}

impl<T> fmt::Debug for DynIter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynIter").finish_non_exhaustive()
    }
}

impl<T> Iterable for DynIter<'_, T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        (self.next)()
    }
}

/// Erase the state type of `iter`; free-function form of [`Iterable::to_dyn`].
pub fn to_dyn<'a, I>(iter: I) -> DynIter<'a, I::Item>
where
    I: Iterable + Clone + 'a,
{
    DynIter::new(iter)
}
