//! Core trait for pull-based persistent sequences.
//!
//! This module defines the [`Iterable`] trait, the building block every
//! generator, combinator and consumer in this crate is written against.
//!
//! # The Iterable Trait
//!
//! An [`Iterable`] is a *sequence state*: a value recording where iteration
//! currently stands. [`advance`](Iterable::advance) consumes the state and
//! returns either `None` (exhausted) or the successor state together with
//! the produced element. Nothing is mutated in place, so cloning a state
//! before advancing it gives two independent branches that produce the same
//! elements.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens = range(0, 10).filter(|x: &i32| x % 2 == 0).map(|x| x * 10);
//! assert_eq!(evens.to_array(), vec![0, 20, 40, 60, 80]);
//! ```

use std::ops::Add;

use either::Either;

use crate::{
    DynIter, Result, Step,
    build::{ArrayIter, from_array},
    combinators::{
        Append, Filter, FilterMap, Flatten, Intersperse, Map, Product, PushFront, Reverse, Take,
        TakeWhile, Zip,
    },
    drive,
    iter::Iter,
    sequenced::Sequenced,
};

/// A sequence state that can be advanced by value.
///
/// Implementors only provide [`advance`](Iterable::advance); every other
/// method is derived from it.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let (rest, first) = range(3, 6).advance().unwrap();
/// assert_eq!(first, 3);
/// assert_eq!(rest.to_array(), vec![4, 5]);
/// ```
pub trait Iterable {
    /// Type of the produced elements
    type Item;

    /// Produce the next element and the state that follows it, or `None` when exhausted.
    fn advance(self) -> Option<(Self, Self::Item)>
    where
        Self: Sized;

    /// Transform every element with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        crate::combinators::map(self, f)
    }

    /// Keep only the elements for which `pred` holds.
    ///
    /// Rejected elements are consumed; they are not seen by later stages.
    fn filter<P>(self, pred: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::combinators::filter(self, pred)
    }

    /// Transform elements with `f`, dropping those mapped to `None`.
    fn filter_map<B, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Option<B>,
    {
        crate::combinators::filter_map(self, f)
    }

    /// Concatenate a sequence of sequences.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Iterable,
    {
        crate::combinators::flatten(self)
    }

    /// Cartesian product with `other`.
    ///
    /// Pairs are `(self_item, other_item)`. The receiver is the inner,
    /// fast-varying loop: it is replayed from the start for every element
    /// of `other`.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let pairs = range(1, 3).product(from_array(vec!['a', 'b'])).to_array();
    /// assert_eq!(pairs, vec![(1, 'a'), (2, 'a'), (1, 'b'), (2, 'b')]);
    /// ```
    fn product<J>(self, other: J) -> Product<Self, J>
    where
        Self: Sized + Clone,
        J: Iterable,
        J::Item: Clone,
    {
        crate::combinators::product(self, other)
    }

    /// Yield every element of `self`, then every element of `other`.
    fn append<J>(self, other: J) -> Append<Self, J>
    where
        Self: Sized,
        J: Iterable<Item = Self::Item>,
    {
        crate::combinators::append(self, other)
    }

    /// Yield `sep` between consecutive elements.
    fn intersperse(self, sep: Self::Item) -> Intersperse<Self>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        crate::combinators::intersperse(self, sep)
    }

    /// Yield `head` before the elements of `self`.
    fn push_front(self, head: Self::Item) -> PushFront<Self>
    where
        Self: Sized,
    {
        crate::combinators::push_front(head, self)
    }

    /// Yield the elements in reverse order.
    ///
    /// The whole sequence is materialized when this is called.
    fn reverse(self) -> Reverse<Self::Item>
    where
        Self: Sized,
    {
        crate::combinators::reverse(self)
    }

    /// Yield at most `n` elements.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::combinators::take(n, self)
    }

    /// Yield elements while `pred` holds; the first failing element ends the sequence.
    fn take_while<P>(self, pred: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        crate::combinators::take_while(self, pred)
    }

    /// Pair elements of `self` and `other` positionally, stopping at the shorter one.
    fn zip<J>(self, other: J) -> Zip<Self, J>
    where
        Self: Sized,
        J: Iterable,
    {
        crate::combinators::zip(self, other)
    }

    /// Left-to-right strict accumulation.
    fn fold<A, F>(self, seed: A, op: F) -> A
    where
        Self: Sized,
        F: FnMut(Self::Item, A) -> A,
    {
        drive::fold(self, seed, op)
    }

    /// Accumulation where every step runs inside a [`Sequenced`] context.
    fn fold_m<A, M, F>(self, seed: A, op: F) -> M
    where
        Self: Sized,
        M: Sequenced<Value = A, With<A> = M>,
        F: FnMut(Self::Item, A) -> M,
    {
        drive::fold_m(self, seed, op)
    }

    /// Accumulation that stops as soon as `body` returns [`Step::Break`].
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// // sum until the running total passes 10
    /// let total = count_up(1u32).loop_iter(0, |x, acc| {
    ///     let acc = acc + x;
    ///     if acc > 10 { Step::Break(acc) } else { Step::Continue(acc) }
    /// });
    /// assert_eq!(total, 15);
    /// ```
    fn loop_iter<A, F>(self, seed: A, body: F) -> A
    where
        Self: Sized,
        F: FnMut(Self::Item, A) -> Step<A, A>,
    {
        drive::loop_iter(self, seed, body)
    }

    /// Early-exit loop where every body outcome runs inside a [`Sequenced`] context.
    fn loop_iter_m<A, M, F>(self, seed: A, body: F) -> M::With<A>
    where
        Self: Sized,
        M: Sequenced<Value = Step<A, A>>,
        F: FnMut(Self::Item, A) -> M,
    {
        drive::loop_iter_m(self, seed, body)
    }

    /// Run every wrapped element in order and gather the results.
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let all: Option<Vec<i32>> = from_array(vec![Some(1), Some(2)]).collect_m();
    /// assert_eq!(all, Some(vec![1, 2]));
    /// ```
    fn collect_m<T, M>(self) -> M::With<Vec<T>>
    where
        Self: Sized + Iterable<Item = M>,
        M: Sequenced<Value = T>,
        M::With<Vec<T>>: Sequenced<Value = Vec<T>, With<Vec<T>> = M::With<Vec<T>>>,
    {
        drive::collect_m(self)
    }

    /// Sum every element, starting from `Item::default()`.
    fn sum(self) -> Self::Item
    where
        Self: Sized,
        Self::Item: Default + Add<Output = Self::Item>,
    {
        drive::sum(self)
    }

    /// Materialize every element into a `Vec`.
    fn to_array(self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        drive::to_array(self)
    }

    /// Number of elements. Always a full traversal.
    fn size(self) -> usize
    where
        Self: Sized,
    {
        drive::size(self)
    }

    /// `true` when the sequence produces no element.
    fn is_empty(self) -> bool
    where
        Self: Sized,
    {
        drive::is_empty(self)
    }

    /// The first element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is exhausted; use [`try_front`](Iterable::try_front)
    /// to handle that case.
    fn front(self) -> Self::Item
    where
        Self: Sized,
    {
        drive::front(self)
    }

    /// The first element, or [`Error::Exhausted`](crate::Error::Exhausted).
    fn try_front(self) -> Result<Self::Item>
    where
        Self: Sized,
    {
        drive::try_front(self)
    }

    /// The state after the first element, or `self` unchanged if exhausted.
    fn pop_front(self) -> Self
    where
        Self: Sized + Clone,
    {
        drive::pop_front(self)
    }

    /// First element satisfying `pred`.
    fn find<P>(self, pred: P) -> Option<Self::Item>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        drive::find(self, pred)
    }

    /// `true` if any element satisfies `pred`.
    fn any<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        drive::any(self, pred)
    }

    /// `true` if every element satisfies `pred`.
    fn all<P>(self, pred: P) -> bool
    where
        Self: Sized,
        P: FnMut(Self::Item) -> bool,
    {
        drive::all(self, pred)
    }

    /// Erase the concrete state type behind a uniform [`DynIter`].
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// fn digits(odd: bool) -> DynIter<'static, u8> {
    ///     if odd {
    ///         range(0u8, 10).filter(|d: &u8| d % 2 == 1).to_dyn()
    ///     } else {
    ///         range_step(0u8, 10, 2).to_dyn()
    ///     }
    /// }
    /// assert_eq!(digits(true).to_array(), vec![1, 3, 5, 7, 9]);
    /// assert_eq!(digits(false).to_array(), vec![0, 2, 4, 6, 8]);
    /// ```
    fn to_dyn<'a>(self) -> DynIter<'a, Self::Item>
    where
        Self: Sized + Clone + 'a,
    {
        DynIter::new(self)
    }

    /// Materialize into an array-backed sequence.
    ///
    /// Mainly used to strip the dispatch cost of a [`DynIter`] before
    /// traversing it several times.
    fn bang(self) -> ArrayIter<Self::Item>
    where
        Self: Sized,
    {
        let items = self.to_array();
        tracing::trace!(len = items.len(), "materialized sequence");
        from_array(items)
    }

    /// Borrow-free adapter implementing [`std::iter::Iterator`].
    fn iter(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

impl<I> Iterable for Box<I>
where
    I: Iterable,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, Self::Item)> {
        let (rest, item) = (*self).advance()?;
        Some((Box::new(rest), item))
    }
}

impl<L, R> Iterable for Either<L, R>
where
    L: Iterable,
    R: Iterable<Item = L::Item>,
{
    type Item = L::Item;

    fn advance(self) -> Option<(Self, Self::Item)> {
        match self {
            Either::Left(l) => l.advance().map(|(rest, item)| (Either::Left(rest), item)),
            Either::Right(r) => r.advance().map(|(rest, item)| (Either::Right(rest), item)),
        }
    }
}
