use std::marker::PhantomData;

use crate::{
    Iterable,
    build::range::{CountUp, count_up},
    combinators::Map,
};

/// A sequence that is always exhausted.
#[derive(Debug)]
pub struct Empty<T>(PhantomData<fn() -> T>);

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Iterable for Empty<T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        None
    }
}

/// A sequence that may be absent; `None` behaves like [`empty`].
///
/// `Option` itself is not [`Iterable`]: its inherent `take`, `iter` and
/// friends would otherwise be shadowed by the sequence methods.
#[derive(Debug, Clone)]
pub struct Optional<I>(Option<I>);

/// Wrap a possibly absent sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(optional(Some(range(0, 2))).to_array(), vec![0, 1]);
/// assert!(optional(None::<lazyseq::build::Range<i32>>).is_empty());
/// ```
pub fn optional<I>(iter: Option<I>) -> Optional<I>
where
    I: Iterable,
{
    Optional(iter)
}

impl<I> Optional<I> {
    pub fn into_inner(self) -> Option<I> {
        self.0
    }
}

impl<I> Iterable for Optional<I>
where
    I: Iterable,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, I::Item)> {
        let (rest, item) = self.0?.advance()?;
        Some((Optional(Some(rest)), item))
    }
}

/// A sequence driven by a user transition function over a user state.
///
/// Exhausted as soon as the transition returns `None`.
#[derive(Debug, Clone)]
pub struct Generate<S, F> {
    state: S,
    f: F,
}

/// Create a sequence from a seed and a transition function.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// // powers of two below 100
/// let powers = generate(1u32, |n| (n < 100).then(|| (n * 2, n)));
/// assert_eq!(powers.to_array(), vec![1, 2, 4, 8, 16, 32, 64]);
/// ```
pub fn generate<S, T, F>(state: S, f: F) -> Generate<S, F>
where
    F: FnMut(S) -> Option<(S, T)>,
{
    Generate { state, f }
}

impl<S, T, F> Iterable for Generate<S, F>
where
    F: FnMut(S) -> Option<(S, T)>,
{
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        let Generate { state, mut f } = self;
        let (state, item) = f(state)?;
        Some((Generate { state, f }, item))
    }
}

/// The sequence `f(0), f(1), f(2), ...`.
pub fn from_map<T, F>(f: F) -> Map<CountUp<usize>, F>
where
    F: FnMut(usize) -> T,
{
    count_up(0).map(f)
}
