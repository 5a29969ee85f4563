//! Functions for driving sequences to completion.
//!
//! Every consumer here is written only against [`Iterable::advance`], so it
//! works unchanged for generators, combinators and [`DynIter`](crate::DynIter).
//! [`fold`] fixes the traversal order; the derived queries inherit it.
//! [`loop_iter`] is the only primitive that stops early, and the short-circuiting
//! helpers ([`find`], [`any`], [`all`]) are built on it.

use std::ops::Add;

use crate::{Error, Iterable, Result, Step, sequenced::Sequenced};

/// Left-to-right strict accumulation: `op(element, accumulator)` for every element.
pub fn fold<I, A, F>(iter: I, seed: A, mut op: F) -> A
where
    I: Iterable,
    F: FnMut(I::Item, A) -> A,
{
    let mut acc = seed;
    let mut state = iter;
    while let Some((rest, item)) = state.advance() {
        acc = op(item, acc);
        state = rest;
    }
    acc
}

/// Sequenced accumulation.
///
/// An exhausted sequence lifts the accumulator with [`Sequenced::pure`].
/// Each step is settled before the next element is pulled, so a
/// short-circuiting context stops the traversal and is returned as is.
pub fn fold_m<I, A, M, F>(iter: I, seed: A, mut op: F) -> M
where
    I: Iterable,
    M: Sequenced<Value = A, With<A> = M>,
    F: FnMut(I::Item, A) -> M,
{
    let mut acc = seed;
    let mut state = iter;
    while let Some((rest, item)) = state.advance() {
        match op(item, acc).settle::<A>() {
            Step::Continue(next) => acc = next,
            Step::Break(stopped) => return stopped,
        }
        state = rest;
    }
    M::pure(acc)
}

/// Accumulation with early exit.
///
/// Returns the value of the first [`Step::Break`], or the last accumulator
/// once the sequence is exhausted.
pub fn loop_iter<I, A, F>(iter: I, seed: A, mut body: F) -> A
where
    I: Iterable,
    F: FnMut(I::Item, A) -> Step<A, A>,
{
    let mut acc = seed;
    let mut state = iter;
    while let Some((rest, item)) = state.advance() {
        match body(item, acc) {
            Step::Break(value) => return value,
            Step::Continue(next) => acc = next,
        }
        state = rest;
    }
    acc
}

/// Early-exit loop whose body outcomes are sequenced before being inspected.
///
/// Stops at the first [`Step::Break`] or at the first body outcome that
/// short-circuits its context.
pub fn loop_iter_m<I, A, M, F>(iter: I, seed: A, mut body: F) -> M::With<A>
where
    I: Iterable,
    M: Sequenced<Value = Step<A, A>>,
    F: FnMut(I::Item, A) -> M,
{
    let mut acc = seed;
    let mut state = iter;
    while let Some((rest, item)) = state.advance() {
        match body(item, acc).settle::<A>() {
            Step::Continue(Step::Continue(next)) => acc = next,
            Step::Continue(Step::Break(value)) => return <M::With<A> as Sequenced>::pure(value),
            Step::Break(stopped) => return stopped,
        }
        state = rest;
    }
    <M::With<A> as Sequenced>::pure(acc)
}

/// Run every wrapped element in order, appending each result to a `Vec`.
pub fn collect_m<I, T, M>(iter: I) -> M::With<Vec<T>>
where
    I: Iterable<Item = M>,
    M: Sequenced<Value = T>,
    M::With<Vec<T>>: Sequenced<Value = Vec<T>, With<Vec<T>> = M::With<Vec<T>>>,
{
    fold_m(iter, Vec::new(), |wrapped: M, mut acc: Vec<T>| {
        wrapped.then::<Vec<T>, _>(move |value| {
            acc.push(value);
            <M::With<Vec<T>> as Sequenced>::pure(acc)
        })
    })
}

/// Sum of every element, starting from `Item::default()`.
pub fn sum<I>(iter: I) -> I::Item
where
    I: Iterable,
    I::Item: Default + Add<Output = I::Item>,
{
    fold(iter, I::Item::default(), |item, acc| acc + item)
}

/// Every element, in order.
pub fn to_array<I>(iter: I) -> Vec<I::Item>
where
    I: Iterable,
{
    fold(iter, Vec::new(), |item, mut acc| {
        acc.push(item);
        acc
    })
}

/// Number of elements. Traverses the whole sequence.
pub fn size<I>(iter: I) -> usize
where
    I: Iterable,
{
    fold(iter, 0, |_, n| n + 1)
}

/// `true` when the first `advance` reports exhaustion.
pub fn is_empty<I>(iter: I) -> bool
where
    I: Iterable,
{
    iter.advance().is_none()
}

/// First element of a sequence that must not be exhausted.
///
/// # Panics
///
/// Panics when the sequence is exhausted. Asking for the front of an empty
/// sequence is a caller bug; [`try_front`] is the checked form.
pub fn front<I>(iter: I) -> I::Item
where
    I: Iterable,
{
    match try_front(iter) {
        Ok(item) => item,
        Err(err) => {
            tracing::error!(%err, "front of an exhausted sequence");
            panic!("called `front()` on an empty sequence: {err}")
        }
    }
}

/// First element, or [`Error::Exhausted`].
pub fn try_front<I>(iter: I) -> Result<I::Item>
where
    I: Iterable,
{
    iter.advance().map(|(_, item)| item).ok_or(Error::Exhausted)
}

/// Drop the first element; an exhausted sequence is returned unchanged.
pub fn pop_front<I>(iter: I) -> I
where
    I: Iterable + Clone,
{
    match iter.clone().advance() {
        Some((rest, _)) => rest,
        None => iter,
    }
}

/// First element satisfying `pred`. Stops pulling once it is found.
pub fn find<I, P>(iter: I, mut pred: P) -> Option<I::Item>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    loop_iter(iter, None, |item, _| {
        if pred(&item) {
            Step::Break(Some(item))
        } else {
            Step::Continue(None)
        }
    })
}

/// `true` at the first element satisfying `pred`.
pub fn any<I, P>(iter: I, mut pred: P) -> bool
where
    I: Iterable,
    P: FnMut(I::Item) -> bool,
{
    loop_iter(iter, false, |item, _| {
        if pred(item) {
            Step::Break(true)
        } else {
            Step::Continue(false)
        }
    })
}

/// `false` at the first element failing `pred`.
pub fn all<I, P>(iter: I, mut pred: P) -> bool
where
    I: Iterable,
    P: FnMut(I::Item) -> bool,
{
    loop_iter(iter, true, |item, _| {
        if pred(item) {
            Step::Continue(true)
        } else {
            Step::Break(false)
        }
    })
}
