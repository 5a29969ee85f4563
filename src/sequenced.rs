//! Sequenceable computations used by the monadic consumers.
//!
//! A [`Sequenced`] value wraps a result in some context (possible absence,
//! possible failure, recorded effects). [`fold_m`](crate::Iterable::fold_m),
//! [`loop_iter_m`](crate::Iterable::loop_iter_m) and
//! [`collect_m`](crate::Iterable::collect_m) only ever lift pure values and
//! sequence one computation after another, so any type with those two
//! operations can drive them.
//!
//! # Laws
//!
//! - Left identity: `M::pure(a).then(f) == f(a)`
//! - Right identity: `m.then(M::pure) == m`
//! - Associativity: `m.then(f).then(g) == m.then(|x| f(x).then(g))`
//! - Settling: `m.settle()` is `Continue(a)` exactly when `m.then(f) == f(a)`
//!   for every `f`; otherwise it is `Break(n)` and `m.then(f) == n`.
//!
//! The monadic consumers walk the sequence in a loop and call
//! [`settle`](Sequenced::settle) after every step, so their stack depth does
//! not depend on the length of the sequence.

use crate::Step;

/// A computation that can lift a pure value and run a continuation on its result.
///
/// `With<U>` names the same context carrying a `U`, e.g. `Option<T>::With<U>`
/// is `Option<U>`.
pub trait Sequenced: Sized {
    /// The value produced by this computation
    type Value;

    /// The same kind of computation producing a `U`
    type With<U>: Sequenced<Value = U>;

    /// Lift a pure value into the context.
    fn pure(value: Self::Value) -> Self;

    /// Run `f` on the produced value, sequencing its effects after ours.
    fn then<U, F>(self, f: F) -> Self::With<U>
    where
        F: FnOnce(Self::Value) -> Self::With<U>;

    /// Split the computation into its produced value, or the computation that
    /// short-circuited, re-typed to carry a `U`.
    fn settle<U>(self) -> Step<Self::Value, Self::With<U>>;
}

impl<T> Sequenced for Option<T> {
    type Value = T;
    type With<U> = Option<U>;

    fn pure(value: T) -> Self {
        Some(value)
    }

    fn then<U, F>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        self.and_then(f)
    }

    fn settle<U>(self) -> Step<T, Option<U>> {
        match self {
            Some(value) => Step::Continue(value),
            None => Step::Break(None),
        }
    }
}

impl<T, E> Sequenced for Result<T, E> {
    type Value = T;
    type With<U> = Result<U, E>;

    fn pure(value: T) -> Self {
        Ok(value)
    }

    fn then<U, F>(self, f: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(f)
    }

    fn settle<U>(self) -> Step<T, Result<U, E>> {
        match self {
            Ok(value) => Step::Continue(value),
            Err(err) => Step::Break(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_left_identity() {
        let f = |x: i32| if x > 0 { Some(x * 2) } else { None };
        assert_eq!(<Option<i32>>::pure(4).then(f), f(4));
        assert_eq!(<Option<i32>>::pure(-1).then(f), f(-1));
    }

    #[test]
    fn test_result_short_circuits() {
        let failed: Result<i32, &str> = Err("boom");
        let mut called = false;
        let out = failed.then(|x| {
            called = true;
            Ok::<_, &str>(x + 1)
        });
        assert_eq!(out, Err("boom"));
        assert!(!called);
    }

    #[test]
    fn test_settle_matches_then() {
        let present = Some(3);
        assert_eq!(present.settle::<u8>(), Step::Continue(3));
        assert_eq!(present.then(|x| Some(x + 1)), Some(4));

        let failed: Result<i32, &str> = Err("boom");
        assert_eq!(failed.settle::<String>(), Step::Break(Err("boom")));
        assert_eq!(failed.then(|x| Ok::<_, &str>(x.to_string())), Err("boom"));
    }
}
