use crate::Iterable;

/// Drains the first sequence, then the second.
///
/// Created via [`append`]. The first sequence is dropped once it is exhausted.
#[derive(Debug, Clone)]
pub struct Append<A, B>(Option<A>, B);

/// Create a sequence yielding all of `first`, then all of `second`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(0, 2).append(range(7, 9)).to_array(), vec![0, 1, 7, 8]);
/// ```
pub fn append<A, B>(first: A, second: B) -> Append<A, B>
where
    A: Iterable,
    B: Iterable<Item = A::Item>,
{
    Append(Some(first), second)
}

impl<A, B> Iterable for Append<A, B>
where
    A: Iterable,
    B: Iterable<Item = A::Item>,
{
    type Item = A::Item;

    fn advance(self) -> Option<(Self, A::Item)> {
        let Append(first, second) = self;
        if let Some(first) = first {
            if let Some((rest, item)) = first.advance() {
                return Some((Append(Some(rest), second), item));
            }
        }
        let (rest, item) = second.advance()?;
        Some((Append(None, rest), item))
    }
}

/// Yields a buffered head element before the wrapped tail sequence.
#[derive(Debug, Clone)]
pub struct PushFront<I: Iterable> {
    head: Option<I::Item>,
    tail: I,
}

/// Create a sequence yielding `head` and then the elements of `tail`.
pub fn push_front<I>(head: I::Item, tail: I) -> PushFront<I>
where
    I: Iterable,
{
    PushFront {
        head: Some(head),
        tail,
    }
}

impl<I> Iterable for PushFront<I>
where
    I: Iterable,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, I::Item)> {
        match self.head {
            Some(head) => Some((
                PushFront {
                    head: None,
                    tail: self.tail,
                },
                head,
            )),
            None => {
                let (tail, item) = self.tail.advance()?;
                Some((PushFront { head: None, tail }, item))
            }
        }
    }
}

/// Concatenates the sequences produced by an outer sequence.
///
/// Fully exhausted only when the outer sequence is exhausted and no inner
/// sequence is in progress.
#[derive(Debug, Clone)]
pub struct Flatten<I: Iterable> {
    outer: I,
    current: Option<I::Item>,
}

pub fn flatten<I>(outer: I) -> Flatten<I>
where
    I: Iterable,
    I::Item: Iterable,
{
    Flatten {
        outer,
        current: None,
    }
}

impl<I> Iterable for Flatten<I>
where
    I: Iterable,
    I::Item: Iterable,
{
    type Item = <I::Item as Iterable>::Item;

    fn advance(self) -> Option<(Self, Self::Item)> {
        let Flatten { mut outer, mut current } = self;
        loop {
            if let Some(inner) = current {
                if let Some((rest, item)) = inner.advance() {
                    return Some((
                        Flatten {
                            outer,
                            current: Some(rest),
                        },
                        item,
                    ));
                }
            }
            let (rest, inner) = outer.advance()?;
            outer = rest;
            current = Some(inner);
        }
    }
}
