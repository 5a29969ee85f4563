use crate::Iterable;

/// Cartesian product of two sequences.
///
/// `inner` is the fast-varying loop and is replayed from `origin` for every
/// element of `outer`. The outer element currently being paired is buffered
/// in `current`.
#[derive(Debug, Clone)]
pub struct Product<I, J: Iterable> {
    inner: I,
    origin: I,
    outer: J,
    current: Option<J::Item>,
}

/// Create the product of `inner` and `outer`, yielding `(inner_item, outer_item)`.
///
/// `inner` varies fastest: every element of `outer` is paired with the whole
/// of `inner` before `outer` moves on. This is the order produced by
/// `inner.product(outer)`.
pub fn product<I, J>(inner: I, outer: J) -> Product<I, J>
where
    I: Iterable + Clone,
    J: Iterable,
    J::Item: Clone,
{
    Product {
        origin: inner.clone(),
        inner,
        outer,
        current: None,
    }
}

impl<I, J> Iterable for Product<I, J>
where
    I: Iterable + Clone,
    J: Iterable,
    J::Item: Clone,
{
    type Item = (I::Item, J::Item);

    fn advance(self) -> Option<(Self, Self::Item)> {
        let Product {
            mut inner,
            origin,
            mut outer,
            mut current,
        } = self;
        loop {
            let fresh = current.is_none();
            let held = match current {
                Some(held) => held,
                None => {
                    let (rest, next) = outer.advance()?;
                    outer = rest;
                    next
                }
            };
            match inner.advance() {
                Some((rest, item)) => {
                    let pair = (item, held.clone());
                    return Some((
                        Product {
                            inner: rest,
                            origin,
                            outer,
                            current: Some(held),
                        },
                        pair,
                    ));
                }
                // a fresh pass that yields nothing means the inner sequence is empty
                None if fresh => return None,
                None => {
                    inner = origin.clone();
                    current = None;
                }
            }
        }
    }
}

/// Pairs up elements of two sequences positionally.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Create a sequence of `(a_item, b_item)` pairs, as long as the shorter input.
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Iterable,
    B: Iterable,
{
    Zip { a, b }
}

impl<A, B> Iterable for Zip<A, B>
where
    A: Iterable,
    B: Iterable,
{
    type Item = (A::Item, B::Item);

    fn advance(self) -> Option<(Self, Self::Item)> {
        let (a, x) = self.a.advance()?;
        let (b, y) = self.b.advance()?;
        Some((Zip { a, b }, (x, y)))
    }
}
