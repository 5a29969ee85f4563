use crate::Iterable;

/// Yields at most a fixed number of elements from the wrapped sequence.
#[derive(Debug, Clone)]
pub struct Take<I> {
    iter: I,
    remaining: usize,
}

/// Create a sequence of the first `n` elements of `iter`.
///
/// Once `n` elements have been produced the inner sequence is not pulled again,
/// so taking from an infinite sequence terminates.
pub fn take<I>(n: usize, iter: I) -> Take<I>
where
    I: Iterable,
{
    Take { iter, remaining: n }
}

impl<I> Iterable for Take<I>
where
    I: Iterable,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, I::Item)> {
        if self.remaining == 0 {
            return None;
        }
        let (iter, item) = self.iter.advance()?;
        Some((
            Take {
                iter,
                remaining: self.remaining - 1,
            },
            item,
        ))
    }
}

/// Yields elements while a predicate holds.
///
/// The first element failing the predicate ends the sequence and is dropped.
#[derive(Debug, Clone)]
pub struct TakeWhile<I, P> {
    iter: I,
    pred: P,
}

pub fn take_while<I, P>(iter: I, pred: P) -> TakeWhile<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    TakeWhile { iter, pred }
}

impl<I, P> Iterable for TakeWhile<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, I::Item)> {
        let TakeWhile { iter, mut pred } = self;
        let (iter, item) = iter.advance()?;
        if !pred(&item) {
            return None;
        }
        Some((TakeWhile { iter, pred }, item))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_up, range};

    #[test]
    fn test_take_limits_count() {
        assert_eq!(take(3, range(0, 10)).to_array(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_more_than_available() {
        assert_eq!(take(10, range(0, 3)).to_array(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_zero_never_pulls() {
        let never = count_up(0u8).map(|_: u8| -> u8 { panic!("pulled") });
        assert!(take(0, never).is_empty());
    }

    #[test]
    fn test_take_while_stops_at_first_failure() {
        let out = count_up(1u32).take_while(|x| x * x < 30).to_array();
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_take_while_drops_failing_element() {
        let source = crate::build::from_array(vec![2, 4, 5, 6, 8]);
        assert_eq!(source.take_while(|x| x % 2 == 0).to_array(), vec![2, 4]);
    }
}
