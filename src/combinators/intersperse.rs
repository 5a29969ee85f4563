use crate::Iterable;

/// Places a separator between consecutive elements of the wrapped sequence.
///
/// The element after the one just produced is pulled one step ahead and held
/// in `peeked`; a separator is only emitted when that lookahead exists, so the
/// output never starts or ends with one.
#[derive(Debug, Clone)]
pub struct Intersperse<I: Iterable> {
    iter: Option<I>,
    sep: I::Item,
    peeked: Option<I::Item>,
    sep_next: bool,
}

/// Create a sequence yielding the elements of `iter` with `sep` between each pair.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let out = from_array(vec![1, 2, 3]).intersperse(0).to_array();
/// assert_eq!(out, vec![1, 0, 2, 0, 3]);
/// ```
pub fn intersperse<I>(iter: I, sep: I::Item) -> Intersperse<I>
where
    I: Iterable,
    I::Item: Clone,
{
    Intersperse {
        iter: Some(iter),
        sep,
        peeked: None,
        sep_next: false,
    }
}

impl<I> Iterable for Intersperse<I>
where
    I: Iterable,
    I::Item: Clone,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, I::Item)> {
        let Intersperse {
            iter,
            sep,
            peeked,
            sep_next,
        } = self;

        if sep_next {
            let out = sep.clone();
            return Some((
                Intersperse {
                    iter,
                    sep,
                    peeked,
                    sep_next: false,
                },
                out,
            ));
        }

        let (iter, item) = match peeked {
            Some(item) => (iter, item),
            None => {
                let (rest, item) = iter?.advance()?;
                (Some(rest), item)
            }
        };

        let (iter, peeked) = match iter.and_then(Iterable::advance) {
            Some((rest, next)) => (Some(rest), Some(next)),
            None => (None, None),
        };
        let sep_next = peeked.is_some();

        Some((
            Intersperse {
                iter,
                sep,
                peeked,
                sep_next,
            },
            item,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_up, empty, from_array, range};

    #[test]
    fn test_intersperse_between_elements() {
        let out = intersperse(from_array(vec![1, 2, 3]), 0).to_array();
        assert_eq!(out, vec![1, 0, 2, 0, 3]);
    }

    #[test]
    fn test_intersperse_single_and_empty_unchanged() {
        assert_eq!(range(7, 8).intersperse(0).to_array(), vec![7]);
        assert!(empty::<i32>().intersperse(0).is_empty());
    }

    #[test]
    fn test_intersperse_over_infinite_source() {
        let out = count_up(1u32).intersperse(0).take(5).to_array();
        assert_eq!(out, vec![1, 0, 2, 0, 3]);
    }

    #[test]
    fn test_intersperse_strings() {
        let words = from_array(vec!["a".to_string(), "b".to_string()]);
        let joined: String = words.intersperse(", ".to_string()).to_array().concat();
        assert_eq!(joined, "a, b");
    }
}
