use crate::Iterable;

/// Transforms every element of the wrapped sequence.
#[derive(Debug, Clone)]
pub struct Map<I, F> {
    iter: I,
    f: F,
}

/// Create a sequence that applies `f` to each element of `iter`.
pub fn map<I, B, F>(iter: I, f: F) -> Map<I, F>
where
    I: Iterable,
    F: FnMut(I::Item) -> B,
{
    Map { iter, f }
}

impl<I, B, F> Iterable for Map<I, F>
where
    I: Iterable,
    F: FnMut(I::Item) -> B,
{
    type Item = B;

    fn advance(self) -> Option<(Self, B)> {
        let Map { iter, mut f } = self;
        let (iter, item) = iter.advance()?;
        let mapped = f(item);
        Some((Map { iter, f }, mapped))
    }
}

/// Keeps the elements of the wrapped sequence that satisfy a predicate.
///
/// Rejected elements are pulled and dropped; a single `advance` may consume
/// any number of them before it yields or runs out.
#[derive(Debug, Clone)]
pub struct Filter<I, P> {
    iter: I,
    pred: P,
}

pub fn filter<I, P>(iter: I, pred: P) -> Filter<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    Filter { iter, pred }
}

impl<I, P> Iterable for Filter<I, P>
where
    I: Iterable,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn advance(self) -> Option<(Self, I::Item)> {
        let Filter { mut iter, mut pred } = self;
        loop {
            let (rest, item) = iter.advance()?;
            if pred(&item) {
                return Some((Filter { iter: rest, pred }, item));
            }
            iter = rest;
        }
    }
}

/// Transforms elements with a partial function, skipping those it maps to `None`.
#[derive(Debug, Clone)]
pub struct FilterMap<I, F> {
    iter: I,
    f: F,
}

pub fn filter_map<I, B, F>(iter: I, f: F) -> FilterMap<I, F>
where
    I: Iterable,
    F: FnMut(I::Item) -> Option<B>,
{
    FilterMap { iter, f }
}

impl<I, B, F> Iterable for FilterMap<I, F>
where
    I: Iterable,
    F: FnMut(I::Item) -> Option<B>,
{
    type Item = B;

    fn advance(self) -> Option<(Self, B)> {
        let FilterMap { mut iter, mut f } = self;
        loop {
            let (rest, item) = iter.advance()?;
            if let Some(mapped) = f(item) {
                return Some((FilterMap { iter: rest, f }, mapped));
            }
            iter = rest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{count_up, empty, range};

    #[test]
    fn test_map_transforms_each_element() {
        let out = map(range(0, 4), |x| x * 3).to_array();
        assert_eq!(out, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_map_changes_element_type() {
        let out = range(1, 4).map(|x: i32| x.to_string()).to_array();
        assert_eq!(out, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_map_fusion() {
        let f = |x: i32| x + 1;
        let g = |x: i32| x * 10;
        assert_eq!(
            range(0, 5).map(f).map(g).to_array(),
            range(0, 5).map(move |x| g(f(x))).to_array()
        );
    }

    #[test]
    fn test_filter_skips_rejected_elements() {
        let out = filter(range(0, 10), |x| x % 3 == 0).to_array();
        assert_eq!(out, vec![0, 3, 6, 9]);
    }

    #[test]
    fn test_filter_over_infinite_source() {
        let out = count_up(0u32).filter(|x| x % 5 == 4).take(3).to_array();
        assert_eq!(out, vec![4, 9, 14]);
    }

    #[test]
    fn test_filter_rejecting_everything_is_empty() {
        assert!(range(0, 100).filter(|_| false).is_empty());
        assert!(filter(empty::<i32>(), |_| true).is_empty());
    }

    #[test]
    fn test_filter_map_drops_none() {
        let words = crate::build::from_array(vec!["1", "x", "3", "", "5"]);
        let out = filter_map(words, |w: &str| w.parse::<i32>().ok()).to_array();
        assert_eq!(out, vec![1, 3, 5]);
    }
}
