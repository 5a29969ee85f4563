use std::rc::Rc;

use crate::Iterable;

/// Yields the elements of a materialized sequence from last to first.
///
/// The elements live in a shared read-only array; the state is a descending
/// index into it, so cloning a state never copies the elements.
#[derive(Debug)]
pub struct Reverse<T> {
    items: Rc<[T]>,
    end: usize,
}

impl<T> Clone for Reverse<T> {
    fn clone(&self) -> Self {
        Reverse {
            items: Rc::clone(&self.items),
            end: self.end,
        }
    }
}

/// Materialize `iter` and create a sequence over its elements in reverse order.
///
/// Takes O(n) memory up front and never terminates on an infinite sequence.
pub fn reverse<I>(iter: I) -> Reverse<I::Item>
where
    I: Iterable,
{
    let items: Rc<[I::Item]> = iter.to_array().into();
    tracing::trace!(len = items.len(), "materialized sequence for reversal");
    Reverse {
        end: items.len(),
        items,
    }
}

impl<T> Reverse<T> {
    /// Number of elements not yet produced.
    pub fn remaining(&self) -> usize {
        self.end
    }
}

impl<T: Clone> Iterable for Reverse<T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        let end = self.end.checked_sub(1)?;
        let item = self.items[end].clone();
        Some((
            Reverse {
                items: self.items,
                end,
            },
            item,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::{empty, range};

    #[test]
    fn test_reverse_yields_last_first() {
        assert_eq!(reverse(range(0, 5)).to_array(), vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        let out = range(0, 6).map(|x| x * x).reverse().reverse().to_array();
        assert_eq!(out, vec![0, 1, 4, 9, 16, 25]);
    }

    #[test]
    fn test_reverse_empty() {
        assert!(reverse(empty::<char>()).is_empty());
    }

    #[test]
    fn test_reverse_branches_are_independent() {
        let rev = reverse(range(0, 3));
        let (rest, first) = rev.clone().advance().unwrap();
        assert_eq!(first, 2);
        assert_eq!(rest.to_array(), vec![1, 0]);
        assert_eq!(rev.to_array(), vec![2, 1, 0]);
    }

    #[test]
    fn test_reverse_branches_share_storage() {
        let rev = reverse(range(0, 4).map(|x| x.to_string()));
        let (rest, _) = rev.clone().advance().unwrap();
        assert_eq!(rest.remaining(), 3);
        assert_eq!(rev.remaining(), 4);
        assert!(Rc::ptr_eq(&rest.items, &rev.items));
    }

    #[test]
    fn test_reverse_behind_dyn_is_linear() {
        // every dyn advance clones the state; a copying state would make this quadratic
        let n = 200_000;
        let out = reverse(range(0u32, n)).to_dyn().fold(0u64, |x, acc| acc + u64::from(x));
        assert_eq!(out, u64::from(n) * u64::from(n - 1) / 2);
    }
}
