//! Integer counters: [`Range`], [`RangeStep`] and [`CountUp`].
//!
//! All cursors advance with wrapping arithmetic. A stepped range pre-computes
//! an end that the cursor hits exactly, and wrapping keeps that true even when
//! the aligned end lies past the type's bounds.

use std::fmt::Debug;

use crate::Iterable;

/// Primitive integers usable as counters.
pub trait Integer: Copy + Eq + Ord + Debug {
    const ZERO: Self;
    const ONE: Self;

    /// `self + step`, wrapping on overflow.
    fn forward(self, step: Self) -> Self;

    /// The first value of `start + n * step` (n >= 0) at or beyond `end` in the
    /// direction of `step`; `end` itself when `step` is zero.
    fn aligned_end(start: Self, end: Self, step: Self) -> Self;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Integer for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn forward(self, step: Self) -> Self {
                    self.wrapping_add(step)
                }

                fn aligned_end(start: Self, end: Self, step: Self) -> Self {
                    let (s, e, st) = (start as i128, end as i128, step as i128);
                    let n = if st == 0 {
                        return end;
                    } else if st > 0 && e > s {
                        (e - s + st - 1) / st
                    } else if st < 0 && e < s {
                        (s - e - st - 1) / -st
                    } else {
                        0
                    };
                    (s + n * st) as $t
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Counts from `start` up to (excluding) `end` by one.
///
/// # Non-terminating when `start > end`
///
/// A range whose start lies past its end does not count downwards and is not
/// empty: it repeats `start` forever. Use [`range_step`] with a negative step
/// to count down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range<T> {
    next: T,
    end: T,
    step: T,
}

/// Create a [`Range`] over `start..end`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range(0, 5).to_array(), vec![0, 1, 2, 3, 4]);
/// assert!(range(5, 5).is_empty());
/// ```
pub fn range<T: Integer>(start: T, end: T) -> Range<T> {
    let step = if start <= end { T::ONE } else { T::ZERO };
    Range { next: start, end, step }
}

impl<T: Integer> Iterable for Range<T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        if self.next == self.end {
            return None;
        }
        let item = self.next;
        Some((Range { next: item.forward(self.step), ..self }, item))
    }
}

/// Counts from `start` towards `end` in increments of `step`.
///
/// `end` is exclusive for either sign of `step`. A zero step repeats `start`
/// forever unless `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeStep<T> {
    next: T,
    end: T,
    step: T,
}

/// Create a [`RangeStep`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(range_step(0, 10, 3).to_array(), vec![0, 3, 6, 9]);
/// assert_eq!(range_step(10, 0, -3).to_array(), vec![10, 7, 4, 1]);
/// ```
pub fn range_step<T: Integer>(start: T, end: T, step: T) -> RangeStep<T> {
    RangeStep {
        next: start,
        end: T::aligned_end(start, end, step),
        step,
    }
}

impl<T: Integer> Iterable for RangeStep<T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        if self.next == self.end {
            return None;
        }
        let item = self.next;
        Some((RangeStep { next: item.forward(self.step), ..self }, item))
    }
}

/// Counts up from `start` by one, forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp<T> {
    next: T,
}

pub fn count_up<T: Integer>(start: T) -> CountUp<T> {
    CountUp { next: start }
}

impl<T: Integer> Iterable for CountUp<T> {
    type Item = T;

    fn advance(self) -> Option<(Self, T)> {
        let item = self.next;
        Some((CountUp { next: item.forward(T::ONE) }, item))
    }
}
