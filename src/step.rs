/// Outcome of one body invocation in an early-exit loop: keep going with a new
/// accumulator, or stop with a final value.
///
/// `Step` is the return type of [`loop_iter`](crate::Iterable::loop_iter) bodies.
/// [`Sequenced::settle`](crate::Sequenced::settle) reuses it to split a
/// computation into its value or the context that stopped.
///
/// ```rust
/// use lazyseq::Step;
///
/// let going: Step<i32, &str> = Step::Continue(42);
/// let stopped: Step<i32, &str> = Step::Break("finished");
///
/// assert!(going.is_continue());
/// assert_eq!(stopped.break_value(), Some("finished"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step<C, B> {
    /// Keep looping with an updated accumulator
    Continue(C),
    /// Stop immediately with a final value
    Break(B),
}

impl<C, B> Step<C, B> {
    #[inline]
    pub const fn is_continue(&self) -> bool {
        matches!(self, Step::Continue(_))
    }

    #[inline]
    pub const fn is_break(&self) -> bool {
        matches!(self, Step::Break(_))
    }

    /// The final value, if the loop stopped.
    #[inline]
    pub fn break_value(self) -> Option<B> {
        match self {
            Step::Continue(_) => None,
            Step::Break(b) => Some(b),
        }
    }
}

impl<T> Step<T, T> {
    /// Extracts the carried value regardless of the variant.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::<u8, u8>::Continue(3).into_inner(), 3);
    /// assert_eq!(Step::<u8, u8>::Break(4).into_inner(), 4);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Step::Continue(t) | Step::Break(t) => t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_continue_and_is_break() {
        let c: Step<i32, &str> = Step::Continue(42);
        let b: Step<i32, &str> = Step::Break("stop");

        assert!(c.is_continue());
        assert!(!c.is_break());
        assert!(b.is_break());
        assert!(!b.is_continue());
    }

    #[test]
    fn test_break_value() {
        assert_eq!(Step::<i32, &str>::Continue(1).break_value(), None);
        assert_eq!(Step::<i32, &str>::Break("stop").break_value(), Some("stop"));
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Step::<i32, i32>::Continue(7).into_inner(), 7);
        assert_eq!(Step::<i32, i32>::Break(9).into_inner(), 9);
    }
}
