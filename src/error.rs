use thiserror::Error;

/// Errors raised by precondition-checked pulls.
///
/// Running out of elements is not an error for [`advance`](crate::Iterable::advance);
/// it only becomes one when the caller demanded an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("sequence is exhausted")]
    Exhausted,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message() {
        assert_eq!(Error::Exhausted.to_string(), "sequence is exhausted");
    }
}
