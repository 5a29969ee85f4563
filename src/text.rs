//! Splitting text into a lazy sequence of pieces.

use std::rc::Rc;

use crate::Iterable;

/// Pieces of a text between occurrences of a separator.
///
/// `cursor` is the byte offset where the next piece starts, or `None` once the
/// final piece has been produced. An empty separator splits into one piece per
/// `char`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split {
    text: Rc<str>,
    sep: Rc<str>,
    cursor: Option<usize>,
}

/// Create a sequence of the pieces of `text` separated by `sep`.
///
/// A text ending with the separator produces a trailing empty piece.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(split("ab,c,", ",").to_array(), vec!["ab", "c", ""]);
/// assert_eq!(split("abc", "").to_array(), vec!["a", "b", "c"]);
/// ```
pub fn split(text: impl Into<Rc<str>>, sep: impl Into<Rc<str>>) -> Split {
    Split {
        text: text.into(),
        sep: sep.into(),
        cursor: Some(0),
    }
}

impl Iterable for Split {
    type Item = String;

    fn advance(self) -> Option<(Self, String)> {
        let start = self.cursor?;
        let rest = &self.text[start..];

        if self.sep.is_empty() {
            let width = rest.chars().next()?.len_utf8();
            let piece = rest[..width].to_string();
            return Some((
                Split {
                    cursor: Some(start + width),
                    ..self
                },
                piece,
            ));
        }

        match rest.find(&*self.sep) {
            None => {
                let piece = rest.to_string();
                Some((Split { cursor: None, ..self }, piece))
            }
            Some(offset) => {
                let piece = rest[..offset].to_string();
                let cursor = Some(start + offset + self.sep.len());
                Some((Split { cursor, ..self }, piece))
            }
        }
    }
}
