//! Sequence combinators
//!
//! Each combinator owns its inner sequence(s) by value and re-packages their
//! successor states on every `advance`, so composing them builds a nested
//! concrete type rather than a chain of indirections.

mod chain;
mod intersperse;
mod map;
mod product;
mod reverse;
mod take;

pub use chain::{Append, Flatten, PushFront, append, flatten, push_front};
pub use intersperse::{Intersperse, intersperse};
pub use map::{Filter, FilterMap, Map, filter, filter_map, map};
pub use product::{Product, Zip, product, zip};
pub use reverse::{Reverse, reverse};
pub use take::{Take, TakeWhile, take, take_while};
