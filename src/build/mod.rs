//! Building sequences from scratch
//!
//! Generators have no inner sequence: they produce elements from a closed-form
//! rule ([`range`], [`range_step`], [`count_up`]), from stored data
//! ([`from_array`]) or from a user transition function ([`generate`]).

mod array;
mod func;
mod range;

// Re-export building blocks
pub use array::{ArrayIter, from_array};
pub use func::{Empty, Generate, Optional, empty, from_map, generate, optional};
pub use range::{CountUp, Integer, Range, RangeStep, count_up, range, range_step};
