//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the trait, the loop
//! outcome type and the sequence constructors.

// Core types
pub use crate::{DynIter, Error, Iterable, Sequenced, Step};

// Most common constructors
pub use crate::build::{
    count_up, empty, from_array, from_map, generate, optional, range, range_step,
};

// Text and std interop
pub use crate::{iter::from_std, text::split};

// Type erasure
pub use crate::dynamic::to_dyn;
