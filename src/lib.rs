//! # Lazyseq: Persistent Pull-Based Sequences
//!
//! Build lazy sequences out of small state machines and consume them with
//! folds and early-exit loops.
//!
//! ## Core Trait
//!
//! - **[`Iterable`]**: a sequence *state*. `advance(self)` returns the next
//!   element together with the successor state, or `None` when exhausted.
//!   States are values: clone one before advancing and both copies replay the
//!   same elements.
//!
//! ## Key Features
//!
//! - **Composable**: `.map()`, `.filter()`, `.flatten()`, `.product()`,
//!   `.zip()`, `.append()`, `.intersperse()`, `.take()` and friends nest
//!   concrete state types, with no allocation per element
//! - **Consumable**: `fold`, `loop_iter` (early exit), and the [`Sequenced`]
//!   variants `fold_m`, `loop_iter_m`, `collect_m`
//! - **Erasable**: `.to_dyn()` turns any cloneable sequence into a uniform
//!   [`DynIter`] when different branches must return the same type
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let words = split("to be or not to be", " ")
//!     .filter(|w: &String| w.len() == 2)
//!     .intersperse("-".to_string());
//!
//! assert_eq!(words.to_array().concat(), "to-be-or-to-be");
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`range(start, end)`](range) - Count up by one; repeats `start` forever if `start > end`
//! - [`range_step(start, end, step)`](range_step) - Count by `step` in either direction
//! - [`count_up(start)`](count_up) - Count up forever
//! - [`from_array(vec)`](from_array) - Walk a shared array
//! - [`generate(seed, f)`](generate) - Drive a user transition function
//! - [`split(text, sep)`](split) - Pieces of a text
//!
//! **Consuming:**
//! - [`Iterable::fold`] / [`Iterable::loop_iter`] - Strict accumulation, with or without early exit
//! - [`Iterable::to_array`] / [`Iterable::bang`] - Materialize

pub mod build;
pub mod combinators;
mod drive;
mod dynamic;
mod error;
pub mod iter;
mod iterable;
pub mod prelude;
mod sequenced;
mod step;
mod text;

pub use build::*;
pub use combinators::*;
pub use drive::*;
pub use dynamic::*;
pub use error::*;
pub use iterable::*;
pub use sequenced::*;
pub use step::*;
pub use text::*;
