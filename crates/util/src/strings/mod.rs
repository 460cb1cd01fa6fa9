//! String utilities.
//!
//! Provides the matching predicates and description splitting used when
//! emitting syntax-node definitions.

mod dedent;
mod matching;

pub use dedent::dedented_lines;
pub use matching::{contains, ends_with, starts_with};
