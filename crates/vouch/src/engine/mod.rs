//! The evaluation engine: immutable trees of checks and their evaluation.

mod check;
mod context;
mod evaluator;
mod node;
mod outcome;
mod sequence;

pub use check::{Check, Precondition, Validator};
pub use node::Node;
pub use outcome::{Outcome, Report};
pub use sequence::{Sequence, parse_operator};
