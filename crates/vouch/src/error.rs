//! Error types raised by terminal operations and by tree construction.

use thiserror::Error;

/// A failed assertion, converted from an evaluated outcome by a terminal
/// operation.
///
/// Precondition failures are always reported ahead of validation failures:
/// when any precondition in the tree fails, the error is a `Precondition`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssertionError {
    /// The checked value is unsuitable for the requested check (for
    /// example, null where a value is required). The check never ran.
    #[error("{message}")]
    Precondition { message: String },

    /// The check ran and its predicate did not hold.
    #[error("{message}")]
    Validation { message: String },
}

impl AssertionError {
    pub fn message(&self) -> &str {
        match self {
            AssertionError::Precondition { message } | AssertionError::Validation { message } => {
                message
            }
        }
    }
}

/// Programmer errors detected while building, before anything is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// An operator was not followed by a right operand.
    #[error("operator '{operator}' at position {position} has no right operand")]
    DanglingOperator { operator: String, position: usize },

    /// Two operators followed each other.
    #[error("operator '{operator}' at position {position} follows another operator")]
    MissingOperand { operator: String, position: usize },

    /// Two operands followed each other without an operator between them.
    #[error("operand at position {position} is not preceded by an operator")]
    MissingOperator { position: usize },

    /// An operator name that is not one of and, or, xor, nand, nor.
    #[error("unknown operator '{name}'")]
    UnknownOperator { name: String },

    /// A locale tag that is not a valid BCP-47 language identifier.
    #[error("invalid locale '{tag}'")]
    InvalidLocale { tag: String },
}
