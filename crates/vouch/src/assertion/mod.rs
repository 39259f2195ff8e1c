//! The fluent assertion API.
//!
//! [`that`] wraps a value in an [`Expectation`]. Calling a check from one of
//! the family traits turns it into an [`Assertion`], which can be joined to
//! further checks with an operator or resolved with a terminal operation.
//!
//! ```
//! use vouch::{TextChecks, that};
//!
//! let assertion = that("text").contains("ex").and().ends_with("t");
//! assert!(assertion.is_ok());
//! assert_eq!(assertion.errors(), None);
//! ```
//!
//! Operators always take a right operand: an [`Expectation`] has no terminal
//! operations, so an assertion cannot end on a dangling operator.

mod boolean;
mod collection;
mod map;
mod number;
mod object;
mod temporal;
mod text;

use vouch_semantics::Operator;

use crate::engine::{Check, Node, Outcome, Report};
use crate::error::AssertionError;
use crate::global::{self, Config};
use crate::message::{MessageOverride, Resolver};
use crate::types::{Describe, Value};

pub use boolean::BooleanChecks;
pub use collection::{Collection, CollectionChecks};
pub use map::{MapChecks, MapLike};
pub use number::{NumberChecks, Numeric};
pub use object::ObjectChecks;
pub use temporal::{Chronological, TemporalChecks};
pub use text::TextChecks;

/// Types that can be checked: renderable, shareable across threads and
/// owned.
pub trait Checkable: Describe + Send + Sync + 'static {}

impl<T: Describe + Send + Sync + 'static> Checkable for T {}

/// Start an assertion about `value`.
pub fn that<T: Checkable>(value: T) -> Expectation<T> {
    that_option(Some(value))
}

/// Start an assertion about a value that may be null (`None`).
pub fn that_option<T: Checkable>(value: Option<T>) -> Expectation<T> {
    Expectation {
        root: Node::of(value),
        pending: None,
        negated: false,
    }
}

/// A value waiting for its next check.
pub struct Expectation<T> {
    root: Node<T>,
    /// The assertion so far and the operator joining it to the next check.
    pending: Option<(Node<T>, Operator)>,
    negated: bool,
}

impl<T> Clone for Expectation<T> {
    fn clone(&self) -> Self {
        Expectation {
            root: self.root.clone(),
            pending: self.pending.clone(),
            negated: self.negated,
        }
    }
}

impl<T: Checkable> Expectation<T> {
    /// Negate the next check.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Append a custom check.
    ///
    /// This is the seam the family traits are built on.
    ///
    /// ```
    /// use vouch::{Check, that};
    ///
    /// let even = Check::on_value("number.even", |n: &u32| n % 2 == 0);
    /// assert!(that(4_u32).check(even).is_ok());
    /// ```
    pub fn check(self, check: Check<T>) -> Assertion<T> {
        let base = if self.negated {
            self.root.negate_next()
        } else {
            self.root.clone()
        };
        let step = base.step(check);
        let node = attach(self.pending.as_ref(), &step);
        Assertion {
            root: self.root,
            pending: self.pending,
            step,
            node,
        }
    }
}

fn attach<T: Checkable>(pending: Option<&(Node<T>, Operator)>, step: &Node<T>) -> Node<T> {
    match pending {
        Some((chain, operator)) => chain.combine(step, *operator),
        None => step.clone(),
    }
}

/// What a failed assertion hands to a caller's error factory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// False when the value was unsuitable for a check.
    pub precondition_held: bool,
    /// The resolved failure message.
    pub expected: String,
    /// The checked values, rendered and comma-joined.
    pub actual: String,
}

/// A built assertion tree over a value of type `T`.
///
/// Operator methods borrow the assertion, so it can be reused as a shared
/// prefix of several assertions.
pub struct Assertion<T> {
    root: Node<T>,
    pending: Option<(Node<T>, Operator)>,
    /// The most recently appended check.
    step: Node<T>,
    node: Node<T>,
}

impl<T> Clone for Assertion<T> {
    fn clone(&self) -> Self {
        Assertion {
            root: self.root.clone(),
            pending: self.pending.clone(),
            step: self.step.clone(),
            node: self.node.clone(),
        }
    }
}

impl<T: Checkable> Assertion<T> {
    /// The assertion tree.
    pub fn node(&self) -> Node<T> {
        self.node.clone()
    }

    /// The value under test.
    pub fn value(&self) -> Option<&T> {
        self.root.value()
    }

    /// Join the next check on the same value with `operator`.
    pub fn then(&self, operator: Operator) -> Expectation<T> {
        Expectation {
            root: self.root.clone(),
            pending: Some((self.node.clone(), operator)),
            negated: false,
        }
    }

    pub fn and(&self) -> Expectation<T> {
        self.then(Operator::And)
    }

    pub fn or(&self) -> Expectation<T> {
        self.then(Operator::Or)
    }

    pub fn xor(&self) -> Expectation<T> {
        self.then(Operator::Xor)
    }

    pub fn nand(&self) -> Expectation<T> {
        self.then(Operator::Nand)
    }

    pub fn nor(&self) -> Expectation<T> {
        self.then(Operator::Nor)
    }

    /// Join another assertion, possibly over another type, with `operator`.
    ///
    /// The result keeps checking this assertion's value.
    pub fn combine_with<U: Checkable>(
        &self,
        other: &Assertion<U>,
        operator: Operator,
    ) -> Assertion<T> {
        let node = self.node.combine(&other.node, operator);
        Assertion {
            root: self.root.clone(),
            pending: None,
            step: node.clone(),
            node,
        }
    }

    pub fn and_with<U: Checkable>(&self, other: &Assertion<U>) -> Assertion<T> {
        self.combine_with(other, Operator::And)
    }

    pub fn or_with<U: Checkable>(&self, other: &Assertion<U>) -> Assertion<T> {
        self.combine_with(other, Operator::Or)
    }

    pub fn xor_with<U: Checkable>(&self, other: &Assertion<U>) -> Assertion<T> {
        self.combine_with(other, Operator::Xor)
    }

    pub fn nand_with<U: Checkable>(&self, other: &Assertion<U>) -> Assertion<T> {
        self.combine_with(other, Operator::Nand)
    }

    pub fn nor_with<U: Checkable>(&self, other: &Assertion<U>) -> Assertion<T> {
        self.combine_with(other, Operator::Nor)
    }

    /// Replace the message of the most recent check.
    ///
    /// Has no effect right after [`Assertion::combine_with`] and friends,
    /// which append no check of their own.
    ///
    /// ```
    /// use vouch::{MessageOverride, NumberChecks, that};
    ///
    /// let retries = that(2).is_gte(3).with_message(
    ///     MessageOverride::builder()
    ///         .template("expected at least %2$s* retries, got %1$s*")
    ///         .build(),
    /// );
    /// assert_eq!(retries.errors().as_deref(), Some("expected at least 3 retries, got 2"));
    /// ```
    pub fn with_message(self, custom: MessageOverride) -> Self {
        match self.step.with_message(custom) {
            Some(step) => {
                let node = attach(self.pending.as_ref(), &step);
                Assertion { step, node, ..self }
            }
            None => self,
        }
    }

    // =========================================================================
    // Terminal operations
    // =========================================================================

    /// Whether the assertion holds. Renders nothing.
    pub fn is_ok(&self) -> bool {
        self.node.is_ok()
    }

    /// Evaluate, capturing everything needed for a message.
    pub fn evaluate(&self) -> Outcome {
        self.node.evaluate()
    }

    /// The failure message in the default configuration, or `None` when the
    /// assertion holds.
    pub fn errors(&self) -> Option<String> {
        self.errors_with(&global::config())
    }

    pub fn errors_with(&self, config: &Config) -> Option<String> {
        if self.is_ok() {
            return None;
        }
        self.evaluate().message(config)
    }

    /// A serializable summary in the default configuration.
    pub fn report(&self) -> Report {
        self.report_with(&global::config())
    }

    pub fn report_with(&self, config: &Config) -> Report {
        self.evaluate().report(config)
    }

    /// The value under test if the assertion holds, else the failure.
    pub fn or_fail(&self) -> Result<Option<T>, AssertionError>
    where
        T: Clone,
    {
        self.or_fail_in(&global::config())
    }

    pub fn or_fail_in(&self, config: &Config) -> Result<Option<T>, AssertionError>
    where
        T: Clone,
    {
        if self.is_ok() {
            return Ok(self.value().cloned());
        }
        let outcome = self.evaluate();
        match outcome.error(config) {
            Some(error) => Err(error),
            None => Ok(self.value().cloned()),
        }
    }

    /// Like [`Assertion::or_fail`], with `template` rendered as the message
    /// of the whole assertion. Starred placeholders refer to every captured
    /// parameter in order.
    pub fn or_fail_with_message(
        &self,
        template: &str,
        arguments: Vec<Value>,
    ) -> Result<Option<T>, AssertionError>
    where
        T: Clone,
    {
        if self.is_ok() {
            return Ok(self.value().cloned());
        }
        let config = global::config();
        let outcome = self.evaluate();
        let message = Resolver::new(&config).render_str(
            template,
            &arguments,
            outcome.parameters(),
            config.locale(),
        );
        Err(outcome.error_from(message))
    }

    /// Like [`Assertion::or_fail`], with the error built by `factory`.
    pub fn or_fail_with<E>(&self, factory: impl FnOnce(Failure) -> E) -> Result<Option<T>, E>
    where
        T: Clone,
    {
        if self.is_ok() {
            return Ok(self.value().cloned());
        }
        let config = global::config();
        let outcome = self.evaluate();
        Err(factory(Failure {
            precondition_held: outcome.precondition_held(),
            expected: outcome.message(&config).unwrap_or_default(),
            actual: outcome.actual(&config),
        }))
    }

    /// The value under test if the assertion holds.
    pub fn to_option(&self) -> Option<T>
    where
        T: Clone,
    {
        if self.is_ok() { self.value().cloned() } else { None }
    }

    /// The value under test if the assertion holds and the value is not
    /// null, else `default`.
    pub fn or_default(&self, default: T) -> T
    where
        T: Clone,
    {
        self.to_option().unwrap_or(default)
    }
}
