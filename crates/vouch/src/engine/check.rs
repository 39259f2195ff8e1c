//! A single check: predicate, precondition and message metadata.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use crate::message::MessageOverride;
use crate::types::Value;

/// Decides whether the checked value is suitable for the check.
pub type Precondition<T> = Arc<dyn Fn(Option<&T>) -> bool + Send + Sync>;

/// Decides whether the check holds, given the value and whether the check
/// is negated.
pub type Validator<T> = Arc<dyn Fn(Option<&T>, bool) -> bool + Send + Sync>;

/// One check over a value of type `T`, ready to be appended to a node.
///
/// # Example
///
/// ```
/// use vouch::{Check, Node, TypeTag};
///
/// let even = Check::on_value("number.even", |n: &i32| n % 2 == 0);
/// let node = Node::leaf(Some(4), TypeTag::IntegerNumber).step(even);
/// assert!(node.is_ok());
/// ```
pub struct Check<T> {
    pub(crate) precondition: Precondition<T>,
    pub(crate) validator: Validator<T>,
    pub(crate) negated: bool,
    pub(crate) key: &'static str,
    pub(crate) arguments: Vec<Value>,
    pub(crate) custom: Option<Arc<MessageOverride>>,
}

impl<T> Clone for Check<T> {
    fn clone(&self) -> Self {
        Check {
            precondition: Arc::clone(&self.precondition),
            validator: Arc::clone(&self.validator),
            negated: self.negated,
            key: self.key,
            arguments: self.arguments.clone(),
            custom: self.custom.clone(),
        }
    }
}

impl<T> Debug for Check<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Check")
            .field("key", &self.key)
            .field("negated", &self.negated)
            .field("arguments", &self.arguments)
            .field("custom", &self.custom)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Check<T> {
    /// A check with a raw validator and no precondition.
    ///
    /// The validator receives the negation flag and must apply it itself.
    pub fn new(
        key: &'static str,
        validator: impl Fn(Option<&T>, bool) -> bool + Send + Sync + 'static,
    ) -> Self {
        Check {
            precondition: Arc::new(|_| true),
            validator: Arc::new(validator),
            negated: false,
            key,
            arguments: Vec::new(),
            custom: None,
        }
    }

    /// A check of a predicate over a present value. A null value fails the
    /// precondition.
    pub fn on_value(
        key: &'static str,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Self {
        Check::new(key, move |value, negated| {
            value.is_some_and(|value| predicate(value) != negated)
        })
        .precondition(|value| value.is_some())
    }

    /// A check of a predicate over a possibly null value. The precondition
    /// always holds.
    pub fn on_option(
        key: &'static str,
        predicate: impl Fn(Option<&T>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Check::new(key, move |value, negated| predicate(value) != negated)
    }

    /// Replace the precondition.
    pub fn precondition(
        mut self,
        precondition: impl Fn(Option<&T>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.precondition = Arc::new(precondition);
        self
    }

    pub fn negated(mut self, negated: bool) -> Self {
        self.negated = negated;
        self
    }

    /// Append an argument rendered by `%2$s*`, `%3$s*`, ... in messages.
    pub fn argument(mut self, argument: impl Into<Value>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    pub fn arguments(mut self, arguments: Vec<Value>) -> Self {
        self.arguments = arguments;
        self
    }

    /// Replace this check's catalog message.
    pub fn message(mut self, custom: MessageOverride) -> Self {
        self.custom = Some(Arc::new(custom));
        self
    }
}

impl<T> Check<T> {
    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    pub(crate) fn with_custom(&self, custom: Arc<MessageOverride>) -> Self {
        Check {
            custom: Some(custom),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Node;

    #[test]
    fn builder_sets_key_and_negation() {
        let check = Check::on_value("number.positive", |n: &i32| *n > 0);
        assert_eq!(check.key(), "number.positive");
        assert!(!check.is_negated());
        assert!(check.negated(true).is_negated());
    }

    #[test]
    fn negation_flips_the_predicate_but_not_the_precondition() {
        let positive = Check::on_value("number.positive", |n: &i32| *n > 0).negated(true);
        assert!(Node::of(Some(-1_i32)).step(positive.clone()).is_ok());
        assert!(!Node::of(Some(1_i32)).step(positive.clone()).is_ok());
        assert!(!Node::<i32>::of(None).step(positive).is_ok());
    }
}
