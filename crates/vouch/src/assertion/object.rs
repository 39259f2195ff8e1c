use std::sync::Arc;

use crate::engine::Check;
use crate::keys;
use crate::types::{Describe, Value};

use super::{Assertion, Checkable, Expectation};

/// Checks available on any value.
pub trait ObjectChecks<T> {
    /// The value is null (`None`).
    fn is_null(self) -> Assertion<T>;

    fn is_equal_to(self, expected: T) -> Assertion<T>
    where
        T: PartialEq;

    /// The value equals one of `candidates`.
    fn is_one_of(self, candidates: Vec<T>) -> Assertion<T>
    where
        T: PartialEq;

    /// The value satisfies `predicate`, described in messages by
    /// `description`.
    fn satisfies(
        self,
        description: &str,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Assertion<T>;
}

impl<T: Checkable> ObjectChecks<T> for Expectation<T> {
    fn is_null(self) -> Assertion<T> {
        self.check(Check::on_option(keys::OBJECT_NULL, |value: Option<&T>| {
            value.is_none()
        }))
    }

    fn is_equal_to(self, expected: T) -> Assertion<T>
    where
        T: PartialEq,
    {
        let described = expected.describe();
        let expected = Arc::new(expected);
        self.check(
            Check::on_option(keys::OBJECT_EQUAL, move |value: Option<&T>| {
                value == Some(expected.as_ref())
            })
            .argument(described),
        )
    }

    fn is_one_of(self, candidates: Vec<T>) -> Assertion<T>
    where
        T: PartialEq,
    {
        let described = Value::Array(candidates.iter().map(Describe::describe).collect());
        self.check(
            Check::on_value(keys::OBJECT_ONE_OF, move |value: &T| candidates.contains(value))
                .argument(described),
        )
    }

    fn satisfies(
        self,
        description: &str,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Assertion<T> {
        self.check(Check::on_value(keys::OBJECT_VALIDATES, predicate).argument(description))
    }
}
