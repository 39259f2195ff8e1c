use crate::engine::Check;
use crate::keys;

use super::{Assertion, Expectation};

/// Checks on booleans.
pub trait BooleanChecks {
    fn is_true(self) -> Assertion<bool>;
    fn is_false(self) -> Assertion<bool>;
}

impl BooleanChecks for Expectation<bool> {
    fn is_true(self) -> Assertion<bool> {
        self.check(Check::on_value(keys::BOOLEAN_TRUE, |value: &bool| *value))
    }

    fn is_false(self) -> Assertion<bool> {
        self.check(Check::on_value(keys::BOOLEAN_FALSE, |value: &bool| !*value))
    }
}
