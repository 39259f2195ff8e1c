use crate::engine::Check;
use crate::keys;

use super::{Assertion, Checkable, Expectation};

/// Checks on text.
pub trait TextChecks<T> {
    fn is_empty(self) -> Assertion<T>;

    /// Empty or whitespace only.
    fn is_blank(self) -> Assertion<T>;

    /// Length in characters.
    fn has_length(self, length: usize) -> Assertion<T>;

    /// Contains `substring`, which must not be empty.
    fn contains(self, substring: &str) -> Assertion<T>;

    /// Starts with `prefix`, which must not be empty.
    fn starts_with(self, prefix: &str) -> Assertion<T>;

    /// Ends with `suffix`, which must not be empty.
    fn ends_with(self, suffix: &str) -> Assertion<T>;

    fn equals_ignoring_case(self, other: &str) -> Assertion<T>;
}

/// A check of `predicate(text, needle)` whose precondition also requires a
/// non-empty needle.
fn searching<T: AsRef<str> + Checkable>(
    key: &'static str,
    needle: &str,
    predicate: fn(&str, &str) -> bool,
) -> Check<T> {
    let searched = needle.to_string();
    let present = !needle.is_empty();
    Check::on_value(key, move |text: &T| predicate(text.as_ref(), &searched))
        .precondition(move |text: Option<&T>| text.is_some() && present)
        .argument(needle)
}

impl<T: AsRef<str> + Checkable> TextChecks<T> for Expectation<T> {
    fn is_empty(self) -> Assertion<T> {
        self.check(Check::on_value(keys::TEXT_EMPTY, |text: &T| text.as_ref().is_empty()))
    }

    fn is_blank(self) -> Assertion<T> {
        self.check(Check::on_value(keys::TEXT_BLANK, |text: &T| {
            text.as_ref().trim().is_empty()
        }))
    }

    fn has_length(self, length: usize) -> Assertion<T> {
        self.check(
            Check::on_value(keys::TEXT_LENGTH, move |text: &T| {
                text.as_ref().chars().count() == length
            })
            .argument(length),
        )
    }

    fn contains(self, substring: &str) -> Assertion<T> {
        self.check(searching(keys::TEXT_CONTAINS, substring, |text, needle| {
            text.contains(needle)
        }))
    }

    fn starts_with(self, prefix: &str) -> Assertion<T> {
        self.check(searching(keys::TEXT_STARTS_WITH, prefix, |text, needle| {
            text.starts_with(needle)
        }))
    }

    fn ends_with(self, suffix: &str) -> Assertion<T> {
        self.check(searching(keys::TEXT_ENDS_WITH, suffix, |text, needle| {
            text.ends_with(needle)
        }))
    }

    fn equals_ignoring_case(self, other: &str) -> Assertion<T> {
        let expected = other.to_lowercase();
        self.check(
            Check::on_value(keys::TEXT_EQUAL_IGNORE_CASE, move |text: &T| {
                text.as_ref().to_lowercase() == expected
            })
            .argument(other),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{that, that_option};

    #[test]
    fn contains_and_ends_with() {
        assert!(that("text").contains("ex").and().ends_with("t").is_ok());
        assert!(!that("text").contains("zz").is_ok());
    }

    #[test]
    fn empty_needle_fails_the_precondition() {
        let outcome = that("text").contains("").evaluate();
        assert!(!outcome.precondition_held());
    }

    #[test]
    fn null_text_fails_the_precondition() {
        let outcome = that_option::<String>(None).starts_with("a").evaluate();
        assert!(!outcome.precondition_held());
    }

    #[test]
    fn blank_and_length() {
        assert!(that(" \t").is_blank().is_ok());
        assert!(that("").is_empty().is_ok());
        assert!(that("été").has_length(3).is_ok());
        assert!(that(String::from("abc")).not().is_blank().is_ok());
    }

    #[test]
    fn ignoring_case() {
        assert!(that("Hello").equals_ignoring_case("hELLO").is_ok());
    }
}
