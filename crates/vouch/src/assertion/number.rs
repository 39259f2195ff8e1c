use crate::engine::Check;
use crate::keys;

use super::{Assertion, Checkable, Expectation};

/// Numbers comparable with each other and with zero.
pub trait Numeric: PartialOrd + Copy {
    const ZERO: Self;
}

macro_rules! impl_numeric {
    ($zero:expr => $($ty:ty),+) => {
        $(
            impl Numeric for $ty {
                const ZERO: Self = $zero;
            }
        )+
    };
}

impl_numeric!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);
impl_numeric!(0.0 => f32, f64);

/// Checks on numbers.
///
/// Any comparison with NaN is false, so a NaN fails every check as stated
/// and passes every check under `not()`.
pub trait NumberChecks<T> {
    fn is_gt(self, bound: T) -> Assertion<T>;
    fn is_gte(self, bound: T) -> Assertion<T>;
    fn is_lt(self, bound: T) -> Assertion<T>;
    fn is_lte(self, bound: T) -> Assertion<T>;
    fn is_zero(self) -> Assertion<T>;
    fn is_positive(self) -> Assertion<T>;
    fn is_negative(self) -> Assertion<T>;

    /// Within `lower..=upper`. The precondition requires `lower <= upper`.
    fn is_between(self, lower: T, upper: T) -> Assertion<T>;
}

fn compared<T: Numeric + Checkable>(
    key: &'static str,
    bound: T,
    predicate: fn(&T, &T) -> bool,
) -> Check<T> {
    Check::on_value(key, move |value: &T| predicate(value, &bound)).argument(bound.describe())
}

impl<T: Numeric + Checkable> NumberChecks<T> for Expectation<T> {
    fn is_gt(self, bound: T) -> Assertion<T> {
        self.check(compared(keys::NUMBER_GT, bound, |value, bound| value > bound))
    }

    fn is_gte(self, bound: T) -> Assertion<T> {
        self.check(compared(keys::NUMBER_GTE, bound, |value, bound| value >= bound))
    }

    fn is_lt(self, bound: T) -> Assertion<T> {
        self.check(compared(keys::NUMBER_LT, bound, |value, bound| value < bound))
    }

    fn is_lte(self, bound: T) -> Assertion<T> {
        self.check(compared(keys::NUMBER_LTE, bound, |value, bound| value <= bound))
    }

    fn is_zero(self) -> Assertion<T> {
        self.check(Check::on_value(keys::NUMBER_ZERO, |value: &T| *value == T::ZERO))
    }

    fn is_positive(self) -> Assertion<T> {
        self.check(Check::on_value(keys::NUMBER_POSITIVE, |value: &T| *value > T::ZERO))
    }

    fn is_negative(self) -> Assertion<T> {
        self.check(Check::on_value(keys::NUMBER_NEGATIVE, |value: &T| *value < T::ZERO))
    }

    fn is_between(self, lower: T, upper: T) -> Assertion<T> {
        self.check(
            Check::on_value(keys::NUMBER_BETWEEN, move |value: &T| {
                lower <= *value && *value <= upper
            })
            .precondition(move |value: Option<&T>| value.is_some() && lower <= upper)
            .argument(lower.describe())
            .argument(upper.describe()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::that;

    #[test]
    fn comparisons() {
        assert!(that(5_i32).is_gt(4).and().is_lt(6).is_ok());
        assert!(!that(12_u8).is_gt(12).is_ok());
        assert!(that(12_u8).is_gte(12).and().is_lte(12).is_ok());
    }

    #[test]
    fn sign_checks() {
        assert!(that(0.0_f64).is_zero().is_ok());
        assert!(that(-3_i64).is_negative().is_ok());
        assert!(that(3_usize).is_positive().is_ok());
        assert!(!that(f64::NAN).is_positive().is_ok());
    }

    #[test]
    fn nan_passes_negated_comparisons() {
        assert!(that(f64::NAN).not().is_positive().is_ok());
        assert!(that(f64::NAN).not().is_gt(1.0).is_ok());
        assert!(!that(f64::NAN).is_lte(1.0).is_ok());
    }

    #[test]
    fn between_with_inverted_bounds_fails_the_precondition() {
        assert!(that(5_i32).is_between(1, 10).is_ok());
        let outcome = that(5_i32).is_between(10, 1).evaluate();
        assert!(!outcome.precondition_held());
    }
}
