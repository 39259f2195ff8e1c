use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::engine::Check;
use crate::keys;
use crate::types::{CalendarField, Shift};

use super::{Assertion, Checkable, Expectation};

/// Points in time that can be ordered and shifted by calendar amounts.
pub trait Chronological: PartialOrd + Clone {
    /// This point moved `amount` units of `field` forwards or backwards.
    ///
    /// Returns `None` when the result is out of range.
    fn shifted(&self, field: CalendarField, amount: u32, forward: bool) -> Option<Self>;
}

macro_rules! impl_chronological {
    ($($ty:ty),+) => {
        $(
            impl Chronological for $ty {
                fn shifted(
                    &self,
                    field: CalendarField,
                    amount: u32,
                    forward: bool,
                ) -> Option<Self> {
                    match (field.shift(amount)?, forward) {
                        (Shift::Months(months), true) => self.checked_add_months(months),
                        (Shift::Months(months), false) => self.checked_sub_months(months),
                        (Shift::Delta(delta), true) => self.checked_add_signed(delta),
                        (Shift::Delta(delta), false) => self.checked_sub_signed(delta),
                    }
                }
            }
        )+
    };
}

impl_chronological!(DateTime<Utc>, DateTime<FixedOffset>, NaiveDateTime, NaiveDate);

/// Checks on dates and times.
pub trait TemporalChecks<T> {
    fn is_after(self, other: T) -> Assertion<T>;
    fn is_after_or_equal(self, other: T) -> Assertion<T>;
    fn is_before(self, other: T) -> Assertion<T>;
    fn is_before_or_equal(self, other: T) -> Assertion<T>;

    /// Within `amount` units of `field` of `other`, in either direction.
    ///
    /// The precondition fails when the window around `other` leaves the
    /// calendar's range.
    fn is_around(self, other: T, field: CalendarField, amount: u32) -> Assertion<T>;
}

fn compared<T: Chronological + Checkable>(
    key: &'static str,
    other: T,
    predicate: fn(&T, &T) -> bool,
) -> Check<T> {
    let argument = other.describe();
    Check::on_value(key, move |value: &T| predicate(value, &other)).argument(argument)
}

impl<T: Chronological + Checkable> TemporalChecks<T> for Expectation<T> {
    fn is_after(self, other: T) -> Assertion<T> {
        self.check(compared(keys::TEMPORAL_AFTER, other, |value, other| value > other))
    }

    fn is_after_or_equal(self, other: T) -> Assertion<T> {
        self.check(compared(keys::TEMPORAL_AFTER_OR_EQUAL, other, |value, other| {
            value >= other
        }))
    }

    fn is_before(self, other: T) -> Assertion<T> {
        self.check(compared(keys::TEMPORAL_BEFORE, other, |value, other| value < other))
    }

    fn is_before_or_equal(self, other: T) -> Assertion<T> {
        self.check(compared(keys::TEMPORAL_BEFORE_OR_EQUAL, other, |value, other| {
            value <= other
        }))
    }

    fn is_around(self, other: T, field: CalendarField, amount: u32) -> Assertion<T> {
        let argument = other.describe();
        let window = other
            .shifted(field, amount, false)
            .zip(other.shifted(field, amount, true));
        let in_range = window.is_some();
        self.check(
            Check::on_value(keys::TEMPORAL_AROUND, move |value: &T| {
                window
                    .as_ref()
                    .is_some_and(|(earliest, latest)| earliest <= value && value <= latest)
            })
            .precondition(move |value: Option<&T>| value.is_some() && in_range)
            .argument(argument)
            .argument(field)
            .argument(amount),
        )
    }
}
