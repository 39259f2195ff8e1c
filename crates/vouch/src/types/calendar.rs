use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{Months, TimeDelta};
use serde::{Deserialize, Serialize};

/// Calendar unit used by tolerance-based temporal checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarField {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// An amount of a calendar field, split into the two shapes chrono can add.
pub(crate) enum Shift {
    Months(Months),
    Delta(TimeDelta),
}

impl CalendarField {
    pub fn name(self) -> &'static str {
        match self {
            CalendarField::Year => "year",
            CalendarField::Month => "month",
            CalendarField::Week => "week",
            CalendarField::Day => "day",
            CalendarField::Hour => "hour",
            CalendarField::Minute => "minute",
            CalendarField::Second => "second",
        }
    }

    /// Converts `amount` units of this field into a chrono shift.
    ///
    /// Returns `None` when the amount does not fit chrono's ranges.
    pub(crate) fn shift(self, amount: u32) -> Option<Shift> {
        let amount_i64 = i64::from(amount);
        match self {
            CalendarField::Year => amount.checked_mul(12).map(|m| Shift::Months(Months::new(m))),
            CalendarField::Month => Some(Shift::Months(Months::new(amount))),
            CalendarField::Week => TimeDelta::try_weeks(amount_i64).map(Shift::Delta),
            CalendarField::Day => TimeDelta::try_days(amount_i64).map(Shift::Delta),
            CalendarField::Hour => TimeDelta::try_hours(amount_i64).map(Shift::Delta),
            CalendarField::Minute => TimeDelta::try_minutes(amount_i64).map(Shift::Delta),
            CalendarField::Second => TimeDelta::try_seconds(amount_i64).map(Shift::Delta),
        }
    }
}

impl Display for CalendarField {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
