use std::fmt::{Display, Formatter, Result as FmtResult};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{CalendarField, TypeTag};

/// A dynamic value captured for message rendering.
///
/// Checked values and message arguments are converted to `Value` only when a
/// message has to be produced, so building and evaluating an assertion never
/// pays for it.
///
/// # Example
///
/// ```
/// use vouch::{TypeTag, Value};
///
/// let count: Value = 42.into();
/// assert_eq!(count.type_tag(), TypeTag::IntegerNumber);
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.to_string(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An absent value.
    Null,

    Bool(bool),

    /// Any integer; wide enough for every primitive integer except `u128`.
    Integer(i128),

    Decimal(f64),

    Char(char),

    Text(String),

    /// An instant, rendered as `YYYY/MM/DD HH:MM:SS` in UTC.
    Date(DateTime<Utc>),

    CalendarField(CalendarField),

    /// A date, time or date-time, rendered in ISO-8601.
    Temporal(Temporal),

    /// An enumeration constant, rendered by name.
    Enum(String),

    /// A type, rendered by its name.
    Class(String),

    Array(Vec<Value>),

    Iterable(Vec<Value>),

    /// Key/value pairs in rendering order.
    Map(Vec<(Value, Value)>),

    /// An error, rendered by its display text.
    Error(String),

    /// Anything else, rendered by its debug text.
    Unknown(String),
}

/// Calendar values without a fixed rendering pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Temporal {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
    Offset(DateTime<FixedOffset>),
}

impl Value {
    /// The semantic category this value renders as.
    pub fn type_tag(&self) -> TypeTag {
        match self {
            Value::Null | Value::Unknown(_) => TypeTag::Unknown,
            Value::Bool(_) => TypeTag::Boolean,
            Value::Integer(_) => TypeTag::IntegerNumber,
            Value::Decimal(_) => TypeTag::DecimalNumber,
            Value::Char(_) => TypeTag::Character,
            Value::Text(_) => TypeTag::Text,
            Value::Date(_) => TypeTag::Date,
            Value::CalendarField(_) => TypeTag::CalendarField,
            Value::Temporal(_) => TypeTag::Temporal,
            Value::Enum(_) => TypeTag::Enumeration,
            Value::Class(_) => TypeTag::ClassRef,
            Value::Array(_) => TypeTag::Array,
            Value::Iterable(_) => TypeTag::Iterable,
            Value::Map(_) => TypeTag::Map,
            Value::Error(_) => TypeTag::Throwable,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a decimal, widening integers.
    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Value::Decimal(n) => Some(*n),
            Value::Integer(n) => Some(*n as f64),
            _ => None,
        }
    }
}

impl Display for Temporal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Temporal::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Temporal::Time(time) => write!(f, "{}", time.format("%H:%M:%S")),
            Temporal::DateTime(date_time) => write!(f, "{}", date_time.format("%Y-%m-%dT%H:%M:%S")),
            Temporal::Offset(date_time) => {
                write!(f, "{}", date_time.format("%Y-%m-%dT%H:%M:%S%:z"))
            }
        }
    }
}

/// Renders with the default (English) style: `.` as decimal separator and
/// `null` for absent values. Locale-aware rendering lives in the message
/// module.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Decimal(n) => write!(f, "{n}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::Text(s) | Value::Enum(s) | Value::Class(s) | Value::Error(s) => f.write_str(s),
            Value::Unknown(s) => f.write_str(s),
            Value::Date(instant) => write!(f, "{}", instant.format("%Y/%m/%d %H:%M:%S")),
            Value::CalendarField(field) => write!(f, "{field}"),
            Value::Temporal(temporal) => write!(f, "{temporal}"),
            Value::Array(items) | Value::Iterable(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}={value}")?;
                }
                f.write_str("}")
            }
        }
    }
}

// From implementations for common types

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i128::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(i128::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i128::from(n))
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(i128::from(n))
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i128)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Decimal(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Decimal(n)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Char(c)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<CalendarField> for Value {
    fn from(field: CalendarField) -> Self {
        Value::CalendarField(field)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
