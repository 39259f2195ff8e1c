//! Classification of raw values into [`Value`]s and [`TypeTag`]s.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::error::Error;
use std::io;
use std::time::SystemTime;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::{CalendarField, Temporal, TypeTag, Value};

/// A value that can be checked and rendered inside a message.
///
/// Implement this for your own types to check them with the generic object
/// checks. Enumerations typically describe themselves by name:
///
/// ```
/// use vouch::{Describe, TypeTag, Value};
///
/// #[derive(PartialEq)]
/// enum Suit {
///     Hearts,
///     Spades,
/// }
///
/// impl Describe for Suit {
///     const TAG: TypeTag = TypeTag::Enumeration;
///
///     fn describe(&self) -> Value {
///         let name = match self {
///             Suit::Hearts => "Hearts",
///             Suit::Spades => "Spades",
///         };
///         Value::Enum(name.to_string())
///     }
/// }
/// ```
pub trait Describe {
    /// Semantic category of every value of this type.
    const TAG: TypeTag;

    /// Convert to a renderable value.
    fn describe(&self) -> Value;
}

/// The name of a Rust type, checked and rendered as a class reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeName(pub &'static str);

impl TypeName {
    pub fn of<T: ?Sized>() -> Self {
        TypeName(type_name::<T>())
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    const TAG: TypeTag = T::TAG;

    fn describe(&self) -> Value {
        (**self).describe()
    }
}

impl Describe for bool {
    const TAG: TypeTag = TypeTag::Boolean;

    fn describe(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! describe_integers {
    ($($ty:ty),+) => {
        $(
            impl Describe for $ty {
                const TAG: TypeTag = TypeTag::IntegerNumber;

                fn describe(&self) -> Value {
                    Value::Integer(*self as i128)
                }
            }
        )+
    };
}

describe_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl Describe for f32 {
    const TAG: TypeTag = TypeTag::DecimalNumber;

    fn describe(&self) -> Value {
        Value::Decimal(f64::from(*self))
    }
}

impl Describe for f64 {
    const TAG: TypeTag = TypeTag::DecimalNumber;

    fn describe(&self) -> Value {
        Value::Decimal(*self)
    }
}

impl Describe for char {
    const TAG: TypeTag = TypeTag::Character;

    fn describe(&self) -> Value {
        Value::Char(*self)
    }
}

impl Describe for str {
    const TAG: TypeTag = TypeTag::Text;

    fn describe(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl Describe for String {
    const TAG: TypeTag = TypeTag::Text;

    fn describe(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl Describe for Cow<'_, str> {
    const TAG: TypeTag = TypeTag::Text;

    fn describe(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl<T: Describe> Describe for [T] {
    const TAG: TypeTag = TypeTag::Array;

    fn describe(&self) -> Value {
        Value::Array(self.iter().map(Describe::describe).collect())
    }
}

impl<T: Describe, const N: usize> Describe for [T; N] {
    const TAG: TypeTag = TypeTag::Array;

    fn describe(&self) -> Value {
        Value::Array(self.iter().map(Describe::describe).collect())
    }
}

impl<T: Describe> Describe for Vec<T> {
    const TAG: TypeTag = TypeTag::Iterable;

    fn describe(&self) -> Value {
        Value::Iterable(self.iter().map(Describe::describe).collect())
    }
}

impl<T: Describe> Describe for VecDeque<T> {
    const TAG: TypeTag = TypeTag::Iterable;

    fn describe(&self) -> Value {
        Value::Iterable(self.iter().map(Describe::describe).collect())
    }
}

impl<T: Describe> Describe for BTreeSet<T> {
    const TAG: TypeTag = TypeTag::Iterable;

    fn describe(&self) -> Value {
        Value::Iterable(self.iter().map(Describe::describe).collect())
    }
}

/// Hash sets have no stable order; elements are sorted by their rendering.
impl<T: Describe, S> Describe for HashSet<T, S> {
    const TAG: TypeTag = TypeTag::Iterable;

    fn describe(&self) -> Value {
        let mut items: Vec<Value> = self.iter().map(Describe::describe).collect();
        items.sort_by_cached_key(ToString::to_string);
        Value::Iterable(items)
    }
}

impl<K: Describe, V: Describe> Describe for BTreeMap<K, V> {
    const TAG: TypeTag = TypeTag::Map;

    fn describe(&self) -> Value {
        Value::Map(self.iter().map(|(k, v)| (k.describe(), v.describe())).collect())
    }
}

/// Hash maps have no stable order; entries are sorted by rendered key.
impl<K: Describe, V: Describe, S> Describe for HashMap<K, V, S> {
    const TAG: TypeTag = TypeTag::Map;

    fn describe(&self) -> Value {
        let mut entries: Vec<(Value, Value)> = self
            .iter()
            .map(|(k, v)| (k.describe(), v.describe()))
            .collect();
        entries.sort_by_cached_key(|(key, _)| key.to_string());
        Value::Map(entries)
    }
}

impl Describe for DateTime<Utc> {
    const TAG: TypeTag = TypeTag::Date;

    fn describe(&self) -> Value {
        Value::Date(*self)
    }
}

impl Describe for SystemTime {
    const TAG: TypeTag = TypeTag::Date;

    fn describe(&self) -> Value {
        Value::Date(DateTime::<Utc>::from(*self))
    }
}

impl Describe for NaiveDate {
    const TAG: TypeTag = TypeTag::Temporal;

    fn describe(&self) -> Value {
        Value::Temporal(Temporal::Date(*self))
    }
}

impl Describe for NaiveTime {
    const TAG: TypeTag = TypeTag::Temporal;

    fn describe(&self) -> Value {
        Value::Temporal(Temporal::Time(*self))
    }
}

impl Describe for NaiveDateTime {
    const TAG: TypeTag = TypeTag::Temporal;

    fn describe(&self) -> Value {
        Value::Temporal(Temporal::DateTime(*self))
    }
}

impl Describe for DateTime<FixedOffset> {
    const TAG: TypeTag = TypeTag::Temporal;

    fn describe(&self) -> Value {
        Value::Temporal(Temporal::Offset(*self))
    }
}

impl Describe for CalendarField {
    const TAG: TypeTag = TypeTag::CalendarField;

    fn describe(&self) -> Value {
        Value::CalendarField(*self)
    }
}

impl Describe for TypeName {
    const TAG: TypeTag = TypeTag::ClassRef;

    fn describe(&self) -> Value {
        Value::Class(self.0.to_string())
    }
}

impl Describe for io::Error {
    const TAG: TypeTag = TypeTag::Throwable;

    fn describe(&self) -> Value {
        Value::Error(self.to_string())
    }
}

impl Describe for dyn Error + Send + Sync {
    const TAG: TypeTag = TypeTag::Throwable;

    fn describe(&self) -> Value {
        Value::Error(self.to_string())
    }
}

impl Describe for Value {
    const TAG: TypeTag = TypeTag::Unknown;

    fn describe(&self) -> Value {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_map_entries_are_sorted_by_key() {
        let map = HashMap::from([("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(map.describe().to_string(), "{a=1, b=2, c=3}");
    }

    #[test]
    fn nested_collections_render_recursively() {
        let nested = vec![vec![1, 2], vec![3]];
        assert_eq!(nested.describe().to_string(), "[[1, 2], [3]]");
        assert_eq!(<Vec<Vec<i32>>>::TAG, TypeTag::Iterable);
    }

    #[test]
    fn references_share_the_tag_of_their_target() {
        assert_eq!(<&str>::TAG, TypeTag::Text);
        assert_eq!(<&[u8]>::TAG, TypeTag::Array);
    }

    #[test]
    fn type_name_renders_as_class() {
        let value = TypeName::of::<String>().describe();
        assert_eq!(value.type_tag(), TypeTag::ClassRef);
        assert!(value.to_string().ends_with("String"));
    }
}
