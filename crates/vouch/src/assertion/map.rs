use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

use crate::engine::Check;
use crate::keys;
use crate::types::Describe;

use super::{Assertion, Checkable, Expectation};

/// Maps from keys to values.
pub trait MapLike {
    type Key: Describe + Send + Sync + 'static;
    type Val: PartialEq + Describe + Send + Sync + 'static;

    fn entry_count(&self) -> usize;

    fn value_of(&self, key: &Self::Key) -> Option<&Self::Val>;
}

impl<K, V> MapLike for HashMap<K, V>
where
    K: Eq + Hash + Describe + Send + Sync + 'static,
    V: PartialEq + Describe + Send + Sync + 'static,
{
    type Key = K;
    type Val = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn value_of(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V> MapLike for BTreeMap<K, V>
where
    K: Ord + Describe + Send + Sync + 'static,
    V: PartialEq + Describe + Send + Sync + 'static,
{
    type Key = K;
    type Val = V;

    fn entry_count(&self) -> usize {
        self.len()
    }

    fn value_of(&self, key: &K) -> Option<&V> {
        self.get(key)
    }
}

/// Checks on maps.
pub trait MapChecks<T: MapLike> {
    fn has_no_entries(self) -> Assertion<T>;

    fn has_entry_count(self, count: usize) -> Assertion<T>;

    fn contains_key(self, key: T::Key) -> Assertion<T>;

    /// Maps `key` to a value equal to `value`.
    fn contains_entry(self, key: T::Key, value: T::Val) -> Assertion<T>;
}

impl<T: MapLike + Checkable> MapChecks<T> for Expectation<T> {
    fn has_no_entries(self) -> Assertion<T> {
        self.check(Check::on_value(keys::MAP_EMPTY, |map: &T| map.entry_count() == 0))
    }

    fn has_entry_count(self, count: usize) -> Assertion<T> {
        self.check(
            Check::on_value(keys::MAP_SIZE, move |map: &T| map.entry_count() == count)
                .argument(count),
        )
    }

    fn contains_key(self, key: T::Key) -> Assertion<T> {
        let argument = key.describe();
        self.check(
            Check::on_value(keys::MAP_KEY, move |map: &T| map.value_of(&key).is_some())
                .argument(argument),
        )
    }

    fn contains_entry(self, key: T::Key, value: T::Val) -> Assertion<T> {
        let key_argument = key.describe();
        let value_argument = value.describe();
        self.check(
            Check::on_value(keys::MAP_ENTRY, move |map: &T| {
                map.value_of(&key) == Some(&value)
            })
            .argument(key_argument)
            .argument(value_argument),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::that;

    fn scores() -> BTreeMap<String, u32> {
        BTreeMap::from([("ada".to_string(), 3), ("bob".to_string(), 5)])
    }

    #[test]
    fn key_and_entry_checks() {
        assert!(that(scores()).contains_key("ada".to_string()).is_ok());
        assert!(that(scores()).contains_entry("bob".to_string(), 5).is_ok());
        assert!(!that(scores()).contains_entry("bob".to_string(), 4).is_ok());
    }

    #[test]
    fn size_checks() {
        assert!(that(scores()).has_entry_count(2).is_ok());
        assert!(that(HashMap::<u8, u8>::new()).has_no_entries().is_ok());
    }
}
