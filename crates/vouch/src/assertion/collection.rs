use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::Hash;
use std::sync::Arc;

use crate::engine::Check;
use crate::keys;
use crate::types::{Describe, Value};

use super::{Assertion, Checkable, Expectation};

/// Containers whose elements can be searched.
pub trait Collection {
    type Item: PartialEq + Describe + Send + Sync + 'static;

    fn element_count(&self) -> usize;

    fn contains_item(&self, item: &Self::Item) -> bool;
}

impl<E: PartialEq + Describe + Send + Sync + 'static> Collection for Vec<E> {
    type Item = E;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: PartialEq + Describe + Send + Sync + 'static, const N: usize> Collection for [E; N] {
    type Item = E;

    fn element_count(&self) -> usize {
        N
    }

    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: PartialEq + Describe + Send + Sync + 'static> Collection for VecDeque<E> {
    type Item = E;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: Ord + Describe + Send + Sync + 'static> Collection for BTreeSet<E> {
    type Item = E;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

impl<E: Eq + Hash + Describe + Send + Sync + 'static> Collection for HashSet<E> {
    type Item = E;

    fn element_count(&self) -> usize {
        self.len()
    }

    fn contains_item(&self, item: &E) -> bool {
        self.contains(item)
    }
}

/// Checks on collections and arrays.
pub trait CollectionChecks<T: Collection> {
    fn has_no_elements(self) -> Assertion<T>;

    fn has_size(self, size: usize) -> Assertion<T>;

    fn contains_element(self, element: T::Item) -> Assertion<T>;

    /// Contains every one of `elements`, which must not be empty.
    fn contains_all(self, elements: Vec<T::Item>) -> Assertion<T>;

    /// Contains at least one of `elements`, which must not be empty.
    fn contains_any(self, elements: Vec<T::Item>) -> Assertion<T>;
}

fn described<E: Describe>(elements: &[E]) -> Value {
    Value::Array(elements.iter().map(Describe::describe).collect())
}

impl<T: Collection + Checkable> CollectionChecks<T> for Expectation<T> {
    fn has_no_elements(self) -> Assertion<T> {
        self.check(Check::on_value(keys::COLLECTION_EMPTY, |items: &T| {
            items.element_count() == 0
        }))
    }

    fn has_size(self, size: usize) -> Assertion<T> {
        self.check(
            Check::on_value(keys::COLLECTION_SIZE, move |items: &T| items.element_count() == size)
                .argument(size),
        )
    }

    fn contains_element(self, element: T::Item) -> Assertion<T> {
        let argument = element.describe();
        self.check(
            Check::on_value(keys::COLLECTION_CONTAINS, move |items: &T| {
                items.contains_item(&element)
            })
            .argument(argument),
        )
    }

    fn contains_all(self, elements: Vec<T::Item>) -> Assertion<T> {
        let argument = described(&elements);
        let elements = Arc::new(elements);
        let searched = Arc::clone(&elements);
        self.check(
            Check::on_value(keys::COLLECTION_CONTAINS_ALL, move |items: &T| {
                searched.iter().all(|element| items.contains_item(element))
            })
            .precondition(move |items: Option<&T>| items.is_some() && !elements.is_empty())
            .argument(argument),
        )
    }

    fn contains_any(self, elements: Vec<T::Item>) -> Assertion<T> {
        let argument = described(&elements);
        let elements = Arc::new(elements);
        let searched = Arc::clone(&elements);
        self.check(
            Check::on_value(keys::COLLECTION_CONTAINS_ANY, move |items: &T| {
                searched.iter().any(|element| items.contains_item(element))
            })
            .precondition(move |items: Option<&T>| items.is_some() && !elements.is_empty())
            .argument(argument),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assertion::{that, that_option};

    #[test]
    fn vector_checks() {
        let numbers = vec![1_i32, 2, 3];
        assert!(that(numbers.clone()).has_size(3).and().contains_element(2).is_ok());
        assert!(that(numbers.clone()).contains_all(vec![1, 3]).is_ok());
        assert!(!that(numbers).contains_any(vec![7, 8]).is_ok());
    }

    #[test]
    fn arrays_and_sets() {
        assert!(that([1_u8, 2]).not().has_no_elements().is_ok());
        let set: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert!(that(set).contains_element("b").is_ok());
    }

    #[test]
    fn empty_search_list_fails_the_precondition() {
        let outcome = that(vec![1_i32]).contains_all(Vec::new()).evaluate();
        assert!(!outcome.precondition_held());
        let outcome = that_option::<Vec<i32>>(None).has_size(0).evaluate();
        assert!(!outcome.precondition_held());
    }
}
