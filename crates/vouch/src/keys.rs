//! Message keys used by the built-in checks.
//!
//! Every check key has three catalog entries: the key itself, `<key>.not`
//! for the negated form and `<key>.pre` for a failed precondition.

pub const OBJECT_NULL: &str = "object.null";
pub const OBJECT_EQUAL: &str = "object.equal";
pub const OBJECT_ONE_OF: &str = "object.one_of";
pub const OBJECT_VALIDATES: &str = "object.validates";

pub const TEXT_EMPTY: &str = "text.empty";
pub const TEXT_BLANK: &str = "text.blank";
pub const TEXT_LENGTH: &str = "text.length";
pub const TEXT_CONTAINS: &str = "text.contains";
pub const TEXT_STARTS_WITH: &str = "text.starts_with";
pub const TEXT_ENDS_WITH: &str = "text.ends_with";
pub const TEXT_EQUAL_IGNORE_CASE: &str = "text.equal_ignore_case";

pub const NUMBER_GT: &str = "number.gt";
pub const NUMBER_GTE: &str = "number.gte";
pub const NUMBER_LT: &str = "number.lt";
pub const NUMBER_LTE: &str = "number.lte";
pub const NUMBER_ZERO: &str = "number.zero";
pub const NUMBER_POSITIVE: &str = "number.positive";
pub const NUMBER_NEGATIVE: &str = "number.negative";
pub const NUMBER_BETWEEN: &str = "number.between";

pub const BOOLEAN_TRUE: &str = "boolean.true";
pub const BOOLEAN_FALSE: &str = "boolean.false";

pub const COLLECTION_EMPTY: &str = "collection.empty";
pub const COLLECTION_SIZE: &str = "collection.size";
pub const COLLECTION_CONTAINS: &str = "collection.contains";
pub const COLLECTION_CONTAINS_ALL: &str = "collection.contains_all";
pub const COLLECTION_CONTAINS_ANY: &str = "collection.contains_any";

pub const MAP_EMPTY: &str = "map.empty";
pub const MAP_SIZE: &str = "map.size";
pub const MAP_KEY: &str = "map.key";
pub const MAP_ENTRY: &str = "map.entry";

pub const TEMPORAL_AFTER: &str = "temporal.after";
pub const TEMPORAL_AFTER_OR_EQUAL: &str = "temporal.after_or_equal";
pub const TEMPORAL_BEFORE: &str = "temporal.before";
pub const TEMPORAL_BEFORE_OR_EQUAL: &str = "temporal.before_or_equal";
pub const TEMPORAL_AROUND: &str = "temporal.around";

/// Every check key above.
pub const ALL: &[&str] = &[
    OBJECT_NULL,
    OBJECT_EQUAL,
    OBJECT_ONE_OF,
    OBJECT_VALIDATES,
    TEXT_EMPTY,
    TEXT_BLANK,
    TEXT_LENGTH,
    TEXT_CONTAINS,
    TEXT_STARTS_WITH,
    TEXT_ENDS_WITH,
    TEXT_EQUAL_IGNORE_CASE,
    NUMBER_GT,
    NUMBER_GTE,
    NUMBER_LT,
    NUMBER_LTE,
    NUMBER_ZERO,
    NUMBER_POSITIVE,
    NUMBER_NEGATIVE,
    NUMBER_BETWEEN,
    BOOLEAN_TRUE,
    BOOLEAN_FALSE,
    COLLECTION_EMPTY,
    COLLECTION_SIZE,
    COLLECTION_CONTAINS,
    COLLECTION_CONTAINS_ALL,
    COLLECTION_CONTAINS_ANY,
    MAP_EMPTY,
    MAP_SIZE,
    MAP_KEY,
    MAP_ENTRY,
    TEMPORAL_AFTER,
    TEMPORAL_AFTER_OR_EQUAL,
    TEMPORAL_BEFORE,
    TEMPORAL_BEFORE_OR_EQUAL,
    TEMPORAL_AROUND,
];

/// Decimal separator used when rendering decimal numbers.
pub const DECIMAL_SEPARATOR: &str = "format.decimal_separator";
/// Text rendered for null values.
pub const NULL: &str = "format.null";

/// Catalog key of an operator's connective, e.g. `operator.and`.
pub fn operator(name: &str) -> String {
    format!("operator.{name}")
}

/// Catalog key explaining a failed combination of unchecked values, e.g.
/// `operator.nor.failed`.
pub fn operator_failed(name: &str) -> String {
    format!("operator.{name}.failed")
}
