//! Composable, lazily evaluated assertions with localized failure messages.
//!
//! Build an assertion tree with [`that`] and the family check traits, join
//! checks with logical operators, and only then ask whether it holds, why it
//! failed, or turn the failure into an error.
//!
//! ```
//! use vouch::{AssertionError, BooleanChecks, NumberChecks, TextChecks, that, that_option};
//!
//! assert!(that("text").contains("ex").and().ends_with("t").is_ok());
//!
//! let flag = that(true).is_true();
//! let combined = flag.and_with(&that(5).is_gt(10));
//! assert_eq!(
//!     combined.errors().as_deref(),
//!     Some("the boolean 'true' should be true AND the number '5' should be greater than '10'"),
//! );
//!
//! let missing = that_option::<String>(None).contains("ex").or_fail();
//! assert!(matches!(missing, Err(AssertionError::Precondition { .. })));
//! ```

pub mod assertion;
pub mod catalog;
pub mod engine;
mod error;
pub mod global;
pub mod keys;
pub mod message;
pub mod types;

pub use assertion::{
    Assertion, BooleanChecks, Checkable, Chronological, Collection, CollectionChecks, Expectation,
    Failure, MapChecks, MapLike, NumberChecks, Numeric, ObjectChecks, TemporalChecks, TextChecks,
    that, that_option,
};
pub use catalog::{Catalog, CatalogBuilder, CatalogWarning, LoadError, Locale, LookupError};
pub use engine::{Check, Node, Outcome, Report, Sequence, parse_operator};
pub use error::{AssertionError, ConfigurationError};
pub use global::{Config, config, default_locale, set_default_locale, with_config, with_config_mut};
pub use message::{MessageKind, MessageOverride, MessageSource, Resolver, Template};
pub use types::{CalendarField, Describe, Parameter, Temporal, TypeName, TypeTag, Value};
pub use vouch_semantics::Operator;

/// Creates a `Vec<Value>` of message arguments.
///
/// Values are converted via `Into<Value>`, so you can pass integers, floats,
/// strings or booleans directly.
///
/// # Example
///
/// ```
/// use vouch::{args, Value};
///
/// let a = args!["limit", 3, 2.5];
/// assert_eq!(a.len(), 3);
/// assert_eq!(a[1], Value::Integer(3));
/// ```
#[macro_export]
macro_rules! args {
    [] => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    [ $($value:expr),+ $(,)? ] => {
        ::std::vec![
            $( ::std::convert::Into::<$crate::Value>::into($value) ),+
        ]
    };
}
