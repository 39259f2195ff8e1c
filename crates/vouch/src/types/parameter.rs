use serde::{Deserialize, Serialize};

use super::{TypeTag, Value};

/// One captured message parameter.
///
/// Parameters are produced in traversal order while an assertion tree is
/// evaluated for a message. The checked value of every check comes first,
/// followed by that check's own arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub value: Value,
    pub tag: TypeTag,
    /// Whether this is the value under test rather than a check argument.
    pub checked: bool,
}

impl Parameter {
    /// The value under test, tagged with the family of its leaf.
    pub fn checked(value: Value, tag: TypeTag) -> Self {
        Self {
            value,
            tag,
            checked: true,
        }
    }

    /// A check argument, tagged by its own shape.
    pub fn argument(value: Value) -> Self {
        let tag = value.type_tag();
        Self {
            value,
            tag,
            checked: false,
        }
    }
}
