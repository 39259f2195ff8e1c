use serde::{Deserialize, Serialize};

/// Semantic category of a checked value or message argument.
///
/// The tag drives how a value is rendered inside a message. It is never
/// consulted for control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeTag {
    Boolean,
    Enumeration,
    IntegerNumber,
    DecimalNumber,
    /// An instant on the UTC timeline, rendered with a fixed format.
    Date,
    CalendarField,
    Character,
    Text,
    ClassRef,
    Array,
    Iterable,
    Map,
    /// A calendar date, wall-clock time or offset date-time.
    Temporal,
    Throwable,
    Unknown,
}
