use std::ops::Range;
use std::sync::Arc;

use vouch_semantics::Operator;

use super::MessageOverride;

/// Which template variant of a message key applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// The check as stated: `key`.
    Expected,
    /// The check under negation: `key.not`.
    Negated,
    /// The check's precondition failed: `key.pre`.
    Precondition,
}

impl MessageKind {
    /// Catalog key for `key` under this kind.
    pub fn catalog_key(self, key: &str) -> String {
        match self {
            MessageKind::Expected => key.to_string(),
            MessageKind::Negated => format!("{key}.not"),
            MessageKind::Precondition => format!("{key}.pre"),
        }
    }
}

/// Everything needed to render the message of an evaluated tree.
///
/// Produced by a capturing evaluation; parameter ranges index into the
/// outcome's flat parameter list.
#[derive(Debug, Clone)]
pub enum MessageSource {
    Check {
        key: &'static str,
        kind: MessageKind,
        custom: Option<Arc<MessageOverride>>,
        parameters: Range<usize>,
    },
    Composite {
        operator: Operator,
        left: Box<MessageSource>,
        right: Box<MessageSource>,
        /// Whether the left branch is itself a combination.
        left_grouped: bool,
        right_grouped: bool,
    },
    /// A combination that failed without any check on either side.
    Unsatisfied { operator: Operator },
}

impl MessageSource {
    /// Whether this message joins two messages with a connective.
    pub fn is_composite(&self) -> bool {
        matches!(self, MessageSource::Composite { .. })
    }
}
