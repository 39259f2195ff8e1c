//! Immutable assertion trees.

use std::fmt::{self, Debug, Formatter};
use std::sync::Arc;

use tracing::trace;
use vouch_semantics::Operator;

use crate::message::MessageOverride;
use crate::types::{Describe, TypeTag};

use super::check::Check;
use super::context::EvalContext;
use super::evaluator::{Evaluate, evaluate_node};
use super::outcome::Outcome;

/// A handle to an immutable assertion tree over a value of type `T`.
///
/// Cloning is cheap. Appending a check or combining returns a new node and
/// leaves this one untouched, so a node can serve as a shared prefix for any
/// number of assertions, on any number of threads.
pub struct Node<T> {
    kind: Arc<NodeKind<T>>,
    /// Negate the next appended check. Not part of the shared tree.
    negate_next: bool,
}

pub(crate) enum NodeKind<T> {
    /// The value under test.
    Creation { value: Option<T>, tag: TypeTag },
    /// A check appended to a previous node.
    Check { previous: Node<T>, check: Check<T> },
    /// Two trees joined by an operator. The right tree may check a value of
    /// another type.
    Combine {
        left: Node<T>,
        right: Arc<dyn Evaluate>,
        operator: Operator,
    },
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            kind: Arc::clone(&self.kind),
            negate_next: self.negate_next,
        }
    }
}

impl<T> Debug for Node<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind.as_ref() {
            NodeKind::Creation { tag, .. } => {
                f.debug_struct("Creation").field("tag", tag).finish_non_exhaustive()
            }
            NodeKind::Check { previous, check } => f
                .debug_struct("Check")
                .field("previous", previous)
                .field("check", check)
                .finish(),
            NodeKind::Combine { left, operator, .. } => f
                .debug_struct("Combine")
                .field("left", left)
                .field("operator", operator)
                .finish_non_exhaustive(),
        }
    }
}

impl<T> Node<T> {
    pub(crate) fn kind(&self) -> &NodeKind<T> {
        &self.kind
    }

    /// The value under test, found at the root of the tree.
    pub fn value(&self) -> Option<&T> {
        match self.root_kind() {
            NodeKind::Creation { value, .. } => value.as_ref(),
            _ => None,
        }
    }

    /// Semantic category of the value under test.
    pub fn tag(&self) -> TypeTag {
        match self.root_kind() {
            NodeKind::Creation { tag, .. } => *tag,
            _ => TypeTag::Unknown,
        }
    }

    fn root_kind(&self) -> &NodeKind<T> {
        let mut node = self;
        loop {
            match node.kind.as_ref() {
                NodeKind::Check { previous, .. } => node = previous,
                NodeKind::Combine { left, .. } => node = left,
                creation @ NodeKind::Creation { .. } => return creation,
            }
        }
    }

    pub fn is_combination(&self) -> bool {
        matches!(self.kind.as_ref(), NodeKind::Combine { .. })
    }

    /// Toggle negation of the next appended check only.
    pub fn negate_next(&self) -> Node<T> {
        Node {
            kind: Arc::clone(&self.kind),
            negate_next: !self.negate_next,
        }
    }
}

impl<T: Describe + Send + Sync + 'static> Node<T> {
    /// A tree holding only the value under test.
    pub fn leaf(value: Option<T>, tag: TypeTag) -> Node<T> {
        Node {
            kind: Arc::new(NodeKind::Creation { value, tag }),
            negate_next: false,
        }
    }

    /// A tree holding only `value`, tagged by its type.
    pub fn of(value: Option<T>) -> Node<T> {
        Node::leaf(value, T::TAG)
    }

    /// Append a check. A pending [`Node::negate_next`] is applied to it.
    pub fn step(&self, mut check: Check<T>) -> Node<T> {
        check.negated ^= self.negate_next;
        Node {
            kind: Arc::new(NodeKind::Check {
                previous: Node {
                    kind: Arc::clone(&self.kind),
                    negate_next: false,
                },
                check,
            }),
            negate_next: false,
        }
    }

    /// Join this tree with another under `operator`.
    ///
    /// The result checks this tree's value; a pending negation carries over
    /// to the next appended check.
    pub fn combine<U: Describe + Send + Sync + 'static>(
        &self,
        right: &Node<U>,
        operator: Operator,
    ) -> Node<T> {
        Node {
            kind: Arc::new(NodeKind::Combine {
                left: Node {
                    kind: Arc::clone(&self.kind),
                    negate_next: false,
                },
                right: Arc::new(Node {
                    kind: Arc::clone(&right.kind),
                    negate_next: false,
                }),
                operator,
            }),
            negate_next: self.negate_next,
        }
    }

    /// The same tree with `custom` replacing the message of its last check.
    ///
    /// Returns `None` when this node is not a check.
    pub fn with_message(&self, custom: MessageOverride) -> Option<Node<T>> {
        match self.kind.as_ref() {
            NodeKind::Check { previous, check } => Some(Node {
                kind: Arc::new(NodeKind::Check {
                    previous: previous.clone(),
                    check: check.with_custom(Arc::new(custom)),
                }),
                negate_next: self.negate_next,
            }),
            _ => None,
        }
    }

    /// Evaluate without capturing message parameters.
    pub fn is_ok(&self) -> bool {
        let mut context = EvalContext::silent();
        let evaluation = evaluate_node(self, &mut context);
        let ok = evaluation.precondition && evaluation.valid;
        trace!(ok, "evaluated assertion");
        ok
    }

    /// Evaluate and capture everything needed to render a message.
    pub fn evaluate(&self) -> Outcome {
        let mut context = EvalContext::capturing();
        let evaluation = evaluate_node(self, &mut context);
        let parameters = context.into_parameters();
        trace!(
            precondition = evaluation.precondition,
            valid = evaluation.valid,
            parameters = parameters.len(),
            "evaluated assertion with message"
        );
        Outcome::new(
            evaluation.precondition,
            evaluation.valid,
            evaluation.message,
            parameters,
        )
    }
}
