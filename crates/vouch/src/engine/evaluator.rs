//! Tree evaluation with short-circuit precondition semantics.

use vouch_semantics::{Operator, Side, combine_validity, failed_side};

use crate::message::{MessageKind, MessageSource};
use crate::types::{Describe, Parameter, Value};

use super::context::EvalContext;
use super::node::{Node, NodeKind};

/// The result of evaluating one subtree.
#[derive(Debug, Clone)]
pub(crate) struct Evaluation {
    pub precondition: bool,
    pub valid: bool,
    /// Always `None` in a silent context.
    pub message: Option<MessageSource>,
}

impl Evaluation {
    fn passed() -> Self {
        Evaluation {
            precondition: true,
            valid: true,
            message: None,
        }
    }
}

/// A tree over some checked type, evaluated without knowing that type.
pub(crate) trait Evaluate: Send + Sync {
    fn evaluate_in(&self, context: &mut EvalContext) -> Evaluation;
}

impl<T: Describe + Send + Sync + 'static> Evaluate for Node<T> {
    fn evaluate_in(&self, context: &mut EvalContext) -> Evaluation {
        evaluate_node(self, context)
    }
}

/// Evaluate a node.
///
/// A check whose previous node failed its precondition passes that result
/// through without running. A combination always evaluates both sides.
pub(crate) fn evaluate_node<T: Describe + Send + Sync + 'static>(
    node: &Node<T>,
    context: &mut EvalContext,
) -> Evaluation {
    match node.kind() {
        NodeKind::Creation { .. } => Evaluation::passed(),
        NodeKind::Check { previous, check } => {
            let before = evaluate_node(previous, context);
            if !before.precondition {
                return before;
            }

            let value = node.value();
            let parameters = context.is_capturing().then(|| {
                let checked = value.map_or(Value::Null, Describe::describe);
                context.capture(Parameter::checked(checked, node.tag()), &check.arguments)
            });
            let message = |kind: MessageKind| {
                parameters.clone().map(|range| MessageSource::Check {
                    key: check.key,
                    kind,
                    custom: check.custom.clone(),
                    parameters: range,
                })
            };

            if !(check.precondition)(value) {
                return Evaluation {
                    precondition: false,
                    valid: false,
                    message: message(MessageKind::Precondition),
                };
            }

            let valid = (check.validator)(value, check.negated);
            let kind = if check.negated {
                MessageKind::Negated
            } else {
                MessageKind::Expected
            };
            Evaluation {
                precondition: true,
                valid,
                message: message(kind),
            }
        }
        NodeKind::Combine {
            left,
            right,
            operator,
        } => {
            let left = evaluate_node(left, context);
            let right = right.evaluate_in(context);
            combine(left, right, *operator, context.is_capturing())
        }
    }
}

fn combine(
    left: Evaluation,
    right: Evaluation,
    operator: Operator,
    capturing: bool,
) -> Evaluation {
    if let Some(side) = failed_side(left.precondition, right.precondition) {
        let message = match side {
            Side::Left => left.message,
            Side::Right => right.message,
        };
        return Evaluation {
            precondition: false,
            valid: false,
            message,
        };
    }

    let valid = combine_validity(left.valid, right.valid, operator);
    let message = match (left.message, right.message) {
        (Some(left), Some(right)) => Some(MessageSource::Composite {
            operator,
            left_grouped: left.is_composite(),
            right_grouped: right.is_composite(),
            left: Box::new(left),
            right: Box::new(right),
        }),
        (Some(only), None) | (None, Some(only)) => Some(only),
        // Neither side ran a check, so only the operator can explain a failure.
        (None, None) if capturing && !valid => Some(MessageSource::Unsatisfied { operator }),
        (None, None) => None,
    };
    Evaluation {
        precondition: true,
        valid,
        message,
    }
}
