//! Trees composed from runtime lists of operands and operators.

use vouch_semantics::Operator;

use crate::error::ConfigurationError;
use crate::types::Describe;

use super::node::Node;

#[derive(Debug, Clone)]
enum Item<T> {
    Operand(Node<T>),
    Operator(Operator),
}

/// Builds a left-associative tree from operands and operators supplied at
/// runtime, e.g. from configuration.
///
/// Structure is validated by [`Sequence::build`] before anything is
/// evaluated.
///
/// # Example
///
/// ```
/// use vouch::{BooleanChecks, Operator, Sequence, that};
///
/// let node = Sequence::new(that(true).is_true().node())
///     .operator_name("and")
///     .unwrap()
///     .operand(that(false).is_true().node())
///     .build()
///     .unwrap();
/// assert!(!node.is_ok());
///
/// let dangling = Sequence::new(that(true).is_true().node())
///     .operator(Operator::Or)
///     .build();
/// assert!(dangling.is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Sequence<T> {
    items: Vec<Item<T>>,
}

impl<T: Describe + Send + Sync + 'static> Sequence<T> {
    pub fn new(first: Node<T>) -> Self {
        Sequence {
            items: vec![Item::Operand(first)],
        }
    }

    pub fn operator(mut self, operator: Operator) -> Self {
        self.items.push(Item::Operator(operator));
        self
    }

    /// Append an operator given by name (`and`, `or`, `xor`, `nand`, `nor`).
    pub fn operator_name(self, name: &str) -> Result<Self, ConfigurationError> {
        Ok(self.operator(parse_operator(name)?))
    }

    pub fn operand(mut self, node: Node<T>) -> Self {
        self.items.push(Item::Operand(node));
        self
    }

    /// Fold the items into one tree.
    pub fn build(self) -> Result<Node<T>, ConfigurationError> {
        let mut items = self.items.into_iter().enumerate();
        let mut tree = match items.next() {
            Some((_, Item::Operand(node))) => node,
            Some((position, Item::Operator(operator))) => {
                return Err(ConfigurationError::MissingOperand {
                    operator: operator.name().to_string(),
                    position,
                });
            }
            None => return Err(ConfigurationError::MissingOperator { position: 0 }),
        };

        let mut pending: Option<(usize, Operator)> = None;
        for (position, item) in items {
            match (item, pending.take()) {
                (Item::Operator(operator), None) => pending = Some((position, operator)),
                (Item::Operator(operator), Some(_)) => {
                    return Err(ConfigurationError::MissingOperand {
                        operator: operator.name().to_string(),
                        position,
                    });
                }
                (Item::Operand(node), Some((_, operator))) => tree = tree.combine(&node, operator),
                (Item::Operand(_), None) => {
                    return Err(ConfigurationError::MissingOperator { position });
                }
            }
        }

        match pending {
            Some((position, operator)) => Err(ConfigurationError::DanglingOperator {
                operator: operator.name().to_string(),
                position,
            }),
            None => Ok(tree),
        }
    }
}

/// Parse an operator name, case-insensitively.
pub fn parse_operator(name: &str) -> Result<Operator, ConfigurationError> {
    Operator::from_name(name).ok_or_else(|| ConfigurationError::UnknownOperator {
        name: name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Check;
    use crate::types::TypeTag;

    fn flag(value: bool) -> Node<bool> {
        Node::leaf(Some(value), TypeTag::Boolean)
            .step(Check::on_value("boolean.true", |b: &bool| *b))
    }

    #[test]
    fn folds_left_to_right() {
        // (true OR false) AND false
        let node = Sequence::new(flag(true))
            .operator(Operator::Or)
            .operand(flag(false))
            .operator(Operator::And)
            .operand(flag(false))
            .build()
            .unwrap();
        assert!(!node.is_ok());
        assert!(node.is_combination());
    }

    #[test]
    fn dangling_operator_is_rejected() {
        let err = Sequence::new(flag(true)).operator(Operator::Xor).build().unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DanglingOperator {
                operator: "xor".to_string(),
                position: 1
            }
        );
    }

    #[test]
    fn consecutive_operators_are_rejected() {
        let err = Sequence::new(flag(true))
            .operator(Operator::And)
            .operator(Operator::Or)
            .operand(flag(true))
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingOperand {
                operator: "or".to_string(),
                position: 2
            }
        );
    }

    #[test]
    fn consecutive_operands_are_rejected() {
        let err = Sequence::new(flag(true)).operand(flag(false)).build().unwrap_err();
        assert_eq!(err, ConfigurationError::MissingOperator { position: 1 });
    }

    #[test]
    fn unknown_operator_name() {
        assert_eq!(
            parse_operator("implies"),
            Err(ConfigurationError::UnknownOperator {
                name: "implies".to_string()
            })
        );
        assert_eq!(parse_operator(" NAND "), Ok(Operator::Nand));
    }
}
