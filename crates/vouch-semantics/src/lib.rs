//! Shared vouch semantic tables.
//!
//! This crate centralizes the logical operator truth tables and the
//! precondition combination rule so that every node kind and every
//! runtime composition path agrees on them.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Logical operator joining the outcomes of two assertion sub-trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    And,
    Or,
    Xor,
    Nand,
    Nor,
}

/// Which branch of a binary combination something refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 5] = [
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Nand,
        Operator::Nor,
    ];

    /// Lowercase name used in message keys and runtime composition.
    pub const fn name(self) -> &'static str {
        match self {
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Xor => "xor",
            Operator::Nand => "nand",
            Operator::Nor => "nor",
        }
    }

    /// Default connective word placed between two joined messages.
    pub const fn connective(self) -> &'static str {
        match self {
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
            Operator::Nand => "NAND",
            Operator::Nor => "NOR",
        }
    }

    /// Resolve an operator from its name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Operator> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Combine the validity of two branches under this operator.
    pub const fn combine_validity(self, left: bool, right: bool) -> bool {
        combine_validity(left, right, self)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.connective())
    }
}

/// Standard truth tables for AND, OR, XOR, NAND and NOR.
pub const fn combine_validity(left: bool, right: bool, operator: Operator) -> bool {
    match operator {
        Operator::And => left && right,
        Operator::Or => left || right,
        Operator::Xor => left != right,
        Operator::Nand => !(left && right),
        Operator::Nor => !(left || right),
    }
}

/// Combined precondition of two branches.
///
/// Both preconditions must hold whatever operator joins the branches: a
/// branch whose precondition failed has no classifiable checked value, so
/// an OR cannot be rescued by its other side.
pub const fn combine_precondition(left: bool, right: bool) -> bool {
    left && right
}

/// First branch, left to right, whose precondition failed.
pub const fn failed_side(left: bool, right: bool) -> Option<Side> {
    if !left {
        Some(Side::Left)
    } else if !right {
        Some(Side::Right)
    } else {
        None
    }
}
