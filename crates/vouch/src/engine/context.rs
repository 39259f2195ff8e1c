//! Evaluation context carrying captured parameters through a traversal.

use std::ops::Range;

use crate::types::{Parameter, Value};

/// State carried through one evaluation of a tree.
///
/// A capturing context records the checked value and arguments of every
/// check that runs, for message rendering. A silent context records nothing
/// and evaluation produces no message sources.
#[derive(Debug, Default)]
pub(crate) struct EvalContext {
    capture: bool,
    parameters: Vec<Parameter>,
}

impl EvalContext {
    /// Context for terminals that produce messages.
    pub fn capturing() -> Self {
        Self {
            capture: true,
            parameters: Vec::new(),
        }
    }

    /// Context for terminals that only need the boolean result.
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn is_capturing(&self) -> bool {
        self.capture
    }

    /// Record one check's parameters and return their range in the
    /// parameter list.
    pub fn capture(&mut self, checked: Parameter, arguments: &[Value]) -> Range<usize> {
        let start = self.parameters.len();
        self.parameters.push(checked);
        self.parameters
            .extend(arguments.iter().cloned().map(Parameter::argument));
        start..self.parameters.len()
    }

    pub fn into_parameters(self) -> Vec<Parameter> {
        self.parameters
    }
}
