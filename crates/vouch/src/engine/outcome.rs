//! The result of evaluating an assertion tree.

use serde::Serialize;

use crate::error::AssertionError;
use crate::global::Config;
use crate::message::{MessageSource, Resolver};
use crate::types::Parameter;

/// A fresh, immutable evaluation result.
///
/// The message is kept unrendered; it is resolved against a [`Config`] only
/// when text is requested.
#[derive(Debug, Clone)]
pub struct Outcome {
    precondition_held: bool,
    valid: bool,
    message: Option<MessageSource>,
    parameters: Vec<Parameter>,
}

/// A rendered, serializable view of an [`Outcome`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub ok: bool,
    pub precondition_held: bool,
    pub valid: bool,
    /// The resolved message, present only when the assertion failed.
    pub message: Option<String>,
    pub parameters: Vec<Parameter>,
}

impl Outcome {
    pub(crate) fn new(
        precondition_held: bool,
        valid: bool,
        message: Option<MessageSource>,
        parameters: Vec<Parameter>,
    ) -> Self {
        Outcome {
            precondition_held,
            valid,
            message,
            parameters,
        }
    }

    /// Whether every precondition held and the tree is valid.
    pub fn is_ok(&self) -> bool {
        self.precondition_held && self.valid
    }

    pub fn precondition_held(&self) -> bool {
        self.precondition_held
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Parameters captured in traversal order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn message_source(&self) -> Option<&MessageSource> {
        self.message.as_ref()
    }

    /// The failure message, or `None` when the assertion holds.
    pub fn message(&self, config: &Config) -> Option<String> {
        if self.is_ok() {
            return None;
        }
        let resolver = Resolver::new(config);
        Some(
            self.message
                .as_ref()
                .map(|source| resolver.render(source, &self.parameters))
                .unwrap_or_default(),
        )
    }

    /// The failure as an error, or `None` when the assertion holds.
    pub fn error(&self, config: &Config) -> Option<AssertionError> {
        self.message(config).map(|message| self.error_from(message))
    }

    /// Classify a rendered message by which tier failed.
    pub(crate) fn error_from(&self, message: String) -> AssertionError {
        if self.precondition_held {
            AssertionError::Validation { message }
        } else {
            AssertionError::Precondition { message }
        }
    }

    /// The checked values, rendered and comma-joined.
    pub fn actual(&self, config: &Config) -> String {
        Resolver::new(config).describe_actual(&self.parameters)
    }

    pub fn report(&self, config: &Config) -> Report {
        Report {
            ok: self.is_ok(),
            precondition_held: self.precondition_held,
            valid: self.valid,
            message: self.message(config),
            parameters: self.parameters.clone(),
        }
    }
}
