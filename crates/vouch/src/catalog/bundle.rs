//! Per-locale message bundle: parsed templates indexed by key.

use std::collections::HashMap;

use crate::message::{ParseError, Template, parse_template};

use super::error::LoadError;
use super::parser::parse_catalog;

/// One catalog entry: the raw text and its parsed template.
#[derive(Debug, Clone)]
struct Entry {
    text: String,
    template: Template,
}

/// Message templates for a single locale.
#[derive(Debug, Default, Clone)]
pub struct Bundle {
    entries: HashMap<String, Entry>,
}

impl Bundle {
    /// Create a new empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse catalog file content into a bundle.
    ///
    /// `origin` names the content (usually a path) in error messages.
    pub fn parse(origin: &str, content: &str) -> Result<Self, LoadError> {
        let raw = parse_catalog(content).map_err(|ParseError::Syntax { line, column, message }| {
            LoadError::Parse {
                origin: origin.to_string(),
                line,
                column,
                message,
            }
        })?;

        let mut bundle = Bundle::new();
        for entry in raw {
            let template = parse_template(&entry.text).map_err(|e| LoadError::Template {
                origin: format!("{origin}:{}", entry.line),
                key: entry.key.clone(),
                message: e.to_string(),
            })?;
            if bundle.entries.contains_key(&entry.key) {
                return Err(LoadError::DuplicateKey {
                    origin: format!("{origin}:{}", entry.line),
                    key: entry.key,
                });
            }
            bundle.entries.insert(
                entry.key,
                Entry {
                    text: entry.text,
                    template,
                },
            );
        }
        Ok(bundle)
    }

    /// Get the parsed template for a key.
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.entries.get(key).map(|entry| &entry.template)
    }

    /// Get the raw text for a key.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(|entry| entry.text.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in this bundle, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
