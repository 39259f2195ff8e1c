//! Error types for message catalogs.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

/// Errors that occur while loading a message catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Syntax error with location context.
    #[error("{origin}:{line}:{column}: {message}")]
    Parse {
        origin: String,
        line: usize,
        column: usize,
        message: String,
    },

    /// The same key appears twice in one bundle.
    #[error("{origin}: duplicate message key '{key}'")]
    DuplicateKey { origin: String, key: String },

    /// An entry whose text is not a valid message template.
    #[error("{origin}: invalid template for '{key}': {message}")]
    Template {
        origin: String,
        key: String,
        message: String,
    },
}

/// A strict lookup found no template for a key in any fallback locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown message key '{key}' for locale '{locale}'{}",
    format_suggestions(.suggestions)
)]
pub struct LookupError {
    pub key: String,
    pub locale: String,
    /// Close matches among the known keys, closest first.
    pub suggestions: Vec<String>,
}

/// Non-fatal inconsistencies between two bundles of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogWarning {
    /// The target bundle defines a key the source bundle does not.
    #[error("'{key}' in '{locale}' is not defined in the source locale")]
    UnknownKey { key: String, locale: String },

    /// The source bundle defines a key the target bundle lacks.
    #[error("'{key}' is missing from '{locale}'")]
    MissingKey { key: String, locale: String },

    /// The bundles reference a different number of check parameters.
    #[error(
        "'{key}' in '{locale}' uses {target_count} check parameters, source uses {source_count}"
    )]
    ParameterMismatch {
        key: String,
        locale: String,
        source_count: usize,
        target_count: usize,
    },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for an unknown key.
///
/// Returns up to three keys within edit distance 1 (short keys) or 2,
/// closest first.
pub fn compute_suggestions(key: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if key.len() <= 3 { 1 } else { 2 };
    let mut scored: Vec<(usize, &str)> = available
        .iter()
        .map(|candidate| (levenshtein(key, candidate), *candidate))
        .filter(|(distance, _)| *distance <= max_distance)
        .collect();
    scored.sort();
    scored
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
