//! Message catalog file parser.
//!
//! Parses `.vouch` files: a sequence of `key = "template";` entries with
//! `//` line comments. Keys are dotted identifiers (`text.contains.not`).

use winnow::combinator::{alt, delimited, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{none_of, take_while};

use crate::message::{ParseError, calculate_position};

/// One `key = "text";` entry, with escapes already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub key: String,
    pub text: String,
    /// 1-based line of the key.
    pub line: usize,
}

/// Parse an entire catalog file into its entries, in file order.
pub fn parse_catalog(input: &str) -> Result<Vec<RawEntry>, ParseError> {
    let mut remaining = input;
    let mut entries = Vec::new();

    if let Err(e) = skip_ws_and_comments(&mut remaining) {
        return Err(syntax_error(input, remaining, format!("parse error: {e}")));
    }
    while !remaining.is_empty() {
        let (line, _) = calculate_position(input, remaining);
        match terminated(entry, skip_ws_and_comments).parse_next(&mut remaining) {
            Ok((key, text)) => entries.push(RawEntry { key, text, line }),
            Err(_) => {
                return Err(syntax_error(
                    input,
                    remaining,
                    format!(
                        "expected `key = \"text\";`, found '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                ));
            }
        }
    }

    Ok(entries)
}

fn syntax_error(original: &str, remaining: &str, message: String) -> ParseError {
    let (line, column) = calculate_position(original, remaining);
    ParseError::Syntax {
        line,
        column,
        message,
    }
}

/// Skip whitespace and line comments.
fn skip_ws_and_comments(input: &mut &str) -> ModalResult<()> {
    let _: Vec<()> = repeat(0.., alt((ws_only.void(), line_comment.void()))).parse_next(input)?;
    Ok(())
}

fn ws_only<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_whitespace()).parse_next(input)
}

/// Parse a line comment: // ... newline
fn line_comment<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    preceded("//", take_while(0.., |c| c != '\n')).parse_next(input)
}

/// Parse an entry: key = "text" ;
fn entry(input: &mut &str) -> ModalResult<(String, String)> {
    let key = message_key(input)?;
    skip_ws_and_comments(input)?;
    '='.parse_next(input)?;
    skip_ws_and_comments(input)?;
    let text = quoted(input)?;
    skip_ws_and_comments(input)?;
    ';'.parse_next(input)?;
    Ok((key, text))
}

/// Parse a dotted key: lowercase segments of alphanumerics and underscores.
fn message_key(input: &mut &str) -> ModalResult<String> {
    take_while(1.., |c: char| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '.'
    })
    .verify(|key: &&str| !key.starts_with('.') && !key.ends_with('.') && !key.contains(".."))
    .map(|key: &str| key.to_string())
    .parse_next(input)
}

/// Parse a quoted string, resolving `\"`, `\\`, `\n` and `\t`.
fn quoted(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., quoted_char), '"')
        .map(|chars: Vec<char>| chars.into_iter().collect())
        .parse_next(input)
}

fn quoted_char(input: &mut &str) -> ModalResult<char> {
    alt((
        "\\\"".value('"'),
        "\\\\".value('\\'),
        "\\n".value('\n'),
        "\\t".value('\t'),
        none_of(['"', '\\', '\n']),
    ))
    .parse_next(input)
}
