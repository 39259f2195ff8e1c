//! Message template parser using winnow.
//!
//! Parses printf-style message templates into an AST. Handles:
//! - Literal text runs
//! - Escape sequences: %% and %n
//! - Placeholders with optional position, flags, width and precision
//! - The trailing `*` that selects captured check parameters

use winnow::ascii::dec_uint;
use winnow::combinator::{alt, opt, preceded, repeat, terminated};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::ast::{Conversion, Placeholder, Segment, Source, Spec, Template};
use super::error::ParseError;

/// Parse a template string into an AST.
pub fn parse_template(input: &str) -> Result<Template, ParseError> {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) => {
            if remaining.is_empty() {
                Ok(t)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "invalid format specifier starting with '{}'",
                        remaining.chars().take(4).collect::<String>()
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {e}"),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
pub(crate) fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse a complete template into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;
    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other @ Segment::Placeholder(_) => result.push(other),
        }
    }

    result
}

/// Parse a single segment (escape, placeholder, or literal run).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((escape_sequence, placeholder, literal_run)).parse_next(input)
}

/// Parse escape sequences: %% -> %, %n -> newline
fn escape_sequence(input: &mut &str) -> ModalResult<Segment> {
    alt((
        "%%".value(Segment::Literal("%".to_string())),
        "%n".value(Segment::Literal("\n".to_string())),
    ))
    .parse_next(input)
}

/// Parse a run of characters up to the next `%`.
fn literal_run(input: &mut &str) -> ModalResult<Segment> {
    take_while(1.., |c: char| c != '%')
        .map(|s: &str| Segment::Literal(s.to_string()))
        .parse_next(input)
}

/// Parse a placeholder: %[index$][flags][width][.precision]conversion[*]
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    let start = *input;
    '%'.parse_next(input)?;
    let index = opt(terminated(position, '$')).parse_next(input)?;
    let flags: &str = take_while(0.., ['-', '0']).parse_next(input)?;
    let width = opt(number).parse_next(input)?;
    let precision = opt(preceded('.', number)).parse_next(input)?;
    let conversion = conversion(input)?;
    let source = match opt('*').parse_next(input)? {
        Some(_) => Source::Parameter,
        None => Source::Argument,
    };
    let raw = start[..start.len() - input.len()].to_string();

    Ok(Segment::Placeholder(Placeholder {
        index,
        source,
        spec: Spec {
            left_align: flags.contains('-'),
            zero_pad: flags.contains('0'),
            width,
            precision,
            conversion,
        },
        raw,
    }))
}

/// Parse a 1-based position.
fn position(input: &mut &str) -> ModalResult<usize> {
    number.verify(|n: &usize| *n > 0).parse_next(input)
}

/// Parse an unsigned decimal number.
fn number(input: &mut &str) -> ModalResult<usize> {
    dec_uint.parse_next(input)
}

/// Parse a conversion character.
fn conversion(input: &mut &str) -> ModalResult<Conversion> {
    one_of(['s', 'S', 'd', 'f', 'b', 'c'])
        .map(|c: char| match c {
            'S' => Conversion::UpperText,
            'd' => Conversion::Integer,
            'f' => Conversion::Decimal,
            'b' => Conversion::Boolean,
            'c' => Conversion::Char,
            _ => Conversion::Text,
        })
        .parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder_at(template: &Template, i: usize) -> &Placeholder {
        template.placeholders().nth(i).expect("placeholder exists")
    }

    #[test]
    fn literal_only() {
        let t = parse_template("the text should be empty").unwrap();
        assert_eq!(t, Template::literal("the text should be empty"));
    }

    #[test]
    fn escapes_merge_into_literals() {
        let t = parse_template("100%% sure%ndone").unwrap();
        assert_eq!(t, Template::literal("100% sure\ndone"));
    }

    #[test]
    fn indexed_parameter_placeholder() {
        let t = parse_template("the number '%1$s*' should be greater than '%2$s*'").unwrap();
        assert_eq!(t.segments.len(), 5);
        let first = placeholder_at(&t, 0);
        assert_eq!(first.index, Some(1));
        assert_eq!(first.source, Source::Parameter);
        assert_eq!(first.raw, "%1$s*");
        assert_eq!(t.arity(Source::Parameter), 2);
        assert_eq!(t.arity(Source::Argument), 0);
    }

    #[test]
    fn flags_width_and_precision() {
        let t = parse_template("%-8s|%05d|%.2f").unwrap();
        let text = placeholder_at(&t, 0);
        assert!(text.spec.left_align);
        assert_eq!(text.spec.width, Some(8));
        let int = placeholder_at(&t, 1);
        assert!(int.spec.zero_pad);
        assert_eq!(int.spec.width, Some(5));
        assert_eq!(int.spec.conversion, Conversion::Integer);
        let dec = placeholder_at(&t, 2);
        assert_eq!(dec.spec.precision, Some(2));
        assert_eq!(dec.spec.conversion, Conversion::Decimal);
        assert_eq!(t.arity(Source::Argument), 3);
    }

    #[test]
    fn width_is_not_mistaken_for_position() {
        let t = parse_template("%12s").unwrap();
        let p = placeholder_at(&t, 0);
        assert_eq!(p.index, None);
        assert_eq!(p.spec.width, Some(12));
    }

    #[test]
    fn unknown_conversion_is_a_syntax_error() {
        let err = parse_template("value %q here").unwrap_err();
        let ParseError::Syntax { line, column, .. } = err;
        assert_eq!((line, column), (1, 7));
    }

    #[test]
    fn zero_position_is_rejected() {
        assert!(parse_template("%0$s").is_err());
    }
}
