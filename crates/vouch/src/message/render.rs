//! Rendering of templates and values into text.

use crate::types::{Parameter, Value};

use super::ast::{Conversion, Placeholder, Segment, Source, Spec, Template};

/// Locale-dependent rendering settings, read from the message catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style<'a> {
    pub decimal_separator: &'a str,
    pub null: &'a str,
}

impl Default for Style<'_> {
    fn default() -> Self {
        Style {
            decimal_separator: ".",
            null: "null",
        }
    }
}

/// Render a template, substituting arguments and captured parameters.
///
/// Sequential placeholders (`%s`, `%s*`) consume positions in order,
/// independently for arguments and parameters. A placeholder whose value is
/// missing is emitted verbatim.
pub fn render_template(
    template: &Template,
    arguments: &[Value],
    parameters: &[Parameter],
    style: &Style<'_>,
) -> String {
    let mut output = String::new();
    let mut next_argument = 0;
    let mut next_parameter = 0;

    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(placeholder) => {
                let value = match placeholder.source {
                    Source::Argument => position(placeholder, &mut next_argument)
                        .and_then(|position| arguments.get(position)),
                    Source::Parameter => position(placeholder, &mut next_parameter)
                        .and_then(|position| parameters.get(position))
                        .map(|parameter| &parameter.value),
                };
                match value {
                    Some(value) => output.push_str(&format_value(value, &placeholder.spec, style)),
                    None => output.push_str(&placeholder.raw),
                }
            }
        }
    }

    output
}

/// Zero-based position of a placeholder, advancing the sequential counter
/// for placeholders without an explicit index. `None` for index 0.
fn position(placeholder: &Placeholder, next: &mut usize) -> Option<usize> {
    match placeholder.index {
        Some(index) => index.checked_sub(1),
        None => {
            let current = *next;
            *next += 1;
            Some(current)
        }
    }
}

/// Format one value according to a placeholder spec.
fn format_value(value: &Value, spec: &Spec, style: &Style<'_>) -> String {
    let text = match spec.conversion {
        Conversion::Text => truncate(render_value(value, style), spec.precision),
        Conversion::UpperText => {
            truncate(render_value(value, style), spec.precision).to_uppercase()
        }
        Conversion::Integer => match value {
            Value::Integer(n) => n.to_string(),
            Value::Decimal(n) if n.is_finite() => (n.trunc() as i128).to_string(),
            _ => render_value(value, style),
        },
        Conversion::Decimal => match value.as_decimal() {
            Some(n) => format!("{n:.*}", spec.precision.unwrap_or(6))
                .replace('.', style.decimal_separator),
            None => render_value(value, style),
        },
        Conversion::Boolean => match value {
            Value::Bool(b) => b.to_string(),
            Value::Null => "false".to_string(),
            _ => "true".to_string(),
        },
        Conversion::Char => match value {
            Value::Char(c) => c.to_string(),
            _ => render_value(value, style),
        },
    };
    pad(text, spec)
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(max) if text.chars().count() > max => text.chars().take(max).collect(),
        _ => text,
    }
}

fn pad(text: String, spec: &Spec) -> String {
    let Some(width) = spec.width else {
        return text;
    };
    let len = text.chars().count();
    if len >= width {
        return text;
    }
    let fill = width - len;
    let numeric = matches!(spec.conversion, Conversion::Integer | Conversion::Decimal);
    if spec.left_align {
        format!("{text}{}", " ".repeat(fill))
    } else if spec.zero_pad && numeric {
        match text.strip_prefix('-') {
            Some(digits) => format!("-{}{digits}", "0".repeat(fill)),
            None => format!("{}{text}", "0".repeat(fill)),
        }
    } else {
        format!("{}{text}", " ".repeat(fill))
    }
}

/// Render a value the way messages show it.
///
/// Instants use a fixed `YYYY/MM/DD HH:MM:SS` pattern, calendar values
/// ISO-8601, containers a bracketed join of their elements, enumerations
/// their name. Decimals use the style's separator.
pub fn render_value(value: &Value, style: &Style<'_>) -> String {
    let mut output = String::new();
    write_value(&mut output, value, style);
    output
}

fn write_value(output: &mut String, value: &Value, style: &Style<'_>) {
    match value {
        Value::Null => output.push_str(style.null),
        Value::Decimal(n) => output.push_str(&n.to_string().replace('.', style.decimal_separator)),
        Value::Array(items) | Value::Iterable(items) => {
            output.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_value(output, item, style);
            }
            output.push(']');
        }
        Value::Map(entries) => {
            output.push('{');
            for (i, (key, value)) in entries.iter().enumerate() {
                if i > 0 {
                    output.push_str(", ");
                }
                write_value(output, key, style);
                output.push('=');
                write_value(output, value, style);
            }
            output.push('}');
        }
        other => output.push_str(&other.to_string()),
    }
}
