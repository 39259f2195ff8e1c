//! Public AST types for message templates.

/// A parsed message template.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a template.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text, with `%%` and `%n` escapes already resolved.
    Literal(String),
    Placeholder(Placeholder),
}

/// A format specifier: `%[index$][flags][width][.precision]conversion[*]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    /// Explicit 1-based position, or `None` for the next sequential one.
    pub index: Option<usize>,
    pub source: Source,
    pub spec: Spec,
    /// Source text, emitted verbatim when the referenced value is missing.
    pub raw: String,
}

/// Where a placeholder takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Arguments passed alongside a caller supplied template.
    Argument,
    /// Parameters captured for the check; 1 is the checked value.
    Parameter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Spec {
    pub left_align: bool,
    pub zero_pad: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub conversion: Conversion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Conversion {
    /// `%s`
    #[default]
    Text,
    /// `%S`
    UpperText,
    /// `%d`
    Integer,
    /// `%f`
    Decimal,
    /// `%b`
    Boolean,
    /// `%c`
    Char,
}

impl Template {
    /// A template that renders `text` unchanged.
    pub fn literal(text: impl Into<String>) -> Self {
        Template {
            segments: vec![Segment::Literal(text.into())],
        }
    }

    /// Template used when no catalog knows `key`.
    pub fn fallback(key: &str) -> Self {
        Template {
            segments: vec![
                Segment::Literal(format!("{key} failed for '")),
                Segment::Placeholder(Placeholder {
                    index: Some(1),
                    source: Source::Parameter,
                    spec: Spec::default(),
                    raw: "%1$s*".to_string(),
                }),
                Segment::Literal("'".to_string()),
            ],
        }
    }

    /// Iterate over the placeholders of this template.
    pub fn placeholders(&self) -> impl Iterator<Item = &Placeholder> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
    }

    /// Highest 1-based position referenced from `source`.
    ///
    /// Sequential placeholders count in order of appearance, matching how
    /// they are resolved at render time.
    pub fn arity(&self, source: Source) -> usize {
        let mut next = 0;
        let mut highest = 0;
        for placeholder in self.placeholders().filter(|p| p.source == source) {
            let position = match placeholder.index {
                Some(index) => index,
                None => {
                    next += 1;
                    next
                }
            };
            highest = highest.max(position);
        }
        highest
    }
}
