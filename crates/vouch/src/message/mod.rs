//! Message templates and their resolution.
//!
//! Templates use a printf-style syntax. `%s` and `%2$s` refer to caller
//! supplied arguments; a trailing `*` (`%1$s*`) refers to the parameters
//! captured for the check instead, where parameter 1 is the checked value.

pub mod ast;
mod error;
mod render;
mod resolver;
mod source;
mod template;

pub use ast::{Conversion, Placeholder, Segment, Source, Spec, Template};
pub use error::ParseError;
pub use render::{Style, render_template, render_value};
pub use resolver::{MessageOverride, Resolver};
pub use source::{MessageKind, MessageSource};
pub use template::parse_template;

pub(crate) use template::calculate_position;
