//! Turns evaluated message sources into text.

use bon::Builder;
use tracing::debug;

use crate::catalog::Locale;
use crate::global::Config;
use crate::keys;
use crate::types::{Parameter, Value};

use super::render::{render_template, render_value};
use super::source::{MessageKind, MessageSource};
use super::template::parse_template;

/// A caller-supplied message replacing a check's catalog message.
///
/// Overrides apply to the check's validity message (expected or negated);
/// a failed precondition still reports the catalog's precondition message.
///
/// # Example
///
/// ```
/// use vouch::{MessageOverride, Locale, args};
///
/// let custom = MessageOverride::builder()
///     .template("%s must exceed %2$s*, got %1$s*")
///     .locale(Locale::ENGLISH)
///     .arguments(args!["retries"])
///     .build();
/// assert_eq!(custom.arguments.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(on(String, into))]
pub struct MessageOverride {
    /// Template text, using the same syntax as catalog entries.
    pub template: String,

    /// Locale for rendering; the configured locale when absent.
    pub locale: Option<Locale>,

    /// Values for the non-starred placeholders.
    #[builder(default)]
    pub arguments: Vec<Value>,
}

/// Renders message sources against a configuration.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'c> {
    config: &'c Config,
}

impl<'c> Resolver<'c> {
    pub fn new(config: &'c Config) -> Self {
        Resolver { config }
    }

    /// Render the message of an evaluated tree.
    ///
    /// `parameters` is the outcome's full parameter list; each check reads
    /// its own slice of it.
    pub fn render(&self, source: &MessageSource, parameters: &[Parameter]) -> String {
        match source {
            MessageSource::Check {
                key,
                kind,
                custom,
                parameters: range,
            } => {
                let own = parameters.get(range.clone()).unwrap_or(&[]);
                match custom {
                    Some(custom) if *kind != MessageKind::Precondition => {
                        let locale = custom.locale.as_ref().unwrap_or(self.config.locale());
                        self.render_str(&custom.template, &custom.arguments, own, locale)
                    }
                    _ => self.render_key(&kind.catalog_key(key), own),
                }
            }
            MessageSource::Composite {
                operator,
                left,
                right,
                left_grouped,
                right_grouped,
            } => {
                let left = self.grouped(self.render(left, parameters), *left_grouped);
                let right = self.grouped(self.render(right, parameters), *right_grouped);
                let catalog = self.config.catalog();
                let connective = catalog
                    .text(&keys::operator(operator.name()), self.config.locale())
                    .unwrap_or(operator.connective());
                format!("{left} {connective} {right}")
            }
            MessageSource::Unsatisfied { operator } => {
                self.render_key(&keys::operator_failed(operator.name()), &[])
            }
        }
    }

    fn grouped(&self, text: String, grouped: bool) -> String {
        if grouped { format!("({text})") } else { text }
    }

    /// Render a catalog entry in the configured locale.
    pub fn render_key(&self, key: &str, parameters: &[Parameter]) -> String {
        let catalog = self.config.catalog();
        let locale = self.config.locale();
        let template = catalog.resolve(key, locale);
        render_template(&template, &[], parameters, &catalog.style(locale))
    }

    /// Render template text given by the caller.
    ///
    /// Text that does not parse as a template is returned unchanged.
    pub fn render_str(
        &self,
        template: &str,
        arguments: &[Value],
        parameters: &[Parameter],
        locale: &Locale,
    ) -> String {
        let catalog = self.config.catalog();
        match parse_template(template) {
            Ok(parsed) => render_template(&parsed, arguments, parameters, &catalog.style(locale)),
            Err(e) => {
                debug!(error = %e, "message override is not a valid template");
                template.to_string()
            }
        }
    }

    /// The checked values among `parameters`, rendered and comma-joined.
    pub fn describe_actual(&self, parameters: &[Parameter]) -> String {
        let style = self.config.catalog().style(self.config.locale());
        parameters
            .iter()
            .filter(|parameter| parameter.checked)
            .map(|parameter| render_value(&parameter.value, &style))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
