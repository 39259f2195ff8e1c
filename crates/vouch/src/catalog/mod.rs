//! Locale-keyed message catalogs.
//!
//! A [`Catalog`] maps a locale and a message key to a parsed [`Template`].
//! The built-in catalog embeds one `.vouch` file per locale; each is parsed
//! at most once, on first use. Callers can build their own catalogs from
//! strings or files, which are parsed eagerly.

mod bundle;
mod error;
mod locale;
mod parser;

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock, OnceLock};

use tracing::{debug, warn};

use crate::keys;
use crate::message::{Source, Style, Template};

pub use bundle::Bundle;
pub use error::{CatalogWarning, LoadError, LookupError, compute_suggestions};
pub use locale::Locale;
pub use parser::{RawEntry, parse_catalog};

const ENGLISH_SOURCE: &str = include_str!("../../messages/en.vouch");
const FRENCH_SOURCE: &str = include_str!("../../messages/fr.vouch");

static BUILTIN: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog {
        slots: vec![
            Slot::lazy(Locale::ENGLISH, "en.vouch", ENGLISH_SOURCE),
            Slot::lazy(Locale::FRENCH, "fr.vouch", FRENCH_SOURCE),
        ],
        default_locale: Locale::ENGLISH,
    })
});

/// One locale's bundle, parsed on first access.
#[derive(Debug)]
struct Slot {
    locale: Locale,
    tag: String,
    origin: String,
    source: Cow<'static, str>,
    bundle: OnceLock<Bundle>,
}

impl Slot {
    fn lazy(locale: Locale, origin: &str, source: &'static str) -> Self {
        Slot {
            tag: locale.tag(),
            locale,
            origin: origin.to_string(),
            source: Cow::Borrowed(source),
            bundle: OnceLock::new(),
        }
    }

    fn parsed(locale: Locale, origin: String, bundle: Bundle) -> Self {
        Slot {
            tag: locale.tag(),
            locale,
            origin,
            source: Cow::Borrowed(""),
            bundle: OnceLock::from(bundle),
        }
    }

    fn bundle(&self) -> &Bundle {
        self.bundle.get_or_init(|| match Bundle::parse(&self.origin, &self.source) {
            Ok(bundle) => {
                debug!(locale = %self.tag, entries = bundle.len(), "loaded message bundle");
                bundle
            }
            Err(e) => {
                warn!(locale = %self.tag, error = %e, "message bundle failed to parse");
                Bundle::new()
            }
        })
    }
}

/// A set of message bundles, one per locale, with a default locale that
/// every lookup falls back to.
#[derive(Debug)]
pub struct Catalog {
    slots: Vec<Slot>,
    default_locale: Locale,
}

impl Catalog {
    /// The catalog embedded in this crate (`en` and `fr`, default `en`).
    pub fn builtin() -> Arc<Catalog> {
        Arc::clone(&BUILTIN)
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn default_locale(&self) -> &Locale {
        &self.default_locale
    }

    /// Locales with a bundle, in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.slots.iter().map(|slot| &slot.locale)
    }

    /// The bundle registered for exactly this locale, if any.
    pub fn bundle(&self, locale: &Locale) -> Option<&Bundle> {
        let tag = locale.tag();
        self.slot(&tag).map(Slot::bundle)
    }

    fn slot(&self, tag: &str) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.tag == tag)
    }

    /// Bundles consulted for `locale`, most specific first.
    fn chain(&self, locale: &Locale) -> Vec<&Bundle> {
        let mut tags = locale.fallback_chain();
        let default_tag = self.default_locale.tag();
        if !tags.contains(&default_tag) {
            tags.push(default_tag);
        }
        tags.iter()
            .filter_map(|tag| self.slot(tag))
            .map(Slot::bundle)
            .collect()
    }

    /// Find the template for `key`, falling back through the locale chain.
    pub fn find(&self, key: &str, locale: &Locale) -> Option<&Template> {
        self.chain(locale).into_iter().find_map(|bundle| bundle.get(key))
    }

    /// Like [`Catalog::find`], but never fails: an unknown key yields a
    /// generic template naming the key.
    pub fn resolve(&self, key: &str, locale: &Locale) -> Cow<'_, Template> {
        match self.find(key, locale) {
            Some(template) => Cow::Borrowed(template),
            None => Cow::Owned(Template::fallback(key)),
        }
    }

    /// Strict lookup with "did you mean" suggestions on a miss.
    pub fn lookup(&self, key: &str, locale: &Locale) -> Result<&Template, LookupError> {
        self.find(key, locale).ok_or_else(|| {
            let mut available: Vec<&str> = self
                .chain(locale)
                .into_iter()
                .flat_map(|bundle| bundle.keys())
                .collect();
            available.sort_unstable();
            available.dedup();
            LookupError {
                key: key.to_string(),
                locale: locale.tag(),
                suggestions: compute_suggestions(key, &available),
            }
        })
    }

    /// Raw text of an entry, following the same fallback as lookups.
    pub fn text(&self, key: &str, locale: &Locale) -> Option<&str> {
        self.chain(locale).into_iter().find_map(|bundle| bundle.text(key))
    }

    /// Keys defined for exactly this locale, sorted.
    pub fn keys(&self, locale: &Locale) -> Vec<&str> {
        self.bundle(locale).map(Bundle::keys).unwrap_or_default()
    }

    /// Rendering settings for `locale`.
    pub fn style(&self, locale: &Locale) -> Style<'_> {
        let defaults = Style::default();
        Style {
            decimal_separator: self
                .text(keys::DECIMAL_SEPARATOR, locale)
                .unwrap_or(defaults.decimal_separator),
            null: self.text(keys::NULL, locale).unwrap_or(defaults.null),
        }
    }

    /// Compare the `target` bundle against the `source` bundle.
    ///
    /// Reports keys the source does not define, keys the target lacks, and
    /// entries whose templates use a different number of check parameters.
    /// Missing bundles compare as empty.
    pub fn validate(&self, source: &Locale, target: &Locale) -> Vec<CatalogWarning> {
        let empty = Bundle::new();
        let source_bundle = self.bundle(source).unwrap_or(&empty);
        let target_bundle = self.bundle(target).unwrap_or(&empty);
        let locale = target.tag();
        let mut warnings = Vec::new();

        for key in target_bundle.keys() {
            let Some(target_template) = target_bundle.get(key) else {
                continue;
            };
            match source_bundle.get(key) {
                None => warnings.push(CatalogWarning::UnknownKey {
                    key: key.to_string(),
                    locale: locale.clone(),
                }),
                Some(source_template) => {
                    let source_count = source_template.arity(Source::Parameter);
                    let target_count = target_template.arity(Source::Parameter);
                    if source_count != target_count {
                        warnings.push(CatalogWarning::ParameterMismatch {
                            key: key.to_string(),
                            locale: locale.clone(),
                            source_count,
                            target_count,
                        });
                    }
                }
            }
        }

        for key in source_bundle.keys() {
            if !target_bundle.contains(key) {
                warnings.push(CatalogWarning::MissingKey {
                    key: key.to_string(),
                    locale: locale.clone(),
                });
            }
        }

        warnings
    }
}

/// Builds a [`Catalog`] from strings and files, parsing eagerly.
///
/// # Example
///
/// ```
/// use vouch::{Catalog, Locale};
///
/// let catalog = Catalog::builder()
///     .with_builtin()
///     .source(Locale::parse("de").unwrap(), r#"boolean.true = "'%1$s*' sollte wahr sein";"#)
///     .build()
///     .unwrap();
/// let german = Locale::parse("de").unwrap();
/// assert_eq!(catalog.text("boolean.true", &german), Some("'%1$s*' sollte wahr sein"));
/// // Keys missing from `de` fall back to the default locale.
/// assert!(catalog.find("number.gt", &german).is_some());
/// ```
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    inputs: Vec<Input>,
    default_locale: Option<Locale>,
    builtin: bool,
}

#[derive(Debug)]
enum Input {
    Source { locale: Locale, content: String },
    File { locale: Locale, path: PathBuf },
}

impl CatalogBuilder {
    /// Add a bundle from catalog file content.
    pub fn source(mut self, locale: Locale, content: impl Into<String>) -> Self {
        self.inputs.push(Input::Source {
            locale,
            content: content.into(),
        });
        self
    }

    /// Add a bundle read from a catalog file when the catalog is built.
    pub fn file(mut self, locale: Locale, path: impl Into<PathBuf>) -> Self {
        self.inputs.push(Input::File {
            locale,
            path: path.into(),
        });
        self
    }

    /// Include the built-in bundles. Bundles added for the same locale
    /// replace the built-in one.
    pub fn with_builtin(mut self) -> Self {
        self.builtin = true;
        self
    }

    /// Locale every lookup falls back to. Defaults to `en`.
    pub fn default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = Some(locale);
        self
    }

    pub fn build(self) -> Result<Catalog, LoadError> {
        let mut slots: Vec<Slot> = Vec::new();

        for input in self.inputs {
            let (locale, origin, content) = match input {
                Input::Source { locale, content } => {
                    let origin = format!("<{}>", locale.tag());
                    (locale, origin, content)
                }
                Input::File { locale, path } => {
                    let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })?;
                    (locale, path.display().to_string(), content)
                }
            };
            let bundle = Bundle::parse(&origin, &content)?;
            debug!(
                locale = %locale,
                entries = bundle.len(),
                origin = %origin,
                "loaded message bundle"
            );
            slots.retain(|slot| slot.locale != locale);
            slots.push(Slot::parsed(locale, origin, bundle));
        }

        if self.builtin {
            let builtin = Catalog::builtin();
            for slot in &builtin.slots {
                if slots.iter().all(|existing| existing.locale != slot.locale) {
                    slots.push(Slot::parsed(
                        slot.locale.clone(),
                        slot.origin.clone(),
                        slot.bundle().clone(),
                    ));
                }
            }
        }

        Ok(Catalog {
            slots,
            default_locale: self.default_locale.unwrap_or_default(),
        })
    }
}
