use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::{LanguageIdentifier, langid};

use crate::error::ConfigurationError;

/// A language identifier selecting message templates.
///
/// Lookups fall back from the full identifier (`fr-CA`) to its language
/// (`fr`) and finally to the catalog's default locale.
///
/// # Example
///
/// ```
/// use vouch::Locale;
///
/// let locale = Locale::parse("fr-CA").unwrap();
/// assert_eq!(locale.language(), "fr");
/// assert_eq!(locale.fallback_chain(), vec!["fr-CA".to_string(), "fr".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    pub const ENGLISH: Locale = Locale(langid!("en"));
    pub const FRENCH: Locale = Locale(langid!("fr"));

    /// Parse a BCP-47 language tag such as `en`, `fr` or `fr-CA`.
    pub fn parse(tag: &str) -> Result<Locale, ConfigurationError> {
        LanguageIdentifier::try_from_str(tag.trim())
            .map(Locale)
            .map_err(|_| ConfigurationError::InvalidLocale {
                tag: tag.to_string(),
            })
    }

    /// The language subtag, e.g. `fr` for `fr-CA`.
    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    /// The canonical tag, e.g. `fr-CA`.
    pub fn tag(&self) -> String {
        self.0.to_string()
    }

    /// The same locale reduced to its language subtag.
    pub fn language_only(&self) -> Locale {
        Locale(LanguageIdentifier::from(self.0.language))
    }

    /// Tags to try, most specific first, without the catalog default.
    pub fn fallback_chain(&self) -> Vec<String> {
        let full = self.tag();
        let language = self.language().to_string();
        if full == language {
            vec![full]
        } else {
            vec![full, language]
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::ENGLISH
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Locale {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s)
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(identifier: LanguageIdentifier) -> Self {
        Locale(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_canonicalizes_case() {
        let locale = Locale::parse("FR-ca").unwrap();
        assert_eq!(locale.tag(), "fr-CA");
        assert_eq!(locale.language_only(), Locale::FRENCH);
    }

    #[test]
    fn language_only_locale_has_single_entry_chain() {
        assert_eq!(Locale::ENGLISH.fallback_chain(), vec!["en".to_string()]);
    }

    #[test]
    fn invalid_tag_is_a_configuration_error() {
        let err = Locale::parse("not a locale").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::InvalidLocale {
                tag: "not a locale".to_string()
            }
        );
    }
}
