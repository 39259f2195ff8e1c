//! Evaluation configuration and the process-wide default.
//!
//! Terminal operations that produce messages read the global [`Config`]
//! once per call unless a config is passed explicitly. Writes are
//! last-write-wins and affect later terminal calls only.

use std::sync::{Arc, LazyLock, PoisonError, RwLock};

use bon::Builder;
use tracing::debug;

use crate::catalog::{Catalog, Locale};

static GLOBAL_CONFIG: LazyLock<RwLock<Config>> = LazyLock::new(|| RwLock::new(Config::default()));

/// Locale and catalog used to render messages.
///
/// # Example
///
/// ```
/// use vouch::{Config, Locale};
///
/// let config = Config::builder().locale(Locale::FRENCH).build();
/// assert_eq!(config.locale(), &Locale::FRENCH);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Config {
    /// Locale used when a check does not name its own.
    #[builder(default)]
    locale: Locale,

    #[builder(default = Catalog::builtin())]
    catalog: Arc<Catalog>,
}

impl Default for Config {
    fn default() -> Self {
        Config::builder().build()
    }
}

impl Config {
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_catalog(&mut self, catalog: Arc<Catalog>) {
        self.catalog = catalog;
    }
}

/// Provides read access to the global configuration.
pub fn with_config<T>(f: impl FnOnce(&Config) -> T) -> T {
    let guard = GLOBAL_CONFIG.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

/// Provides write access to the global configuration.
pub fn with_config_mut<T>(f: impl FnOnce(&mut Config) -> T) -> T {
    let mut guard = GLOBAL_CONFIG.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// A snapshot of the global configuration.
pub fn config() -> Config {
    with_config(Config::clone)
}

/// Sets the locale used by terminals that are not given a config.
pub fn set_default_locale(locale: Locale) {
    debug!(locale = %locale, "default locale changed");
    with_config_mut(|config| config.set_locale(locale));
}

/// Returns the locale used by terminals that are not given a config.
pub fn default_locale() -> Locale {
    with_config(|config| config.locale().clone())
}
