//! Integration tests for the process-wide default configuration.
//!
//! The default configuration is global state, so everything that changes it
//! runs in a single test.

use vouch::{
    Catalog, Config, Locale, MessageOverride, NumberChecks, default_locale, set_default_locale,
    that, with_config, with_config_mut,
};

#[test]
fn locale_precedence() {
    let assertion = that(1.5).is_gt(2.0);

    // Built-in default.
    assert_eq!(default_locale(), Locale::ENGLISH);
    assert_eq!(
        assertion.errors().as_deref(),
        Some("the number '1.5' should be greater than '2'")
    );

    // Process-wide default.
    set_default_locale(Locale::FRENCH);
    assert_eq!(default_locale(), Locale::FRENCH);
    assert_eq!(
        assertion.errors().as_deref(),
        Some("le nombre '1,5' devrait être supérieur à '2'")
    );

    // An explicit config beats the process-wide default.
    assert_eq!(
        assertion.errors_with(&Config::default()).as_deref(),
        Some("the number '1.5' should be greater than '2'")
    );

    // An override's locale beats both.
    let overridden = assertion.clone().with_message(
        MessageOverride::builder()
            .template("%1$s* > %2$s*")
            .locale(Locale::ENGLISH)
            .build(),
    );
    assert_eq!(overridden.errors().as_deref(), Some("1.5 > 2"));

    // A replaced catalog is used by later terminals.
    let catalog = Catalog::builder()
        .source(
            Locale::FRENCH,
            r#"
            format.decimal_separator = ",";
            number.gt = "%1$s* n'est pas > %2$s*";
            "#,
        )
        .build()
        .unwrap();
    with_config_mut(|config| config.set_catalog(catalog.into()));
    assert_eq!(assertion.errors().as_deref(), Some("1,5 n'est pas > 2"));
    assert!(with_config(|config| config.catalog().find("number.lt", config.locale()).is_none()));

    with_config_mut(|config| *config = Config::default());
    assert_eq!(default_locale(), Locale::ENGLISH);
}
