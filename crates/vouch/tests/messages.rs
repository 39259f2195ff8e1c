//! Integration tests for message rendering.

use std::collections::HashMap;

use chrono::{TimeDelta, TimeZone, Utc};
use insta::assert_snapshot;
use vouch::{
    Assertion, AssertionError, BooleanChecks, CalendarField, Checkable, CollectionChecks, Config,
    Failure, Locale, MapChecks, MessageOverride, NumberChecks, ObjectChecks, TemporalChecks,
    TextChecks, args, that, that_option,
};

fn english() -> Config {
    Config::default()
}

fn french() -> Config {
    Config::builder().locale(Locale::FRENCH).build()
}

fn message<T: Checkable>(assertion: &Assertion<T>, config: &Config) -> String {
    assertion.errors_with(config).unwrap_or_default()
}

// =========================================================================
// Catalog messages
// =========================================================================

#[test]
fn negated_check_uses_not_template() {
    let assertion = that("text").not().contains("ex");
    assert_snapshot!(message(&assertion, &english()), @"the text 'text' should not contain 'ex'");
}

#[test]
fn nested_combinations_are_parenthesised() {
    let assertion = that(5).is_gt(1).and().is_lt(3).or().is_zero();
    assert_eq!(
        message(&assertion, &english()),
        concat!(
            "(the number '5' should be greater than '1' AND ",
            "the number '5' should be less than '3') ",
            "OR the number '5' should be zero"
        )
    );
}

#[test]
fn containers_render_their_elements() {
    let assertion = that(vec![1_i32, 2]).contains_all(vec![2, 3]);
    assert_snapshot!(
        message(&assertion, &english()),
        @"the collection '[1, 2]' should contain all of [2, 3]"
    );

    let scores = HashMap::from([("b", 2_i32), ("a", 1)]);
    let assertion = that(scores).contains_key("c");
    assert_snapshot!(
        message(&assertion, &english()),
        @"the map '{a=1, b=2}' should contain the key 'c'"
    );
}

#[test]
fn instants_and_calendar_fields() {
    let at = Utc.with_ymd_and_hms(2024, 3, 9, 8, 5, 0).unwrap();
    let assertion = that(at).is_around(at + TimeDelta::days(3), CalendarField::Day, 1);
    assert_snapshot!(
        message(&assertion, &english()),
        @"the date '2024/03/09 08:05:00' should be within 1 day(s) of '2024/03/12 08:05:00'"
    );
}

#[test]
fn one_of_and_custom_predicates() {
    let assertion = that('x').is_one_of(vec!['a', 'b']);
    assert_snapshot!(message(&assertion, &english()), @"the object 'x' should be one of [a, b]");

    let assertion = that(3_u8).satisfies("an even number", |n: &u8| n % 2 == 0);
    assert_snapshot!(
        message(&assertion, &english()),
        @"the object '3' should match 'an even number'"
    );
}

// =========================================================================
// Locales
// =========================================================================

#[test]
fn french_messages_and_connectives() {
    let assertion = that(true).is_false().and_with(&that(2.5).is_gt(3.0));
    assert_snapshot!(
        message(&assertion, &french()),
        @"le booléen 'true' devrait être faux ET le nombre '2,5' devrait être supérieur à '3'"
    );
}

#[test]
fn regional_locale_falls_back_to_language() {
    let config = Config::builder()
        .locale(Locale::parse("fr-CA").unwrap())
        .build();
    let assertion = that(false).is_true();
    assert_snapshot!(message(&assertion, &config), @"le booléen 'false' devrait être vrai");
}

#[test]
fn unknown_locale_falls_back_to_english() {
    let config = Config::builder()
        .locale(Locale::parse("ja").unwrap())
        .build();
    assert_eq!(
        message(&that(false).is_true(), &config),
        "the boolean 'false' should be true"
    );
}

// =========================================================================
// Overrides
// =========================================================================

#[test]
fn override_replaces_validity_message() {
    let assertion = that(2).is_gte(3).with_message(
        MessageOverride::builder()
            .template("%s: expected at least %2$s*, got %1$s*")
            .arguments(args!["retries"])
            .build(),
    );
    assert_eq!(message(&assertion, &english()), "retries: expected at least 3, got 2");
}

#[test]
fn override_locale_wins_over_config() {
    let assertion = that(2.5).is_gt(3.0).with_message(
        MessageOverride::builder()
            .template("%1$s* <= %2$s*")
            .locale(Locale::FRENCH)
            .build(),
    );
    assert_eq!(message(&assertion, &english()), "2,5 <= 3");
}

#[test]
fn override_does_not_apply_to_preconditions() {
    let assertion = that_option::<i32>(None)
        .is_gt(3)
        .with_message(MessageOverride::builder().template("custom").build());
    assert_eq!(message(&assertion, &english()), "the numbers cannot be null");
}

#[test]
fn override_applies_to_the_last_check_only() {
    let assertion = that(5)
        .is_lt(1)
        .and()
        .is_lt(2)
        .with_message(MessageOverride::builder().template("second").build());
    assert_eq!(
        message(&assertion, &english()),
        "the number '5' should be less than '1' AND second"
    );
}

#[test]
fn invalid_override_template_is_used_verbatim() {
    let assertion = that(1)
        .is_zero()
        .with_message(MessageOverride::builder().template("100%q sure").build());
    assert_eq!(message(&assertion, &english()), "100%q sure");
}

// =========================================================================
// Failure conversions
// =========================================================================

#[test]
fn whole_expression_message() {
    let result = that(5)
        .is_gt(10)
        .and()
        .is_lt(20)
        .or_fail_with_message("%s out of range: %1$s* (limits %2$s*, %4$s*)", args!["port"]);
    assert_eq!(
        result,
        Err(AssertionError::Validation {
            message: "port out of range: 5 (limits 10, 20)".to_string()
        })
    );
}

#[test]
fn error_factory_receives_the_failure() {
    #[derive(Debug, PartialEq)]
    struct Rejected(Failure);

    let result = that(5).is_gt(10).or_fail_with(Rejected);
    let Err(Rejected(failure)) = result else {
        panic!("expected a failure");
    };
    assert!(failure.precondition_held);
    assert_eq!(failure.actual, "5");
    assert!(failure.expected.contains("'10'"));
}

#[test]
fn error_factory_is_not_called_on_success() {
    let result: Result<Option<i32>, String> =
        that(5).is_gt(1).or_fail_with(|_| panic!("factory called"));
    assert_eq!(result, Ok(Some(5)));
}

// =========================================================================
// Reports
// =========================================================================

#[test]
fn report_serializes_to_json() {
    let report = that(5).is_gt(10).report_with(&english());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["ok"], false);
    assert_eq!(json["precondition_held"], true);
    assert_eq!(json["message"], "the number '5' should be greater than '10'");
    assert_eq!(json["parameters"][0]["checked"], true);
    assert_eq!(json["parameters"][0]["tag"], "IntegerNumber");
    assert_eq!(json["parameters"][1]["value"]["Integer"], 10);
}

#[test]
fn passing_report_has_no_message() {
    let report = that("ok").is_equal_to("ok").report_with(&english());
    assert!(report.ok);
    assert_eq!(report.message, None);
}
