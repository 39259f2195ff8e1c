//! Integration tests for building and evaluating assertion trees.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use vouch::{
    AssertionError, BooleanChecks, Check, Config, MessageSource, Node, NumberChecks, ObjectChecks,
    Operator, Sequence, TextChecks, TypeTag, that, that_option,
};

fn english() -> Config {
    Config::default()
}

/// A check that counts validator calls.
fn counting(calls: &Arc<AtomicUsize>) -> Check<String> {
    let calls = Arc::clone(calls);
    Check::new("text.contains", move |_: Option<&String>, _| {
        calls.fetch_add(1, Ordering::SeqCst);
        true
    })
    .precondition(|value: Option<&String>| value.is_some())
    .argument("ex")
}

// =========================================================================
// End-to-end examples
// =========================================================================

#[test]
fn text_contains_and_ends_with_holds() {
    let assertion = that("text").contains("ex").and().ends_with("t");
    assert!(assertion.is_ok());
    assert_eq!(assertion.errors_with(&english()), None);
    assert_eq!(assertion.or_fail(), Ok(Some("text")));
}

#[test]
fn boolean_and_number_fails_with_composite_message() {
    let assertion = that(true).is_true().and_with(&that(5).is_gt(10));
    assert!(!assertion.is_ok());
    assert_eq!(
        assertion.errors_with(&english()).as_deref(),
        Some("the boolean 'true' should be true AND the number '5' should be greater than '10'")
    );
}

#[test]
fn null_text_fails_its_precondition() {
    let err = that_option::<String>(None)
        .contains("ex")
        .or_fail_in(&english())
        .unwrap_err();
    assert_eq!(
        err,
        AssertionError::Precondition {
            message: "the text cannot be null and the searched substring cannot be null or empty"
                .to_string()
        }
    );
}

#[test]
fn nand_of_false_and_true_is_valid() {
    let assertion = that(12).is_gt(12).nand_with(&that("text").contains("ex"));
    assert!(assertion.is_ok());
    assert_eq!(assertion.errors_with(&english()), None);
}

// =========================================================================
// Operators
// =========================================================================

#[test]
fn combined_validity_follows_truth_tables() {
    for operator in Operator::ALL {
        for (left, right) in [(true, true), (true, false), (false, true), (false, false)] {
            let assertion = that(left)
                .is_true()
                .combine_with(&that(right).is_true(), operator);
            assert_eq!(
                assertion.is_ok(),
                operator.combine_validity(left, right),
                "{operator} with ({left}, {right})"
            );
        }
    }
}

#[test]
fn same_value_operators() {
    assert!(that(5).is_gt(1).and().is_lt(10).is_ok());
    assert!(that(5).is_gt(10).or().is_lt(10).is_ok());
    assert!(!that(5).is_gt(1).xor().is_lt(10).is_ok());
    assert!(that(5).is_gt(10).nor().is_lt(1).is_ok());
    assert!(that(5).is_gt(10).nand().is_lt(10).is_ok());
    assert!(!that(5).is_gt(1).nand().is_lt(10).is_ok());
}

#[test]
fn cross_value_operators() {
    assert!(that(5).is_gt(1).xor_with(&that("text").contains("zz")).is_ok());
    assert!(!that(5).is_gt(1).xor_with(&that("text").contains("ex")).is_ok());
    assert!(that(5).is_gt(10).nor_with(&that(false).is_true()).is_ok());
    assert!(!that(5).is_gt(10).nor_with(&that(true).is_true()).is_ok());
}

#[test]
fn or_does_not_rescue_a_failed_precondition() {
    let assertion = that_option::<bool>(None)
        .is_true()
        .or_with(&that(true).is_true());
    let outcome = assertion.evaluate();
    assert!(!outcome.precondition_held());
    assert_eq!(
        outcome.message(&english()).as_deref(),
        Some("the boolean cannot be null")
    );
}

#[test]
fn first_failed_precondition_supplies_the_message() {
    let assertion = that(true)
        .is_true()
        .and_with(&that_option::<i32>(None).is_gt(3))
        .and_with(&that_option::<String>(None).is_empty());
    assert_eq!(
        assertion.errors_with(&english()).as_deref(),
        Some("the numbers cannot be null")
    );
}

#[test]
fn negation_applies_to_the_next_check_only() {
    assert!(that("text").not().contains("zz").and().contains("ex").is_ok());
    assert!(!that("text").not().contains("ex").is_ok());
    assert!(that(3).not().not().is_positive().is_ok());
}

// =========================================================================
// Short-circuit and reuse
// =========================================================================

#[test]
fn failed_precondition_never_runs_the_validator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let assertion = that_option::<String>(None).check(counting(&calls));

    let outcome = assertion.evaluate();
    assert!(!outcome.precondition_held());
    assert!(!outcome.is_ok());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(
        outcome.message(&english()).as_deref(),
        Some("the text cannot be null and the searched substring cannot be null or empty")
    );
}

#[test]
fn check_after_failed_precondition_is_skipped() {
    let calls = Arc::new(AtomicUsize::new(0));
    let node = Node::leaf(None::<String>, TypeTag::Text)
        .step(Check::on_value("text.empty", String::is_empty))
        .step(counting(&calls));

    let outcome = node.evaluate();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(outcome.parameters().len(), 1);
    assert_eq!(
        outcome.message(&english()).as_deref(),
        Some("the text cannot be null")
    );
}

#[test]
fn prefix_is_reusable() {
    let prefix = that(7).is_gt(5);
    let below_ten = prefix.and().is_lt(10);
    let below_six = prefix.and().is_lt(6);

    assert!(prefix.is_ok());
    assert!(below_ten.is_ok());
    assert!(!below_six.is_ok());
    assert!(below_ten.is_ok());
}

#[test]
fn building_never_evaluates() {
    let calls = Arc::new(AtomicUsize::new(0));
    let _assertion = that("value".to_string()).check(counting(&calls));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn terminals_agree() {
    let cases = [
        that(5).is_gt(10),
        that(5).is_gt(1),
        that_option::<i32>(None).is_gt(1),
        that(5).is_gt(1).xor().is_lt(10),
    ];
    for assertion in &cases {
        let ok = assertion.is_ok();
        assert_eq!(assertion.evaluate().is_ok(), ok);
        assert_eq!(assertion.errors_with(&english()).is_none(), ok);
        assert_eq!(assertion.or_fail_in(&english()).is_ok(), ok);
        assert_eq!(assertion.to_option().is_some(), ok);
    }
}

#[test]
fn outcome_separates_the_two_tiers() {
    let invalid = that(5).is_gt(10).evaluate();
    assert!(invalid.precondition_held());
    assert!(!invalid.is_valid());
    assert!(invalid.message_source().is_some_and(|source| !source.is_composite()));

    let unsuitable = that_option::<i32>(None).is_gt(1).evaluate();
    assert!(!unsuitable.precondition_held());
    assert!(!unsuitable.is_valid());

    let combined = that(5).is_gt(10).or().is_lt(1).evaluate();
    assert!(combined.message_source().is_some_and(MessageSource::is_composite));

    let passed = Node::of(Some(5_i32)).evaluate();
    assert!(passed.is_valid());
    assert!(passed.message_source().is_none());
}

#[test]
fn failed_combination_of_bare_values_still_explains_itself() {
    let nor = Node::of(Some(1_i32)).combine(&Node::of(Some(2_i32)), Operator::Nor);
    let outcome = nor.evaluate();
    assert!(!outcome.is_ok());
    assert_eq!(
        outcome.message(&english()).as_deref(),
        Some("the combined values do not satisfy NOR")
    );
    assert!(!nor.is_ok());

    let nand = Sequence::new(Node::of(Some(true)))
        .operator(Operator::Nand)
        .operand(Node::of(Some(false)))
        .build()
        .unwrap();
    let error = nand.evaluate().error(&english()).unwrap();
    assert_eq!(
        error,
        AssertionError::Validation {
            message: "the combined values do not satisfy NAND".to_string()
        }
    );
}

#[test]
fn passing_combination_of_bare_values_has_no_message() {
    let and = Node::of(Some(1_i32)).combine(&Node::of(Some(2_i32)), Operator::And);
    assert_eq!(and.evaluate().message(&english()), None);
}

#[test]
fn value_terminals() {
    assert_eq!(that(5).is_gt(1).to_option(), Some(5));
    assert_eq!(that(5).is_gt(10).to_option(), None);
    assert_eq!(that(5).is_gt(10).or_default(42), 42);
    assert_eq!(that_option::<i32>(None).is_null().or_default(7), 7);
}

#[test]
fn nodes_are_shared_across_threads() {
    let prefix = that(21).is_gt(20);
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let prefix = prefix.clone();
            thread::spawn(move || prefix.and().is_lt(22 + i).is_ok())
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

// =========================================================================
// Parameter capture
// =========================================================================

#[test]
fn parameters_are_captured_in_traversal_order() {
    let outcome = that(5).is_between(1, 3).and_with(&that("abc").has_length(2)).evaluate();
    let values: Vec<String> = outcome
        .parameters()
        .iter()
        .map(|parameter| parameter.value.to_string())
        .collect();
    assert_eq!(values, vec!["5", "1", "3", "abc", "2"]);

    let checked: Vec<bool> = outcome.parameters().iter().map(|p| p.checked).collect();
    assert_eq!(checked, vec![true, false, false, true, false]);
    assert_eq!(outcome.parameters()[0].tag, TypeTag::IntegerNumber);
    assert_eq!(outcome.parameters()[3].tag, TypeTag::Text);
}

#[test]
fn null_checked_value_is_captured_as_null() {
    let outcome = that_option::<i32>(None).is_equal_to(1).evaluate();
    assert!(outcome.precondition_held());
    assert_eq!(
        outcome.message(&english()).as_deref(),
        Some("the object 'null' should be equal to '1'")
    );
}
