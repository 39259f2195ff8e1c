use vouch_semantics::{Operator, Side, combine_precondition, combine_validity, failed_side};

const PAIRS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

fn table(operator: Operator) -> [bool; 4] {
    PAIRS.map(|(left, right)| combine_validity(left, right, operator))
}

#[test]
fn and_truth_table() {
    assert_eq!(table(Operator::And), [true, false, false, false]);
}

#[test]
fn or_truth_table() {
    assert_eq!(table(Operator::Or), [true, true, true, false]);
}

#[test]
fn xor_truth_table() {
    assert_eq!(table(Operator::Xor), [false, true, true, false]);
}

#[test]
fn nand_truth_table() {
    assert_eq!(table(Operator::Nand), [false, true, true, true]);
}

#[test]
fn nor_truth_table() {
    assert_eq!(table(Operator::Nor), [false, false, false, true]);
}

#[test]
fn method_form_matches_free_function() {
    for operator in Operator::ALL {
        for (left, right) in PAIRS {
            assert_eq!(
                operator.combine_validity(left, right),
                combine_validity(left, right, operator)
            );
        }
    }
}

#[test]
fn precondition_requires_both_sides_for_every_operator() {
    assert!(combine_precondition(true, true));
    assert!(!combine_precondition(true, false));
    assert!(!combine_precondition(false, true));
    assert!(!combine_precondition(false, false));
}

#[test]
fn failed_side_reports_leftmost_failure() {
    assert_eq!(failed_side(true, true), None);
    assert_eq!(failed_side(false, true), Some(Side::Left));
    assert_eq!(failed_side(true, false), Some(Side::Right));
    assert_eq!(failed_side(false, false), Some(Side::Left));
}

#[test]
fn connectives_are_uppercase_names() {
    for operator in Operator::ALL {
        assert_eq!(operator.connective(), operator.name().to_uppercase());
        assert_eq!(operator.to_string(), operator.connective());
    }
}
