//! Tests and examples for the testing utilities
//!
//! Shows how code built on value factories is usually tested.

use valuegate::prelude::*;
use valuegate::{assert_failure_message, assert_invalid, assert_valid};

#[derive(Debug, Clone, PartialEq)]
struct Email(String);

fn email_factory() -> ValueFactory<Email, String> {
    ValueFactory::builder()
        .rule(not_blank())
        .rule(length_range(3..=254))
        .rule(matches_pattern(r"[^@\s]+@[^@\s]+\.[^@\s]+").unwrap())
        .build(Email)
}

#[test]
fn test_rules_with_assertion_macros() {
    assert_valid!(not_blank().validate("x"));
    assert_invalid!(not_blank().validate(""));
    assert_failure_message!(max_value(10).validate(&11), "Maximum value is 10");
    assert_failure_message!(
        length_range(3..=20).validate("ab"),
        "Length must be in range of 3..20"
    );
}

#[test]
fn test_check_results_with_assertion_macros() {
    let results = email_factory().check(&"a@b".to_string());
    assert_valid!(results[0]);
    assert_valid!(results[1]);
    assert_failure_message!(results[2], r"Input should match [^@\s]+@[^@\s]+\.[^@\s]+");
}

#[test]
fn test_accepts_good_email() {
    let email = email_factory().create("user@example.com".to_string());
    assert_eq!(email.unwrap(), Email("user@example.com".to_string()));
}

#[test]
fn test_multiple_scenarios() {
    let factory = email_factory();
    let cases = [
        ("user@example.com", true),
        ("", false),
        ("   ", false),
        ("no-at-sign.com", false),
        ("two@@example.com", false),
        ("x@y.z", true),
    ];

    for (raw, accepted) in cases {
        assert_eq!(
            factory.create(raw.to_string()).is_ok(),
            accepted,
            "unexpected outcome for {raw:?}"
        );
    }
}

#[test]
#[should_panic(expected = "Expected Valid, got Invalid: Provided value is empty")]
fn test_assert_valid_reports_message() {
    assert_valid!(email_factory().check(&String::new())[0]);
}
