#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use visitor_counter_core::{CounterError, ErrorTier};
use visitor_counter_lambda::config::{self, CounterConfig};

#[test]
fn table_only_uses_record_defaults() {
    let cfg = config::load_from_vars([("DYNAMODB_TABLE", "visits")]).expect("must load");
    assert_eq!(
        cfg,
        CounterConfig {
            table_name: "visits".into(),
            key_attribute: "id".into(),
            key_value: "visitor_count".into(),
            count_attribute: "count".into(),
        }
    );
}

#[test]
fn overrides_and_unrelated_vars() {
    let cfg = config::load_from_vars([
        ("PATH", "/usr/bin"),
        ("DYNAMODB_TABLE", "visits"),
        ("COUNTER_KEY_ATTRIBUTE", "pk"),
        ("COUNTER_KEY", "home_page"),
        ("COUNTER_ATTRIBUTE", "hits"),
    ])
    .expect("must load");
    assert_eq!(cfg.key_attribute, "pk");
    assert_eq!(cfg.key_value, "home_page");
    assert_eq!(cfg.count_attribute, "hits");
}

#[test]
fn missing_table_is_unexpected_tier() {
    let err = config::load_from_vars(Vec::<(String, String)>::new()).expect_err("must fail");
    assert_eq!(
        err,
        CounterError::Config("environment variable DYNAMODB_TABLE is not set".into())
    );
    assert_eq!(err.tier(), ErrorTier::Unexpected);
}

#[test]
fn blank_values_rejected() {
    let err = config::load_from_vars([("DYNAMODB_TABLE", "  ")]).expect_err("must fail");
    assert!(err.to_string().contains("DYNAMODB_TABLE"), "{err}");

    let err = config::load_from_vars([("DYNAMODB_TABLE", "visits"), ("COUNTER_KEY", "")])
        .expect_err("must fail");
    assert!(err.to_string().contains("COUNTER_KEY"), "{err}");
}

#[test]
fn key_and_count_attribute_must_differ() {
    let err = config::load_from_vars([("DYNAMODB_TABLE", "visits"), ("COUNTER_ATTRIBUTE", "id")])
        .expect_err("must fail");
    assert!(matches!(err, CounterError::Config(_)));
}
