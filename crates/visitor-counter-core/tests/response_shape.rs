//! Response object and body encoding tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::{json, Value};
use visitor_counter_core::response::{encode_body, CorsHeaders, CounterResponse};
use visitor_counter_core::CounterError;

fn expected_headers() -> Value {
    json!({
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": "GET",
        "Access-Control-Allow-Headers": "Content-Type"
    })
}

#[test]
fn success_body_matches_wire_text() {
    let resp = CounterResponse::ok(1).unwrap();
    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.body, r#"{"count": 1}"#);
}

#[test]
fn serialized_response_uses_camel_case_status() {
    let resp = CounterResponse::ok(42).unwrap();
    let v = serde_json::to_value(&resp).unwrap();
    assert_eq!(v["statusCode"], 200);
    assert_eq!(v["headers"], expected_headers());
    assert_eq!(v["body"], r#"{"count": 42}"#);
    assert_eq!(v.as_object().unwrap().len(), 3);
}

#[test]
fn headers_identical_on_every_path() {
    let ok = CounterResponse::ok(5).unwrap();
    let store = CounterResponse::from_error(&CounterError::Store("denied".into()));
    let other = CounterResponse::from_error(&CounterError::Config("unset".into()));

    for resp in [&ok, &store, &other] {
        assert_eq!(resp.headers, CorsHeaders::default());
        assert_eq!(serde_json::to_value(&resp.headers).unwrap(), expected_headers());
    }
}

#[test]
fn error_bodies_carry_tier_prefix() {
    let store = CounterResponse::from_error(&CounterError::Store("denied".into()));
    assert_eq!(store.status_code, 500);
    assert_eq!(store.body, r#"{"error": "DynamoDB error: denied"}"#);

    let other = CounterResponse::from_error(&CounterError::Internal("boom".into()));
    assert_eq!(other.status_code, 500);
    assert_eq!(other.body, r#"{"error": "Unexpected error: boom"}"#);
}

#[test]
fn error_body_escapes_quotes_and_non_ascii() {
    let resp = CounterResponse::from_error(&CounterError::Store("table \"visits\" – gone".into()));
    assert_eq!(
        resp.body,
        r#"{"error": "DynamoDB error: table \"visits\" \u2013 gone"}"#
    );
    let parsed: Value = serde_json::from_str(&resp.body).unwrap();
    assert_eq!(parsed["error"], "DynamoDB error: table \"visits\" – gone");
}

#[test]
fn astral_chars_escape_as_surrogate_pair() {
    assert_eq!(encode_body(&json!({ "e": "😀" })).unwrap(), r#"{"e": "\ud83d\ude00"}"#);
}

#[test]
fn multi_member_separators() {
    let body = encode_body(&json!({ "a": 1, "b": [1, 2] })).unwrap();
    assert_eq!(body, r#"{"a": 1, "b": [1, 2]}"#);
}

