use crate::LocalSession;

use chrono::{TimeZone, Utc};
use googletest::assert_that;
use googletest::prelude::{anything, eq, err, none, some};

#[test]
fn given_name_only_json_when_from_json_then_session_without_start_time() {
    // Given
    let json = r#"{"name":"ana"}"#;

    // When
    let session = LocalSession::from_json(json).unwrap();

    // Then
    assert_that!(session.name.as_str(), eq("ana"));
    assert_that!(session.started_at, none());
}

#[test]
fn given_session_without_start_time_when_to_json_then_only_name() {
    let session = LocalSession {
        name: String::from("ana"),
        started_at: None,
    };

    assert_that!(session.to_json().unwrap().as_str(), eq(r#"{"name":"ana"}"#));
}

#[test]
fn given_started_session_when_json_roundtrip_then_preserves_millis() {
    // Given
    let started_at = Utc.timestamp_millis_opt(1_700_000_000_456).unwrap();
    let session = LocalSession {
        name: String::from("bob"),
        started_at: Some(started_at),
    };

    // When
    let json = session.to_json().unwrap();
    let restored = LocalSession::from_json(&json).unwrap();

    // Then
    assert!(json.contains(r#""startedAt":1700000000456"#));
    assert_that!(restored, eq(&session));
}

#[test]
fn given_start_when_called_then_has_start_time() {
    let session = LocalSession::start("ana");

    assert_that!(session.name.as_str(), eq("ana"));
    assert_that!(session.started_at, some(anything()));
}

#[test]
fn given_missing_name_when_from_json_then_error() {
    assert_that!(LocalSession::from_json(r#"{"startedAt":1}"#), err(anything()));
}
