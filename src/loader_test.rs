use std::cell::Cell;

use futures::executor::block_on;

use super::*;
use crate::log_capture::{capture, errors};

// =============================================================
// Helpers
// =============================================================

#[derive(Default)]
struct RecordingHeader {
    names: Vec<String>,
    avatars: Vec<String>,
}

impl ProfileSurface for RecordingHeader {
    fn set_user_names(&mut self, text: &str) -> usize {
        self.names.push(text.to_owned());
        1
    }

    fn set_user_avatars(&mut self, src: &str) -> usize {
        self.avatars.push(src.to_owned());
        1
    }
}

fn parse(json: &str) -> UserInfo {
    serde_json::from_str(json).unwrap()
}

fn load(
    result: Result<UserInfo, ApiError>,
    session: &SessionContext,
    header: &mut RecordingHeader,
) -> Option<UserInfo> {
    block_on(load_with(move || async move { result }, session, header))
}

// =============================================================
// Authenticated
// =============================================================

#[test]
fn authenticated_payload_is_stored_and_presented() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();
    let payload = parse(r#"{"authenticated": true, "first_name": "Ana"}"#);

    let loaded = load(Ok(payload.clone()), &session, &mut header);

    assert_eq!(loaded, Some(payload.clone()));
    assert_eq!(session.current_user(), Some(payload));
    assert_eq!(header.names, vec!["Ana"]);
    assert!(header.avatars.is_empty());
}

#[test]
fn authenticated_payload_with_avatar_sets_avatar() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();
    let payload = parse(
        r#"{"authenticated": true, "first_name": "Ana", "last_name": "Silva", "avatar_url": "/a.png"}"#,
    );

    load(Ok(payload), &session, &mut header);

    assert_eq!(header.names, vec!["Ana Silva"]);
    assert_eq!(header.avatars, vec!["/a.png"]);
}

#[test]
fn reload_overwrites_session_with_latest_user() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();
    load(Ok(parse(r#"{"authenticated": true, "first_name": "Ana"}"#)), &session, &mut header);
    load(Ok(parse(r#"{"authenticated": true, "first_name": "Bo"}"#)), &session, &mut header);
    assert_eq!(session.current_user().unwrap().first_name, "Bo");
}

// =============================================================
// Unauthenticated
// =============================================================

#[test]
fn unauthenticated_payload_returns_none_without_writes() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();

    let loaded = load(Ok(parse(r#"{"authenticated": false}"#)), &session, &mut header);

    assert!(loaded.is_none());
    assert!(session.current_user().is_none());
    assert!(header.names.is_empty());
    assert!(header.avatars.is_empty());
}

#[test]
fn unauthenticated_payload_keeps_previous_session() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();
    let first = parse(r#"{"authenticated": true, "first_name": "Ana"}"#);
    load(Ok(first.clone()), &session, &mut header);

    load(Ok(parse(r#"{"authenticated": false, "first_name": "Bo"}"#)), &session, &mut header);

    assert_eq!(session.current_user(), Some(first));
    assert_eq!(header.names, vec!["Ana"]);
}

// =============================================================
// Failures
// =============================================================

#[test]
fn network_failure_returns_none_without_writes() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();

    let loaded = load(Err(ApiError::Network("connection refused".to_owned())), &session, &mut header);

    assert!(loaded.is_none());
    assert!(!session.is_signed_in());
    assert!(header.names.is_empty());
}

#[test]
fn decode_failure_returns_none() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();
    let err = serde_json::from_str::<UserInfo>("not json").unwrap_err();

    assert!(load(Err(ApiError::Decode(err)), &session, &mut header).is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn fetch_runs_exactly_once() {
    let calls = Cell::new(0);
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();

    block_on(load_with(
        || {
            calls.set(calls.get() + 1);
            async { Ok(parse(r#"{"authenticated": true, "first_name": "Ana"}"#)) }
        },
        &session,
        &mut header,
    ));

    assert_eq!(calls.get(), 1);
}

// =============================================================
// Logging
// =============================================================

#[test]
fn network_failure_logs_one_error_line() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();

    let (loaded, lines) = capture(|| {
        load(Err(ApiError::Network("connection refused".to_owned())), &session, &mut header)
    });

    assert!(loaded.is_none());
    let errors = errors(&lines);
    assert_eq!(errors.len(), 1, "{lines:?}");
    assert!(errors[0].message.starts_with("Error loading user info:"));
    assert!(errors[0].message.contains("connection refused"));
}

#[test]
fn decode_failure_logs_one_error_line() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();
    let err = serde_json::from_str::<UserInfo>("not json").unwrap_err();

    let (_, lines) = capture(|| load(Err(ApiError::Decode(err)), &session, &mut header));

    let errors = errors(&lines);
    assert_eq!(errors.len(), 1, "{lines:?}");
    assert!(errors[0].message.starts_with("Error loading user info: invalid response body"));
}

#[test]
fn unauthenticated_payload_logs_no_error() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();

    let (_, lines) =
        capture(|| load(Ok(parse(r#"{"authenticated": false}"#)), &session, &mut header));

    assert!(errors(&lines).is_empty(), "{lines:?}");
}

#[test]
fn authenticated_payload_logs_no_error() {
    let session = SessionContext::new();
    let mut header = RecordingHeader::default();

    let (_, lines) = capture(|| {
        load(Ok(parse(r#"{"authenticated": true, "first_name": "Ana"}"#)), &session, &mut header)
    });

    assert!(errors(&lines).is_empty(), "{lines:?}");
}
