//! Tests for Event

use super::*;
use serde_json::json;

#[test]
fn test_new_event_has_empty_header() {
    let event = Event::new(&b"2024-01-01 INFO started"[..]);

    assert_eq!(event.body(), b"2024-01-01 INFO started");
    assert!(event.header().is_empty());
}

#[test]
fn test_header_mutation_in_place() {
    let mut event = Event::new(&b"ERROR disk full"[..]);

    event
        .header_mut()
        .insert("source".to_string(), json!("syslog"));

    assert_eq!(event.header().get("source"), Some(&json!("syslog")));
    // Body is untouched by header mutation
    assert_eq!(event.body(), b"ERROR disk full");
}

#[test]
fn test_with_header() {
    let mut header = HashMap::new();
    header.insert("app".to_string(), json!("checkout"));

    let event = Event::with_header(&b"payload"[..], header);

    assert_eq!(event.header().len(), 1);
    assert_eq!(event.header().get("app"), Some(&json!("checkout")));
}

#[test]
fn test_empty_body() {
    let event = Event::new(Bytes::new());
    assert!(event.body().is_empty());
}

#[test]
fn test_body_bytes_is_zero_copy() {
    let buffer = Bytes::from_static(b"shared line");
    let event = Event::new(buffer.clone());

    // Same underlying buffer, no copy
    assert_eq!(event.body_bytes().as_ptr(), buffer.as_ptr());
}
