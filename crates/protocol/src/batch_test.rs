//! Tests for Batch

use super::*;

fn batch_of(bodies: &[&'static [u8]]) -> Batch {
    bodies.iter().map(|b| Event::new(*b)).collect()
}

#[test]
fn test_empty_batch() {
    let batch = Batch::empty();
    assert!(batch.is_empty());
    assert_eq!(batch.len(), 0);
}

#[test]
fn test_event_order_preserved() {
    let batch = batch_of(&[b"first", b"second", b"third"]);

    assert_eq!(batch.len(), 3);
    let bodies: Vec<&[u8]> = batch.events().iter().map(|e| e.body()).collect();
    assert_eq!(bodies, vec![&b"first"[..], &b"second"[..], &b"third"[..]]);
}

#[test]
fn test_events_mut_allows_header_mutation() {
    let mut batch = batch_of(&[b"a", b"b"]);

    for event in batch.events_mut() {
        event
            .header_mut()
            .insert("tag".to_string(), serde_json::json!("x"));
    }

    assert!(batch.events().iter().all(|e| e.header().contains_key("tag")));
    assert_eq!(batch.len(), 2);
}

#[test]
fn test_into_events() {
    let batch = batch_of(&[b"one", b"two"]);
    let events = batch.into_events();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].body(), b"one");
    assert_eq!(events[1].body(), b"two");
}

#[test]
fn test_from_vec() {
    let batch = Batch::from(vec![Event::new(&b"x"[..])]);
    assert_eq!(batch.len(), 1);
}
