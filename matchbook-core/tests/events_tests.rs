//! Tests for events

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use matchbook_core::*;

#[test]
fn test_start_details_get_unique_operation_ids() {
    let a = ContactsDeletionStartDetails::new();
    let b = ContactsDeletionStartDetails::new();
    assert_ne!(a.operation_id, b.operation_id);
    assert!(a.timestamp > 0);
}

#[test]
fn test_closure_is_a_handler() {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();

    let handler = move |_: &ContactsEvent| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    };
    handler.on_event(&ContactsEvent::DeletionStarted(
        ContactsDeletionStartDetails::new(),
    ));

    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn test_dispatcher_without_handlers_accepts_events() {
    let dispatcher = EventDispatcher::new();
    dispatcher.start_contacts_upload(ContactsUploadStartDetails::new(1));
    dispatcher.failed_find_matches(ContactsFailureDetails::new(
        "op",
        &ContactsError::Network("down".into()),
    ));
}

#[test]
fn test_event_dispatcher_multiple_handlers() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut dispatcher = EventDispatcher::new();

    for _ in 0..3 {
        let count_clone = count.clone();
        dispatcher = dispatcher.with_handler(move |_: &ContactsEvent| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });
    }

    dispatcher.start_contacts_upload(ContactsUploadStartDetails::new(1));

    assert_eq!(count.load(Ordering::SeqCst), 3);
}

#[test]
fn test_handlers_run_in_registration_order() {
    let order = Arc::new(Mutex::new(Vec::new()));
    let first = order.clone();
    let second = order.clone();
    let dispatcher = EventDispatcher::new()
        .with_handler(move |_: &ContactsEvent| first.lock().unwrap().push("first"))
        .with_handler(move |_: &ContactsEvent| second.lock().unwrap().push("second"));

    dispatcher.start_delete_contacts(ContactsDeletionStartDetails::new());

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn test_dispatcher_maps_collector_calls_to_events() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_clone = seen.clone();
    let dispatcher = EventDispatcher::new().with_handler(move |event: &ContactsEvent| {
        seen_clone.lock().unwrap().push(event.clone());
    });

    let lookup = ContactsLookupStartDetails::new(Some(20), true);
    let op = lookup.operation_id.clone();
    dispatcher.start_find_matches(lookup);
    dispatcher.succeed_find_matches(ContactsLookupSuccessDetails::new(&op, 3, false));
    dispatcher.failed_delete_contacts(ContactsFailureDetails::new(
        "op-x",
        &ContactsError::RateLimited("slow down".into()),
    ));

    let seen = seen.lock().unwrap();
    assert!(matches!(seen[0], ContactsEvent::LookupStarted(_)));
    assert!(matches!(seen[1], ContactsEvent::LookupSucceeded(_)));
    assert_eq!(seen[0].operation_id(), seen[1].operation_id());
    match &seen[2] {
        ContactsEvent::DeletionFailed(details) => assert_eq!(details.error, "rate limited: slow down"),
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_collector_outcome_hooks_default_to_noop() {
    struct StartsOnly(AtomicUsize);

    impl EventCollector for StartsOnly {
        fn start_contacts_upload(&self, _: ContactsUploadStartDetails) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn start_find_matches(&self, _: ContactsLookupStartDetails) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
        fn start_delete_contacts(&self, _: ContactsDeletionStartDetails) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let collector = StartsOnly(AtomicUsize::new(0));
    collector.succeed_delete_contacts(ContactsDeletionSuccessDetails::new("op"));
    let unauthorized = ContactsError::Unauthorized("expired".into());
    collector.failed_find_matches(ContactsFailureDetails::new("op", &unauthorized));
    assert_eq!(collector.0.load(Ordering::SeqCst), 0);
}

#[test]
fn test_details_serialize_to_json() {
    let details = ContactsLookupStartDetails::new(None, false);
    let json = serde_json::to_value(&details).unwrap();
    assert_eq!(json["count"], serde_json::Value::Null);
    assert_eq!(json["has_cursor"], false);
    assert_eq!(json["operation_id"], details.operation_id.as_str());
}
