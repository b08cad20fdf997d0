use std::sync::Arc;

use super::common::*;
use crate::pipeline::domain::HireRequestId;
use crate::pipeline::notification::{
    NotificationDispatcher, NotificationKind, RecordingNotificationSink,
};

#[test]
fn approval_emits_the_two_fixed_notifications() {
    let sink = Arc::new(RecordingNotificationSink::new());
    let dispatcher = NotificationDispatcher::new(sink.clone());
    let hire_id = HireRequestId("hire-approved".to_string());

    dispatcher.on_status_approved(&hire_id, BUSINESS);

    let events = sink.events();
    assert_eq!(events.len(), 2);

    assert_eq!(events[0].kind, NotificationKind::Hire);
    assert_eq!(events[0].entity, "FREELANCER");
    assert_eq!(events[0].recipients, vec![hire_id.0.clone()]);

    assert_eq!(events[1].kind, NotificationKind::Hire);
    assert_eq!(events[1].entity, "BUSINESS");
    assert_eq!(events[1].recipients, vec![BUSINESS.to_string()]);

    assert_ne!(events[0].id, events[1].id, "each envelope gets its own id");
}

#[test]
fn dispatch_is_fire_and_forget() {
    let dispatcher = NotificationDispatcher::new(Arc::new(FailingSink));

    // A dead transport must not unwind into the caller.
    dispatcher.on_status_approved(&HireRequestId("hire-x".to_string()), BUSINESS);
}

#[test]
fn envelopes_serialize_with_wire_field_names() {
    let sink = Arc::new(RecordingNotificationSink::new());
    let dispatcher = NotificationDispatcher::new(sink.clone());

    dispatcher.on_status_approved(&HireRequestId("hire-wire".to_string()), BUSINESS);

    let value = serde_json::to_value(&sink.events()[0]).expect("serializes");
    assert_eq!(value["type"], "HIRE");
    assert!(value["userId"].is_array());
    assert!(value["timestamp"].is_string());
}
