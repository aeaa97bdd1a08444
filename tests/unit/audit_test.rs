//! Tests for audit sink

use corewise::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    sink.record(build_audit_event(1, Some(0), AuditAction::Dispatch, 4));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].job_id, 1);
    assert_eq!(events[0].core, Some(0));
    assert_eq!(events[0].action, AuditAction::Dispatch);
    assert_eq!(events[0].time, 4);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(1, None, AuditAction::Arrive, 0));
    sink.record(build_audit_event(2, None, AuditAction::Arrive, 1));
    sink.record(build_audit_event(3, None, AuditAction::Arrive, 2));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].job_id, 2); // First one popped
    assert_eq!(events[1].job_id, 3);
}

#[test]
fn test_build_audit_event_ids_are_unique() {
    let a = build_audit_event(1, None, AuditAction::Rotate, 0);
    let b = build_audit_event(1, None, AuditAction::Rotate, 0);
    assert_ne!(a.event_id, b.event_id);
    assert_eq!(a.action.to_string(), "rotate");
}
