//! Tests for audit sinks

use kiln_scheduler::core::{build_audit_event, AuditSink, InMemoryAuditSink, PostgresAuditSink};

#[test]
fn test_build_audit_event() {
    let event = build_audit_event("e-1", "u-1", "main", "kiln-tech", "load", None);
    assert_eq!(event.event_id, "e-1");
    assert_eq!(event.unit_id, "u-1");
    assert_eq!(event.resource, "main");
    assert_eq!(event.actor, "kiln-tech");
    assert_eq!(event.action, "load");
    assert!(event.detail.is_none());
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_in_memory_sink_records() {
    let mut sink = InMemoryAuditSink::new(10);
    sink.record(build_audit_event("e-1", "u-1", "main", "m-1", "submit", None));
    sink.record(build_audit_event("e-2", "u-1", "main", "kiln-tech", "load", None));
    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, "submit");
    assert_eq!(events[1].action, "load");
}

#[test]
fn test_in_memory_sink_bounded() {
    let mut sink = InMemoryAuditSink::new(2);
    for i in 0..5 {
        sink.record(build_audit_event(
            format!("e-{i}"),
            "u-1",
            "main",
            "m-1",
            "submit",
            None,
        ));
    }
    let events = sink.events();
    assert_eq!(events.len(), 2);
    // Oldest entries evicted first.
    assert_eq!(events[0].event_id, "e-3");
    assert_eq!(events[1].event_id, "e-4");
}

#[test]
fn test_postgres_sink_migrations_mention_audit_table() {
    let migrations = PostgresAuditSink::migrations();
    assert!(!migrations.is_empty());
    assert!(migrations[0].contains("kiln_audit_events"));
}
