//! Audit sink implementations.
//!
//! Every accepted facade operation records one event. Provides an in-memory
//! sink and Postgres schema definitions for audit persistence.

use std::collections::VecDeque;

use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Related unit identifier.
    pub unit_id: String,
    /// Resource the unit belongs to.
    pub resource: String,
    /// Acting identity.
    pub actor: String,
    /// Action taken (submit, load, unload, fire, complete, cancel, annotate).
    pub action: String,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
    /// Additional context.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Postgres-backed audit sink (schema-only; DB I/O not wired).
pub struct PostgresAuditSink;

impl PostgresAuditSink {
    /// Returns SQL migration statements for the audit log.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS kiln_audit_events (
    event_id TEXT PRIMARY KEY,
    unit_id TEXT NOT NULL,
    resource TEXT NOT NULL,
    actor TEXT NOT NULL,
    action TEXT NOT NULL,
    detail JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_kiln_audit_events_resource_created ON kiln_audit_events (resource, created_at);
CREATE INDEX IF NOT EXISTS idx_kiln_audit_events_unit ON kiln_audit_events (unit_id);
CREATE INDEX IF NOT EXISTS idx_kiln_audit_events_actor ON kiln_audit_events (actor);
"#,
        ]
    }
}

impl AuditSink for PostgresAuditSink {
    fn record(&mut self, _event: AuditEvent) {
        // Stub: actual DB writes require a runtime + client; left to integration layer.
    }
}

/// Helper to build an audit event from context.
pub fn build_audit_event(
    event_id: impl Into<String>,
    unit_id: impl Into<String>,
    resource: impl Into<String>,
    actor: impl Into<String>,
    action: impl Into<String>,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: event_id.into(),
        unit_id: unit_id.into(),
        resource: resource.into(),
        actor: actor.into(),
        action: action.into(),
        created_at_ms: now_ms(),
        detail,
    }
}
