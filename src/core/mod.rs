//! Core scheduling engine: classification, capacity accounting, and the
//! lifecycle state machine.

pub mod audit;
pub mod classifier;
pub mod error;
pub mod meter;
pub mod scheduler;
pub mod transition;
pub mod unit;

pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, PostgresAuditSink};
pub use classifier::{classify, loaded_total, LaneQueue, QueueView};
pub use error::{AppResult, SchedulerError};
pub use meter::{measure, CapacityReading};
pub use scheduler::{ActiveView, LaneTotal, LaunchScheduler, ResourceSnapshot, SubmitRequest};
pub use transition::{
    action_name, check_transition, edge_exists, is_idempotent_replay, role_allows,
    TransitionRequest,
};
pub use unit::{Actor, LaunchUnit, Role, UnitAttributes, UnitPatch, UnitStatus};
