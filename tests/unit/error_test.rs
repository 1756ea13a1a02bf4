//! Tests for error types

use kiln_scheduler::core::{SchedulerError, UnitStatus};
use kiln_scheduler::util::serde::{ActorId, ResourceId, UnitId};

#[test]
fn test_validation_error() {
    let err = SchedulerError::Validation("quantity 0 outside [1, 4]".to_string());
    assert_eq!(
        format!("{}", err),
        "validation failed: quantity 0 outside [1, 4]"
    );
}

#[test]
fn test_not_found_error() {
    let err = SchedulerError::NotFound(UnitId::from("u-123"));
    assert_eq!(format!("{}", err), "unit not found: u-123");
}

#[test]
fn test_unauthorized_error() {
    let err = SchedulerError::Unauthorized {
        actor: ActorId::from("m-1"),
        action: "move unit u-1 from queued to loaded".to_string(),
    };
    assert_eq!(
        format!("{}", err),
        "actor m-1 may not move unit u-1 from queued to loaded"
    );
}

#[test]
fn test_invalid_transition_error() {
    let err = SchedulerError::InvalidTransition {
        from: UnitStatus::Fired,
        to: UnitStatus::Loaded,
    };
    assert_eq!(format!("{}", err), "no transition from fired to loaded");
}

#[test]
fn test_conflict_error() {
    let err = SchedulerError::Conflict(UnitId::from("u-9"));
    assert_eq!(format!("{}", err), "concurrent update conflict on unit u-9");
}

#[test]
fn test_resource_frozen_error() {
    let err = SchedulerError::ResourceFrozen(ResourceId::from("main"));
    assert_eq!(format!("{}", err), "resource main is frozen for maintenance");
}

#[test]
fn test_store_unavailable_error() {
    let err = SchedulerError::StoreUnavailable("connection failed".to_string());
    assert_eq!(format!("{}", err), "store unavailable: connection failed");
}
