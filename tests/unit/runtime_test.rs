//! Tests for the runtime API surface

use std::sync::Arc;

use kiln_scheduler::config::SchedulerConfig;
use kiln_scheduler::core::{
    Actor, LaunchScheduler, SchedulerError, SubmitRequest, TransitionRequest, UnitStatus,
};
use kiln_scheduler::infra::InMemoryUnitStore;
use kiln_scheduler::runtime::{
    health, resource_snapshot, submit_unit, transition_unit, ApiError, ApiErrorKind,
};
use kiln_scheduler::util::serde::{PriorityLane, ResourceId, UnitId};

fn scheduler() -> LaunchScheduler<InMemoryUnitStore> {
    LaunchScheduler::new(
        SchedulerConfig::with_target(4),
        Arc::new(InMemoryUnitStore::new()),
    )
}

fn submit_req(quantity: u32) -> SubmitRequest {
    SubmitRequest {
        resource: None,
        quantity,
        lane: PriorityLane::Standard,
        attributes: Default::default(),
    }
}

#[test]
fn test_health() {
    assert!(health().ok);
}

#[tokio::test]
async fn test_submit_and_snapshot_round_trip() {
    let scheduler = scheduler();
    let member = Actor::member("m-1");

    let resp = submit_unit(&scheduler, &member, submit_req(2)).await.unwrap();

    let staff = Actor::staff("kiln-tech");
    let unit = transition_unit(
        &scheduler,
        &staff,
        TransitionRequest::new(resp.unit_id.clone(), UnitStatus::Loaded),
    )
    .await
    .unwrap();
    assert_eq!(unit.unit_id, resp.unit_id);
    assert_eq!(unit.status, UnitStatus::Loaded);

    let snap = resource_snapshot(&scheduler, &ResourceId::default())
        .await
        .unwrap();
    assert_eq!(snap.reading.loaded_total, 2);
}

#[tokio::test]
async fn test_error_kinds_survive_mapping() {
    let scheduler = scheduler();
    let member = Actor::member("m-1");

    let err = submit_unit(&scheduler, &member, submit_req(0)).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Validation);

    let err = transition_unit(
        &scheduler,
        &Actor::staff("kiln-tech"),
        TransitionRequest::new(UnitId::from("missing"), UnitStatus::Loaded),
    )
    .await
    .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::NotFound);
}

#[test]
fn test_api_error_from_scheduler_error() {
    let err: ApiError = SchedulerError::Conflict(UnitId::from("u-1")).into();
    assert_eq!(err.kind, ApiErrorKind::Conflict);
    assert!(err.message.contains("u-1"));

    let err: ApiError = SchedulerError::InvalidTransition {
        from: UnitStatus::Fired,
        to: UnitStatus::Loaded,
    }
    .into();
    assert_eq!(err.kind, ApiErrorKind::InvalidTransition);

    let err: ApiError = SchedulerError::ResourceFrozen(ResourceId::default()).into();
    assert_eq!(err.kind, ApiErrorKind::ResourceFrozen);
}
