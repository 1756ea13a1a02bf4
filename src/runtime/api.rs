//! API-facing request/response models for embedding surfaces.
//!
//! Thin serializable shells over the facade. Errors keep their kind so a
//! presentation layer can render `Conflict`, `InvalidTransition`, and
//! `Unauthorized` as the distinct outcomes they are.

use serde::{Deserialize, Serialize};

use crate::core::error::SchedulerError;
use crate::core::scheduler::{LaunchScheduler, ResourceSnapshot, SubmitRequest};
use crate::core::transition::TransitionRequest;
use crate::core::unit::{Actor, LaunchUnit, UnitStatus};
use crate::infra::store::UnitStore;
use crate::util::serde::{ResourceId, UnitId};

/// Discriminant of a scheduler error, stable across serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorKind {
    /// Malformed input.
    Validation,
    /// Unknown unit.
    NotFound,
    /// Role refused.
    Unauthorized,
    /// No such lifecycle edge.
    InvalidTransition,
    /// Lost a concurrent-write race; retry after a fresh read.
    Conflict,
    /// Resource frozen for maintenance.
    ResourceFrozen,
    /// Backend failure.
    StoreUnavailable,
}

/// Serializable error envelope for API consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error discriminant.
    pub kind: ApiErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl From<SchedulerError> for ApiError {
    fn from(err: SchedulerError) -> Self {
        let kind = match err {
            SchedulerError::Validation(_) => ApiErrorKind::Validation,
            SchedulerError::NotFound(_) => ApiErrorKind::NotFound,
            SchedulerError::Unauthorized { .. } => ApiErrorKind::Unauthorized,
            SchedulerError::InvalidTransition { .. } => ApiErrorKind::InvalidTransition,
            SchedulerError::Conflict(_) => ApiErrorKind::Conflict,
            SchedulerError::ResourceFrozen(_) => ApiErrorKind::ResourceFrozen,
            SchedulerError::StoreUnavailable(_) => ApiErrorKind::StoreUnavailable,
        };
        Self {
            kind,
            message: err.to_string(),
        }
    }
}

/// Response to a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Identifier of the created unit.
    pub unit_id: UnitId,
}

/// Thin unit status response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitResponse {
    /// Unit identifier.
    pub unit_id: UnitId,
    /// Current lifecycle state.
    pub status: UnitStatus,
    /// Version after the operation, for follow-up conditional calls.
    pub version: u64,
    /// Last accepted mutation, epoch milliseconds.
    pub updated_at_ms: u128,
}

impl From<LaunchUnit> for UnitResponse {
    fn from(unit: LaunchUnit) -> Self {
        Self {
            unit_id: unit.id,
            status: unit.status,
            version: unit.version,
            updated_at_ms: unit.updated_at_ms,
        }
    }
}

/// Health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    /// Healthy flag.
    pub ok: bool,
}

/// Submit new demand on behalf of an actor.
pub async fn submit_unit<S: UnitStore>(
    scheduler: &LaunchScheduler<S>,
    actor: &Actor,
    req: SubmitRequest,
) -> Result<SubmitResponse, ApiError> {
    let unit_id = scheduler.submit(actor, req).await?;
    Ok(SubmitResponse { unit_id })
}

/// Apply one lifecycle transition on behalf of an actor.
pub async fn transition_unit<S: UnitStore>(
    scheduler: &LaunchScheduler<S>,
    actor: &Actor,
    req: TransitionRequest,
) -> Result<UnitResponse, ApiError> {
    let unit = scheduler.transition(actor, req).await?;
    Ok(unit.into())
}

/// Fetch the launch-readiness snapshot for a resource.
pub async fn resource_snapshot<S: UnitStore>(
    scheduler: &LaunchScheduler<S>,
    resource: &ResourceId,
) -> Result<ResourceSnapshot, ApiError> {
    Ok(scheduler.snapshot(resource).await?)
}

/// Return a health payload.
#[must_use]
pub const fn health() -> Health {
    Health { ok: true }
}
