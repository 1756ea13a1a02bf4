//! Transition engine: edge legality and role gating for unit lifecycles.

use serde::{Deserialize, Serialize};

use crate::core::error::SchedulerError;
use crate::core::unit::{Actor, LaunchUnit, UnitStatus};
use crate::util::serde::UnitId;

/// A request to move one unit to a new lifecycle state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// Unit to move.
    pub unit_id: UnitId,
    /// Requested state.
    pub target: UnitStatus,
    /// Caller-supplied token identifying this transition attempt. Required
    /// for safe retries of a call whose response was lost.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub idempotency_token: Option<String>,
}

impl TransitionRequest {
    /// Request without an idempotency token.
    #[must_use]
    pub fn new(unit_id: UnitId, target: UnitStatus) -> Self {
        Self {
            unit_id,
            target,
            idempotency_token: None,
        }
    }

    /// Attach an idempotency token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.idempotency_token = Some(token.into());
        self
    }
}

/// Whether the lifecycle defines an edge between two states, for any role.
#[must_use]
pub const fn edge_exists(from: UnitStatus, to: UnitStatus) -> bool {
    use UnitStatus::{Cancelled, Complete, Fired, Loaded, Queued};
    matches!(
        (from, to),
        (Queued, Loaded)
            | (Queued, Cancelled)
            | (Loaded, Fired)
            | (Loaded, Queued)
            | (Loaded, Cancelled)
            | (Fired, Complete)
    )
}

/// Whether the actor's role gates through a defined edge. Owners may cancel
/// their own still-queued units; every other edge is staff-only.
#[must_use]
pub fn role_allows(from: UnitStatus, to: UnitStatus, actor: &Actor, unit: &LaunchUnit) -> bool {
    if actor.is_staff() {
        return true;
    }
    matches!((from, to), (UnitStatus::Queued, UnitStatus::Cancelled)) && unit.owner == actor.id
}

/// Whether a request targeting the unit's current state is a replay of the
/// last accepted transition. True only when the caller's token matches the
/// stored one; a bare repeat without a token stays an error so duplicate
/// clicks surface client bugs.
#[must_use]
pub fn is_idempotent_replay(unit: &LaunchUnit, target: UnitStatus, token: Option<&str>) -> bool {
    unit.status == target
        && token.is_some()
        && unit.last_transition_token.as_deref() == token
}

/// Validate one transition against the lifecycle table and role gates.
///
/// Precedence: edge legality before authorization, so a caller always learns
/// "wrong state" over "wrong role" when both apply. Self-transitions are
/// rejected here; the idempotent-replay path is checked by the facade before
/// this runs.
pub fn check_transition(
    unit: &LaunchUnit,
    target: UnitStatus,
    actor: &Actor,
) -> Result<(), SchedulerError> {
    let from = unit.status;
    if from == target || !edge_exists(from, target) {
        return Err(SchedulerError::InvalidTransition { from, to: target });
    }
    if !role_allows(from, target, actor, unit) {
        return Err(SchedulerError::Unauthorized {
            actor: actor.id.clone(),
            action: format!("move unit {} from {from} to {target}", unit.id),
        });
    }
    Ok(())
}

/// Audit action name for an accepted transition into `target`.
#[must_use]
pub const fn action_name(from: UnitStatus, target: UnitStatus) -> &'static str {
    match (from, target) {
        (UnitStatus::Loaded, UnitStatus::Queued) => "unload",
        (_, UnitStatus::Loaded) => "load",
        (_, UnitStatus::Fired) => "fire",
        (_, UnitStatus::Complete) => "complete",
        _ => "cancel",
    }
}
