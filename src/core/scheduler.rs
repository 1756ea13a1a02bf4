//! Scheduler facade: the only entry point external callers use.
//!
//! Composes the classifier, meter, and transition engine against a unit
//! store. Holds no process-wide mutable state of its own; the store is the
//! single shared resource, so every operation is safe under parallel
//! invocation and per-unit linearizability comes from the store's
//! conditional writes.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::classifier::{classify, loaded_total, QueueView};
use crate::core::error::SchedulerError;
use crate::core::meter::{measure, CapacityReading};
use crate::core::transition::{
    action_name, check_transition, is_idempotent_replay, TransitionRequest,
};
use crate::core::unit::{Actor, LaunchUnit, UnitAttributes, UnitPatch, UnitStatus};
use crate::infra::gate::{MaintenanceGate, OpenGate};
use crate::infra::store::UnitStore;
use crate::util::clock::now_ms;
use crate::util::serde::{PriorityLane, ResourceId, UnitId};

/// A member's submission of new demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitRequest {
    /// Target kiln queue; the default resource when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<ResourceId>,
    /// Demand in capacity units, `[1, CAPACITY_TARGET]` for the resource.
    pub quantity: u32,
    /// Priority lane, fixed for the unit's lifetime.
    pub lane: PriorityLane,
    /// Advisory metadata.
    #[serde(default)]
    pub attributes: UnitAttributes,
}

/// Everything in flight for one resource: pending lanes plus the units on and
/// past the shelf.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveView {
    /// Resource this view describes.
    pub resource: ResourceId,
    /// Queued units per lane.
    pub queue: QueueView,
    /// Units in the batch being assembled, `created_at_ms` ascending.
    pub loaded_units: Vec<LaunchUnit>,
    /// Units in batches that have physically started, `created_at_ms`
    /// ascending.
    pub fired_units: Vec<LaunchUnit>,
}

/// Aggregate pending demand for one lane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaneTotal {
    /// Lane the figures describe.
    pub lane: PriorityLane,
    /// Number of queued units.
    pub queued_units: usize,
    /// Sum of their quantities.
    pub total_quantity: u32,
}

/// The canonical read model the application renders from. Derived fresh on
/// every call; never cached as authoritative state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceSnapshot {
    /// Resource this snapshot describes.
    pub resource: ResourceId,
    /// Launch-readiness figures from the capacity meter.
    pub reading: CapacityReading,
    /// Pending demand per lane.
    pub lane_totals: Vec<LaneTotal>,
}

/// Capacity-aware launch scheduler over a unit store.
pub struct LaunchScheduler<S> {
    store: Arc<S>,
    config: SchedulerConfig,
    gate: Arc<dyn MaintenanceGate>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<S> LaunchScheduler<S> {
    /// Create a scheduler from validated configuration and a store. The
    /// maintenance gate defaults to always-open.
    pub fn new(config: SchedulerConfig, store: Arc<S>) -> Self {
        Self {
            store,
            config,
            gate: Arc::new(OpenGate),
            audit: None,
        }
    }

    /// Attach a maintenance gate.
    #[must_use]
    pub fn with_gate(mut self, gate: Arc<dyn MaintenanceGate>) -> Self {
        self.gate = gate;
        self
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::new(Mutex::new(audit)));
        self
    }

    /// Configuration the scheduler was built with.
    #[must_use]
    pub const fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Record an audit event (sync operation with parking_lot mutex).
    fn record_audit(&self, unit: &LaunchUnit, actor: &Actor, action: &str) {
        if let Some(audit_sink) = &self.audit {
            let mut sink = audit_sink.lock();
            sink.record(build_audit_event(
                format!("{}-{}-{}", unit.id, action, now_ms()),
                unit.id.to_string(),
                unit.resource.to_string(),
                actor.id.to_string(),
                action.to_string(),
                None,
            ));
        }
    }
}

impl<S: UnitStore> LaunchScheduler<S> {
    /// Submit new demand. Validates quantity against the resource's capacity
    /// target, creates the unit in `queued`, and returns its id. Nothing is
    /// created when validation fails.
    pub async fn submit(
        &self,
        actor: &Actor,
        req: SubmitRequest,
    ) -> Result<UnitId, SchedulerError> {
        let resource = req.resource.unwrap_or_default();
        let target = self.config.capacity_target_for(&resource);
        if req.quantity < 1 || req.quantity > target {
            tracing::warn!(
                resource = %resource,
                quantity = req.quantity,
                capacity_target = target,
                "submission rejected: quantity out of bounds"
            );
            return Err(SchedulerError::Validation(format!(
                "quantity {} outside [1, {target}] for resource {resource}",
                req.quantity
            )));
        }

        let now = now_ms();
        let unit = LaunchUnit {
            id: UnitId::generate(),
            owner: actor.id.clone(),
            resource,
            quantity: req.quantity,
            lane: req.lane,
            attributes: req.attributes,
            status: UnitStatus::Queued,
            version: 1,
            last_transition_token: None,
            created_at_ms: now,
            updated_at_ms: now,
        };

        let id = self.store.create(unit.clone()).await?;
        tracing::info!(unit = %id, resource = %unit.resource, lane = %unit.lane, "unit submitted");
        self.record_audit(&unit, actor, "submit");
        Ok(id)
    }

    /// Fetch one unit by id.
    pub async fn get_unit(&self, id: &UnitId) -> Result<LaunchUnit, SchedulerError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| SchedulerError::NotFound(id.clone()))
    }

    /// Read-only view of everything in flight for a resource. Safe to call
    /// concurrently and as often as the caller likes.
    pub async fn list_active(
        &self,
        resource: &ResourceId,
    ) -> Result<ActiveView, SchedulerError> {
        let units = self.store.query_by_resource(resource).await?;
        let queue = classify(&units);
        let mut loaded_units: Vec<LaunchUnit> = units
            .iter()
            .filter(|u| u.status == UnitStatus::Loaded)
            .cloned()
            .collect();
        loaded_units.sort_by_key(|u| u.created_at_ms);
        let mut fired_units: Vec<LaunchUnit> = units
            .iter()
            .filter(|u| u.status == UnitStatus::Fired)
            .cloned()
            .collect();
        fired_units.sort_by_key(|u| u.created_at_ms);
        Ok(ActiveView {
            resource: resource.clone(),
            queue,
            loaded_units,
            fired_units,
        })
    }

    /// Apply one lifecycle transition through a read-then-conditional-write.
    ///
    /// A replayed call carrying the token of the unit's last accepted
    /// transition succeeds without touching the store, so retry storms after
    /// a lost response stay invisible to users. A lost concurrency race
    /// surfaces as `Conflict`; the engine never retries internally.
    pub async fn transition(
        &self,
        actor: &Actor,
        req: TransitionRequest,
    ) -> Result<LaunchUnit, SchedulerError> {
        let unit = self.get_unit(&req.unit_id).await?;

        if is_idempotent_replay(&unit, req.target, req.idempotency_token.as_deref()) {
            tracing::debug!(unit = %unit.id, to = %req.target, "idempotent replay accepted");
            return Ok(unit);
        }

        if self.gate.is_frozen(&unit.resource) {
            tracing::warn!(unit = %unit.id, resource = %unit.resource, "transition refused: resource frozen");
            return Err(SchedulerError::ResourceFrozen(unit.resource));
        }

        check_transition(&unit, req.target, actor)?;

        let from = unit.status;
        let patch = UnitPatch::transition(req.target, req.idempotency_token);
        let updated = self
            .store
            .conditional_update(&unit.id, unit.version, patch)
            .await?;

        let action = action_name(from, req.target);
        tracing::info!(unit = %updated.id, from = %from, to = %req.target, actor = %actor.id, "transition applied");
        self.record_audit(&updated, actor, action);
        Ok(updated)
    }

    /// Replace the advisory notes on a unit. Staff may annotate any unit;
    /// members only their own.
    pub async fn annotate(
        &self,
        actor: &Actor,
        unit_id: &UnitId,
        notes: impl Into<String> + Send,
    ) -> Result<LaunchUnit, SchedulerError> {
        let unit = self.get_unit(unit_id).await?;
        if !actor.is_staff() && unit.owner != actor.id {
            return Err(SchedulerError::Unauthorized {
                actor: actor.id.clone(),
                action: format!("annotate unit {}", unit.id),
            });
        }
        let updated = self
            .store
            .conditional_update(&unit.id, unit.version, UnitPatch::notes(notes.into()))
            .await?;
        self.record_audit(&updated, actor, "annotate");
        Ok(updated)
    }

    /// Launch-readiness snapshot for one resource, derived fresh from the
    /// stored units on every call.
    pub async fn snapshot(
        &self,
        resource: &ResourceId,
    ) -> Result<ResourceSnapshot, SchedulerError> {
        let view = self.list_active(resource).await?;
        let load = loaded_total(&view.loaded_units);
        let reading = measure(load, self.config.capacity_target_for(resource));
        let lane_totals = view
            .queue
            .lanes
            .iter()
            .map(|l| LaneTotal {
                lane: l.lane,
                queued_units: l.units.len(),
                total_quantity: l.total_quantity,
            })
            .collect();
        Ok(ResourceSnapshot {
            resource: resource.clone(),
            reading,
            lane_totals,
        })
    }
}
