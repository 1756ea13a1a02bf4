//! Unit store backends.
//!
//! The store is the engine's only shared mutable resource. Its
//! `conditional_update` is the concurrency primitive the whole design leans
//! on: a write keyed on the last-seen version either applies atomically or
//! fails with `Conflict`, so two racing transitions on one unit can never
//! both land.

use async_trait::async_trait;

use crate::core::error::SchedulerError;
use crate::core::unit::{LaunchUnit, UnitPatch};
use crate::util::serde::{ResourceId, UnitId};

pub mod memory;
pub mod postgres;

pub use memory::InMemoryUnitStore;
pub use postgres::PostgresUnitStore;

/// Durable collection of launch units with optimistic concurrency.
///
/// Implementations must apply `conditional_update` atomically: check the
/// expected version, apply the patch, bump the version, and refresh
/// `updated_at_ms` as one step. Units are never deleted; terminal states are
/// retained for history.
#[async_trait]
pub trait UnitStore: Send + Sync + 'static {
    /// Persist a new unit and return its id. The record is stored exactly as
    /// given; the facade seeds `version` 1 and both timestamps.
    async fn create(&self, unit: LaunchUnit) -> Result<UnitId, SchedulerError>;

    /// Fetch one unit, `None` when the id is unknown.
    async fn get(&self, id: &UnitId) -> Result<Option<LaunchUnit>, SchedulerError>;

    /// Apply a patch if the stored version still equals `expected_version`.
    /// Returns the updated record, `Conflict` when a concurrent writer got
    /// there first, `NotFound` for unknown ids.
    async fn conditional_update(
        &self,
        id: &UnitId,
        expected_version: u64,
        patch: UnitPatch,
    ) -> Result<LaunchUnit, SchedulerError>;

    /// All units belonging to a resource, in `created_at_ms` order. Includes
    /// terminal units; callers filter by status.
    async fn query_by_resource(
        &self,
        resource: &ResourceId,
    ) -> Result<Vec<LaunchUnit>, SchedulerError>;
}
