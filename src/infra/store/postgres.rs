//! Postgres-backed unit store (schema and interface stubs).

use async_trait::async_trait;

use crate::core::error::SchedulerError;
use crate::core::unit::{LaunchUnit, UnitPatch};
use crate::infra::store::UnitStore;
use crate::util::serde::{ResourceId, UnitId};

/// Postgres store adapter placeholder.
///
/// Ships the schema the integration layer needs; the row-level conditional
/// update maps onto `UPDATE ... WHERE id = $1 AND version = $2`, which gives
/// the same lost-race semantics as the in-memory reference.
pub struct PostgresUnitStore;

impl PostgresUnitStore {
    /// Migration statements for the unit table.
    #[must_use]
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS kiln_units (
    id TEXT PRIMARY KEY,
    owner_id TEXT NOT NULL,
    resource TEXT NOT NULL,
    quantity INT NOT NULL CHECK (quantity >= 1),
    lane TEXT NOT NULL,
    attributes JSONB NOT NULL DEFAULT '{}'::jsonb,
    status TEXT NOT NULL,
    version BIGINT NOT NULL DEFAULT 1,
    last_transition_token TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_kiln_units_resource_status ON kiln_units (resource, status);
CREATE INDEX IF NOT EXISTS idx_kiln_units_owner ON kiln_units (owner_id);
CREATE INDEX IF NOT EXISTS idx_kiln_units_resource_created ON kiln_units (resource, created_at);
"#,
        ]
    }
}

#[async_trait]
impl UnitStore for PostgresUnitStore {
    async fn create(&self, _unit: LaunchUnit) -> Result<UnitId, SchedulerError> {
        Err(SchedulerError::StoreUnavailable(
            "postgres store not wired to database client".into(),
        ))
    }

    async fn get(&self, _id: &UnitId) -> Result<Option<LaunchUnit>, SchedulerError> {
        Err(SchedulerError::StoreUnavailable(
            "postgres store not wired to database client".into(),
        ))
    }

    async fn conditional_update(
        &self,
        _id: &UnitId,
        _expected_version: u64,
        _patch: UnitPatch,
    ) -> Result<LaunchUnit, SchedulerError> {
        Err(SchedulerError::StoreUnavailable(
            "postgres store not wired to database client".into(),
        ))
    }

    async fn query_by_resource(
        &self,
        _resource: &ResourceId,
    ) -> Result<Vec<LaunchUnit>, SchedulerError> {
        Err(SchedulerError::StoreUnavailable(
            "postgres store not wired to database client".into(),
        ))
    }
}
