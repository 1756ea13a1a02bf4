//! In-memory unit store with per-record versioning.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::error::SchedulerError;
use crate::core::unit::{LaunchUnit, UnitPatch};
use crate::infra::store::UnitStore;
use crate::util::clock::now_ms;
use crate::util::serde::{ResourceId, UnitId};

/// Reference store for development and testing.
///
/// A single parking_lot mutex around the map makes every operation atomic,
/// which is exactly the conditional-write guarantee the trait asks for. The
/// mutex is never held across an await point.
#[derive(Default)]
pub struct InMemoryUnitStore {
    units: Mutex<HashMap<UnitId, LaunchUnit>>,
}

impl InMemoryUnitStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored units, terminal ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.lock().len()
    }

    /// Whether the store holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.lock().is_empty()
    }
}

#[async_trait]
impl UnitStore for InMemoryUnitStore {
    async fn create(&self, unit: LaunchUnit) -> Result<UnitId, SchedulerError> {
        let id = unit.id.clone();
        let mut units = self.units.lock();
        if units.contains_key(&id) {
            return Err(SchedulerError::StoreUnavailable(format!(
                "duplicate unit id {id}"
            )));
        }
        units.insert(id.clone(), unit);
        Ok(id)
    }

    async fn get(&self, id: &UnitId) -> Result<Option<LaunchUnit>, SchedulerError> {
        Ok(self.units.lock().get(id).cloned())
    }

    async fn conditional_update(
        &self,
        id: &UnitId,
        expected_version: u64,
        patch: UnitPatch,
    ) -> Result<LaunchUnit, SchedulerError> {
        let mut units = self.units.lock();
        let unit = units
            .get_mut(id)
            .ok_or_else(|| SchedulerError::NotFound(id.clone()))?;
        if unit.version != expected_version {
            return Err(SchedulerError::Conflict(id.clone()));
        }
        if let Some(status) = patch.status {
            unit.status = status;
        }
        if let Some(token) = patch.transition_token {
            unit.last_transition_token = token;
        }
        if let Some(notes) = patch.notes {
            unit.attributes.notes = Some(notes);
        }
        unit.version += 1;
        unit.updated_at_ms = now_ms();
        Ok(unit.clone())
    }

    async fn query_by_resource(
        &self,
        resource: &ResourceId,
    ) -> Result<Vec<LaunchUnit>, SchedulerError> {
        let units = self.units.lock();
        let mut matching: Vec<LaunchUnit> = units
            .values()
            .filter(|u| &u.resource == resource)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.created_at_ms
                .cmp(&b.created_at_ms)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        Ok(matching)
    }
}
