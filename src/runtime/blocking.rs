//! Blocking adapter over the async facade for synchronous embedders.

use std::sync::Arc;

use crate::core::error::SchedulerError;
use crate::core::scheduler::{ActiveView, LaunchScheduler, ResourceSnapshot, SubmitRequest};
use crate::core::transition::TransitionRequest;
use crate::core::unit::{Actor, LaunchUnit};
use crate::infra::store::UnitStore;
use crate::util::serde::{ResourceId, UnitId};

/// Synchronous wrapper owning a current-thread tokio runtime.
///
/// For callers without an async runtime of their own (CLIs, desktop shells).
/// Each call blocks until the underlying store round-trip completes.
pub struct BlockingScheduler<S> {
    inner: Arc<LaunchScheduler<S>>,
    runtime: tokio::runtime::Runtime,
}

impl<S: UnitStore> BlockingScheduler<S> {
    /// Wrap a scheduler in a private current-thread runtime.
    pub fn new(inner: Arc<LaunchScheduler<S>>) -> Result<Self, std::io::Error> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        Ok(Self { inner, runtime })
    }

    /// Blocking `submit`.
    pub fn submit(&self, actor: &Actor, req: SubmitRequest) -> Result<UnitId, SchedulerError> {
        self.runtime.block_on(self.inner.submit(actor, req))
    }

    /// Blocking `get_unit`.
    pub fn get_unit(&self, id: &UnitId) -> Result<LaunchUnit, SchedulerError> {
        self.runtime.block_on(self.inner.get_unit(id))
    }

    /// Blocking `list_active`.
    pub fn list_active(&self, resource: &ResourceId) -> Result<ActiveView, SchedulerError> {
        self.runtime.block_on(self.inner.list_active(resource))
    }

    /// Blocking `transition`.
    pub fn transition(
        &self,
        actor: &Actor,
        req: TransitionRequest,
    ) -> Result<LaunchUnit, SchedulerError> {
        self.runtime.block_on(self.inner.transition(actor, req))
    }

    /// Blocking `snapshot`.
    pub fn snapshot(&self, resource: &ResourceId) -> Result<ResourceSnapshot, SchedulerError> {
        self.runtime.block_on(self.inner.snapshot(resource))
    }
}
