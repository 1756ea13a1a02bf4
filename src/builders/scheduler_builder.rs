//! Builders to construct schedulers from configuration.

use std::sync::Arc;

use crate::config::SchedulerConfig;
use crate::core::audit::AuditSink;
use crate::core::error::SchedulerError;
use crate::core::scheduler::LaunchScheduler;
use crate::infra::gate::MaintenanceGate;
use crate::infra::store::UnitStore;

/// Build a scheduler from configuration using provided factories.
///
/// Validates the configuration first, so an invalid capacity target can
/// never reach the capacity meter.
pub fn build_scheduler<S, FS, FG>(
    cfg: &SchedulerConfig,
    store_factory: FS,
    gate_factory: FG,
    audit: Option<Box<dyn AuditSink>>,
) -> Result<LaunchScheduler<S>, SchedulerError>
where
    S: UnitStore,
    FS: FnOnce(&SchedulerConfig) -> Result<Arc<S>, SchedulerError>,
    FG: FnOnce(&SchedulerConfig) -> Result<Arc<dyn MaintenanceGate>, SchedulerError>,
{
    cfg.validate()
        .map_err(|e| SchedulerError::Validation(format!("config invalid: {e}")))?;

    let store = store_factory(cfg)?;
    let gate = gate_factory(cfg)?;
    let mut scheduler = LaunchScheduler::new(cfg.clone(), store).with_gate(gate);
    if let Some(sink) = audit {
        scheduler = scheduler.with_audit(sink);
    }
    Ok(scheduler)
}
