//! Maintenance gate: the external frozen/maintenance flag, checked before
//! transitions but owned elsewhere.

use std::collections::HashSet;

use parking_lot::RwLock;

use crate::util::serde::ResourceId;

/// External maintenance flag provider.
pub trait MaintenanceGate: Send + Sync {
    /// Whether the resource is currently frozen for maintenance.
    fn is_frozen(&self, resource: &ResourceId) -> bool;
}

/// Gate that never freezes anything; the default.
pub struct OpenGate;

impl MaintenanceGate for OpenGate {
    fn is_frozen(&self, _resource: &ResourceId) -> bool {
        false
    }
}

/// Gate over an explicit freeze set, togglable at runtime. Suitable for
/// embedding applications that manage maintenance windows themselves.
#[derive(Default)]
pub struct StaticGate {
    frozen: RwLock<HashSet<ResourceId>>,
}

impl StaticGate {
    /// Create a gate with nothing frozen.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Freeze a resource; its transitions are refused until thawed.
    pub fn freeze(&self, resource: ResourceId) {
        self.frozen.write().insert(resource);
    }

    /// Thaw a resource.
    pub fn thaw(&self, resource: &ResourceId) {
        self.frozen.write().remove(resource);
    }
}

impl MaintenanceGate for StaticGate {
    fn is_frozen(&self, resource: &ResourceId) -> bool {
        self.frozen.read().contains(resource)
    }
}
