//! Capacity configuration: the full-batch threshold per resource.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::util::serde::ResourceId;

/// Per-resource configuration overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// Full-batch capacity threshold for this resource.
    pub capacity_target: u32,
}

/// Root scheduler configuration.
///
/// One required parameter: the capacity target. It may be a process-wide
/// default or overridden per resource; unknown resources fall back to the
/// default, which is what lets a submission name a brand-new kiln queue
/// without prior setup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Capacity target used when a resource has no override.
    pub default_capacity_target: u32,
    /// Map of resource name to per-resource configuration.
    #[serde(default)]
    pub resources: HashMap<String, ResourceConfig>,
}

impl SchedulerConfig {
    /// Configuration with one process-wide target and no overrides.
    #[must_use]
    pub fn with_target(default_capacity_target: u32) -> Self {
        Self {
            default_capacity_target,
            resources: HashMap::new(),
        }
    }

    /// Add a per-resource override.
    #[must_use]
    pub fn with_resource(mut self, name: impl Into<String>, capacity_target: u32) -> Self {
        self.resources
            .insert(name.into(), ResourceConfig { capacity_target });
        self
    }

    /// Effective capacity target for a resource.
    #[must_use]
    pub fn capacity_target_for(&self, resource: &ResourceId) -> u32 {
        self.resources
            .get(resource.as_str())
            .map_or(self.default_capacity_target, |r| r.capacity_target)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_capacity_target == 0 {
            return Err("default_capacity_target must be greater than 0".into());
        }
        for (name, resource) in &self.resources {
            if resource.capacity_target == 0 {
                return Err(format!(
                    "resource `{name}` invalid: capacity_target must be greater than 0"
                ));
            }
        }
        Ok(())
    }

    /// Parse scheduler configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the environment, `.env` files included.
    ///
    /// `KILN_CAPACITY_TARGET` sets the default target. Optional
    /// `KILN_RESOURCE_TARGETS` carries overrides as
    /// `name=target` pairs separated by commas, e.g.
    /// `glaze-kiln=6,test-kiln=2`.
    pub fn from_env() -> Result<Self, String> {
        // Best-effort: a missing .env file is not an error.
        let _ = dotenvy::dotenv();

        let default_capacity_target = std::env::var("KILN_CAPACITY_TARGET")
            .map_err(|_| "KILN_CAPACITY_TARGET is not set".to_string())?
            .parse::<u32>()
            .map_err(|e| format!("KILN_CAPACITY_TARGET invalid: {e}"))?;

        let mut cfg = Self::with_target(default_capacity_target);
        if let Ok(overrides) = std::env::var("KILN_RESOURCE_TARGETS") {
            for pair in overrides.split(',').filter(|p| !p.trim().is_empty()) {
                let (name, target) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("KILN_RESOURCE_TARGETS entry `{pair}` missing `=`"))?;
                let target = target
                    .trim()
                    .parse::<u32>()
                    .map_err(|e| format!("KILN_RESOURCE_TARGETS entry `{pair}` invalid: {e}"))?;
                cfg = cfg.with_resource(name.trim(), target);
            }
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
