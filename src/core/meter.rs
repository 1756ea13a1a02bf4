//! Capacity meter: pure translation of aggregate load into launch signals.

use serde::{Deserialize, Serialize};

/// Launch-readiness signals derived from one resource's loaded total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityReading {
    /// Configured full-batch capacity threshold.
    pub capacity_target: u32,
    /// Sum of loaded quantities the reading was derived from.
    pub loaded_total: u32,
    /// Full launches dispatchable right now.
    pub ready_launches: u32,
    /// Fill of the batch currently being assembled, in `[0, capacity_target]`.
    /// A loaded total that is an exact positive multiple of the target reads
    /// as `capacity_target`, not 0: a just-completed full load is "ready to
    /// launch", never "empty".
    pub current_partial: u32,
    /// Capacity units still needed to fill the current batch.
    pub needed_to_fill: u32,
}

impl CapacityReading {
    /// Bounded progress representation: one flag per capacity slot of the
    /// batch being assembled, filled slots first. Length is always
    /// `capacity_target`.
    #[must_use]
    pub fn shelf_gauge(&self) -> Vec<bool> {
        (0..self.capacity_target)
            .map(|slot| slot < self.current_partial)
            .collect()
    }
}

/// Derive launch-readiness from a loaded total and capacity target.
///
/// Deterministic and side-effect free; re-derivable at any time, so no
/// persisted readiness flag can desync from the stored units.
/// `capacity_target` must be positive, which configuration validation
/// guarantees.
#[must_use]
pub fn measure(loaded_total: u32, capacity_target: u32) -> CapacityReading {
    debug_assert!(capacity_target > 0, "capacity_target validated at config time");
    let ready_launches = loaded_total / capacity_target;
    let remainder = loaded_total % capacity_target;
    let current_partial = if loaded_total > 0 && remainder == 0 {
        capacity_target
    } else {
        remainder
    };
    let needed_to_fill = capacity_target - current_partial.min(capacity_target);
    CapacityReading {
        capacity_target,
        loaded_total,
        ready_launches,
        current_partial,
        needed_to_fill,
    }
}
