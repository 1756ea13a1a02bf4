//! Queue classifier: pure partitioning of a resource's units into lanes.

use serde::{Deserialize, Serialize};

use crate::core::unit::{LaunchUnit, UnitStatus};
use crate::util::serde::PriorityLane;

/// The queued units of one lane, in submission order, with their aggregate
/// demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneQueue {
    /// Lane these units were submitted into.
    pub lane: PriorityLane,
    /// Queued units, `created_at_ms` ascending. Ties keep input order; the
    /// classifier imposes no ordering beyond stable insertion order.
    pub units: Vec<LaunchUnit>,
    /// Sum of `quantity` over the queued units.
    pub total_quantity: u32,
}

/// Per-lane view of all pending demand for one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueView {
    /// One entry per lane, in `PriorityLane::ALL` order, present even when
    /// empty so renderers need no existence checks.
    pub lanes: Vec<LaneQueue>,
}

impl QueueView {
    /// Look up a single lane.
    #[must_use]
    pub fn lane(&self, lane: PriorityLane) -> Option<&LaneQueue> {
        self.lanes.iter().find(|l| l.lane == lane)
    }
}

/// Partition a resource's units into per-lane queued views.
///
/// Pure: reads the slice, allocates the result, touches nothing else.
#[must_use]
pub fn classify(units: &[LaunchUnit]) -> QueueView {
    let lanes = PriorityLane::ALL
        .iter()
        .map(|&lane| {
            let mut queued: Vec<LaunchUnit> = units
                .iter()
                .filter(|u| u.lane == lane && u.status == UnitStatus::Queued)
                .cloned()
                .collect();
            queued.sort_by_key(|u| u.created_at_ms);
            let total_quantity = queued.iter().map(|u| u.quantity).sum();
            LaneQueue {
                lane,
                units: queued,
                total_quantity,
            }
        })
        .collect();
    QueueView { lanes }
}

/// Sum of `quantity` over units currently `loaded`.
///
/// This is the canonical load figure: always recomputed by summation over the
/// stored units, never read from a counter that could drift.
#[must_use]
pub fn loaded_total(units: &[LaunchUnit]) -> u32 {
    units
        .iter()
        .filter(|u| u.status == UnitStatus::Loaded)
        .map(|u| u.quantity)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unit::UnitAttributes;
    use crate::util::serde::{ActorId, ResourceId, UnitId};

    fn unit(lane: PriorityLane, status: UnitStatus, quantity: u32, created_at_ms: u128) -> LaunchUnit {
        LaunchUnit {
            id: UnitId::generate(),
            owner: ActorId::from("member-1"),
            resource: ResourceId::default(),
            quantity,
            lane,
            attributes: UnitAttributes::default(),
            status,
            version: 1,
            last_transition_token: None,
            created_at_ms,
            updated_at_ms: created_at_ms,
        }
    }

    #[test]
    fn lanes_split_and_sum() {
        let units = vec![
            unit(PriorityLane::Standard, UnitStatus::Queued, 2, 300),
            unit(PriorityLane::Expedited, UnitStatus::Queued, 1, 100),
            unit(PriorityLane::Standard, UnitStatus::Queued, 3, 200),
            unit(PriorityLane::Standard, UnitStatus::Loaded, 4, 50),
        ];
        let view = classify(&units);
        let expedited = view.lane(PriorityLane::Expedited).unwrap();
        let standard = view.lane(PriorityLane::Standard).unwrap();
        assert_eq!(expedited.units.len(), 1);
        assert_eq!(expedited.total_quantity, 1);
        assert_eq!(standard.units.len(), 2);
        assert_eq!(standard.total_quantity, 5);
    }

    #[test]
    fn queued_units_sorted_by_creation() {
        let units = vec![
            unit(PriorityLane::Standard, UnitStatus::Queued, 1, 300),
            unit(PriorityLane::Standard, UnitStatus::Queued, 1, 100),
            unit(PriorityLane::Standard, UnitStatus::Queued, 1, 200),
        ];
        let view = classify(&units);
        let times: Vec<u128> = view
            .lane(PriorityLane::Standard)
            .unwrap()
            .units
            .iter()
            .map(|u| u.created_at_ms)
            .collect();
        assert_eq!(times, vec![100, 200, 300]);
    }

    #[test]
    fn non_queued_states_excluded_from_lanes() {
        let units = vec![
            unit(PriorityLane::Expedited, UnitStatus::Loaded, 2, 100),
            unit(PriorityLane::Expedited, UnitStatus::Fired, 2, 110),
            unit(PriorityLane::Expedited, UnitStatus::Complete, 2, 120),
            unit(PriorityLane::Expedited, UnitStatus::Cancelled, 2, 130),
        ];
        let view = classify(&units);
        assert!(view.lane(PriorityLane::Expedited).unwrap().units.is_empty());
        assert_eq!(view.lane(PriorityLane::Expedited).unwrap().total_quantity, 0);
    }

    #[test]
    fn loaded_total_sums_only_loaded() {
        let units = vec![
            unit(PriorityLane::Standard, UnitStatus::Loaded, 2, 100),
            unit(PriorityLane::Expedited, UnitStatus::Loaded, 3, 110),
            unit(PriorityLane::Standard, UnitStatus::Fired, 4, 120),
            unit(PriorityLane::Standard, UnitStatus::Queued, 5, 130),
        ];
        assert_eq!(loaded_total(&units), 5);
    }

    #[test]
    fn empty_input_yields_empty_lanes() {
        let view = classify(&[]);
        assert_eq!(view.lanes.len(), PriorityLane::ALL.len());
        assert!(view.lanes.iter().all(|l| l.units.is_empty() && l.total_quantity == 0));
    }
}
