//! Tests for shared utility types

use kiln_scheduler::util::clock::now_ms;
use kiln_scheduler::util::serde::{ActorId, PriorityLane, ResourceId, UnitId};

#[test]
fn test_unit_id_uniqueness() {
    let ids: Vec<UnitId> = (0..100).map(|_| UnitId::generate()).collect();
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_unit_id_display_matches_str() {
    let id = UnitId::from("u-42");
    assert_eq!(format!("{}", id), "u-42");
    assert_eq!(id.as_str(), "u-42");
}

#[test]
fn test_default_resource() {
    assert_eq!(ResourceId::default(), ResourceId::from("main"));
}

#[test]
fn test_actor_id_from_string() {
    let id = ActorId::from(String::from("m-1"));
    assert_eq!(id.as_str(), "m-1");
}

#[test]
fn test_lane_order_and_names() {
    assert_eq!(PriorityLane::ALL.len(), 2);
    assert_eq!(PriorityLane::ALL[0], PriorityLane::Expedited);
    assert_eq!(PriorityLane::ALL[1], PriorityLane::Standard);
    assert_eq!(PriorityLane::Expedited.as_str(), "expedited");
    assert_eq!(PriorityLane::Standard.as_str(), "standard");
}

#[test]
fn test_lane_json_round_trip() {
    for lane in PriorityLane::ALL {
        let json = serde_json::to_string(&lane).unwrap();
        let back: PriorityLane = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lane);
    }
}

#[test]
fn test_now_ms_positive() {
    assert!(now_ms() > 0);
}
