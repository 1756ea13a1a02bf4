//! Tests for the capacity meter

use kiln_scheduler::core::measure;
use rand::Rng;

#[test]
fn test_empty_load() {
    let reading = measure(0, 4);
    assert_eq!(reading.ready_launches, 0);
    assert_eq!(reading.current_partial, 0);
    assert_eq!(reading.needed_to_fill, 4);
}

#[test]
fn test_full_load_reads_full() {
    // A load of exactly one multiple of capacity is "ready to launch",
    // not "empty".
    let reading = measure(4, 4);
    assert_eq!(reading.ready_launches, 1);
    assert_eq!(reading.current_partial, 4);
    assert_eq!(reading.needed_to_fill, 0);
}

#[test]
fn test_overfull_load() {
    let reading = measure(9, 4);
    assert_eq!(reading.ready_launches, 2);
    assert_eq!(reading.current_partial, 1);
    assert_eq!(reading.needed_to_fill, 3);
}

#[test]
fn test_random_loads_stay_bounded() {
    let mut rng = rand::rng();
    for _ in 0..1000 {
        let loaded = rng.random_range(0..500u32);
        let target = rng.random_range(1..20u32);
        let reading = measure(loaded, target);
        assert_eq!(reading.ready_launches, loaded / target);
        assert!(reading.current_partial <= target);
        assert_eq!(
            reading.needed_to_fill,
            target - reading.current_partial.min(target)
        );
        assert_eq!(reading.shelf_gauge().len(), target as usize);
    }
}

#[test]
fn test_measure_is_deterministic() {
    for loaded in [0u32, 1, 3, 4, 5, 8, 13] {
        assert_eq!(measure(loaded, 4), measure(loaded, 4));
    }
}
