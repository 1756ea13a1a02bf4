//! Configuration models for capacity targets and resources.

pub mod capacity;

pub use capacity::{ResourceConfig, SchedulerConfig};
