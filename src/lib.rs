//! # Kiln Scheduler
//!
//! A capacity-aware launch scheduling engine for shared kiln queues.
//!
//! Studio members submit discrete units of demand (half-shelf requests);
//! staff accumulate them into fixed-capacity batches ("launches") and walk
//! each unit through a gated fulfillment lifecycle. This crate is the
//! queue/capacity/state-machine core of that system, the one part with real
//! invariants to hold under concurrent multi-actor writes.
//!
//! ## What it does
//!
//! - **Queue classification**: partitions pending demand into priority lanes
//!   (`expedited`, `standard`) in stable submission order, with per-lane
//!   aggregate totals.
//! - **Capacity metering**: converts the loaded total into launch-readiness
//!   counts and a bounded shelf-gauge progress view, always re-derived from
//!   the stored units so nothing can drift.
//! - **Lifecycle enforcement**: a staff-gated state machine
//!   (`queued → loaded → fired → complete`, with cancellation and unload
//!   corrections) where every transition is a single conditional write;
//!   concurrent attempts on one unit resolve to exactly one winner.
//!
//! ## Concurrency model
//!
//! Reactive and call-driven: there is no scheduler thread. The unit store is
//! the only shared mutable resource, and its version-checked conditional
//! update is the primitive that makes per-unit histories linearizable. A
//! losing writer sees a retryable `Conflict`; a retried call carrying its
//! idempotency token is recognized and answered as the success it already
//! was.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use kiln_scheduler::config::SchedulerConfig;
//! use kiln_scheduler::core::{Actor, LaunchScheduler, SubmitRequest, TransitionRequest, UnitStatus};
//! use kiln_scheduler::infra::InMemoryUnitStore;
//! use kiln_scheduler::util::serde::{PriorityLane, ResourceId};
//!
//! let config = SchedulerConfig::with_target(4);
//! let scheduler = LaunchScheduler::new(config, Arc::new(InMemoryUnitStore::new()));
//!
//! let member = Actor::member("m-17");
//! let id = scheduler.submit(&member, SubmitRequest {
//!     resource: None,
//!     quantity: 2,
//!     lane: PriorityLane::Standard,
//!     attributes: Default::default(),
//! }).await?;
//!
//! let staff = Actor::staff("kiln-tech");
//! scheduler.transition(&staff, TransitionRequest::new(id, UnitStatus::Loaded)).await?;
//! let snap = scheduler.snapshot(&ResourceId::default()).await?;
//! assert_eq!(snap.reading.current_partial, 2);
//! ```
//!
//! For complete examples, see `tests/launch_lifecycle_test.rs`.

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core engine: classifier, meter, transition engine, and the facade.
pub mod core;
/// Configuration models for capacity targets and resources.
pub mod config;
/// Builders to construct schedulers from configuration.
pub mod builders;
/// Infrastructure adapters for unit stores and the maintenance gate.
pub mod infra;
/// Runtime adapters and the embedding API surface.
pub mod runtime;
/// Shared utilities.
pub mod util;
