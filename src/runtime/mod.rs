//! Runtime adapters and the embedding API surface.

pub mod api;
#[cfg(feature = "tokio-runtime")]
pub mod blocking;

pub use api::{
    health, resource_snapshot, submit_unit, transition_unit, ApiError, ApiErrorKind, Health,
    SubmitResponse, UnitResponse,
};
#[cfg(feature = "tokio-runtime")]
pub use blocking::BlockingScheduler;
