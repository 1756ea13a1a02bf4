//! Error types for scheduler operations.

use thiserror::Error;

use crate::core::unit::UnitStatus;
use crate::util::serde::{ActorId, ResourceId, UnitId};

/// Errors produced by scheduler components.
///
/// `InvalidTransition` and `Unauthorized` are deliberately distinct so a
/// caller can tell "wrong state" from "wrong role" and render different
/// guidance. `Conflict` is the only retryable variant, and only after a
/// fresh read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// Malformed input; returned to the caller, never retried unchanged.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Referenced unit does not exist.
    #[error("unit not found: {0}")]
    NotFound(UnitId),
    /// The operation exists but the actor's role does not gate through.
    #[error("actor {actor} may not {action}")]
    Unauthorized {
        /// Acting identity that was refused.
        actor: ActorId,
        /// Operation that was refused, in human-readable form.
        action: String,
    },
    /// No edge from the unit's current state to the requested one.
    #[error("no transition from {from} to {to}")]
    InvalidTransition {
        /// State the unit is currently in.
        from: UnitStatus,
        /// State the caller asked for.
        to: UnitStatus,
    },
    /// A concurrent writer won the optimistic-concurrency race. The caller
    /// may re-read and retry; the engine never retries internally.
    #[error("concurrent update conflict on unit {0}")]
    Conflict(UnitId),
    /// The resource is frozen for maintenance; transitions are refused until
    /// it thaws.
    #[error("resource {0} is frozen for maintenance")]
    ResourceFrozen(ResourceId),
    /// Backend I/O failure; fatal for the current call. Single conditional
    /// writes mean no partial effect is possible.
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
