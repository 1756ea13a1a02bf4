//! Launch unit model: the demand record everything else schedules around.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::serde::{ActorId, PriorityLane, ResourceId, UnitId};

/// Lifecycle state of a launch unit.
///
/// `Complete` and `Cancelled` are terminal; units reaching them are retained
/// for history, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    /// Submitted and waiting for staff to pull it onto a shelf.
    Queued,
    /// Accepted into the batch currently being assembled; counts toward load.
    Loaded,
    /// Batch physically started; no longer counts toward load.
    Fired,
    /// Fulfilled and closed.
    Complete,
    /// Withdrawn before firing.
    Cancelled,
}

impl UnitStatus {
    /// Whether this state admits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Cancelled)
    }

    /// Stable string name, matching the serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Loaded => "loaded",
            Self::Fired => "fired",
            Self::Complete => "complete",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Role claim attached to a caller by the external identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular member; may submit and cancel their own queued work.
    Member,
    /// Studio staff; may drive the full lifecycle for any unit.
    Staff,
}

/// An acting identity plus its role claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Resolved identity.
    pub id: ActorId,
    /// Role claim, trusted as-is.
    pub role: Role,
}

impl Actor {
    /// Construct a member actor.
    pub fn member(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            role: Role::Member,
        }
    }

    /// Construct a staff actor.
    pub fn staff(id: impl Into<ActorId>) -> Self {
        Self {
            id: id.into(),
            role: Role::Staff,
        }
    }

    /// Whether this actor carries the staff role.
    #[must_use]
    pub const fn is_staff(&self) -> bool {
        matches!(self.role, Role::Staff)
    }
}

/// Advisory metadata describing the physical work. Never consulted by
/// scheduling logic; `notes` is the only field that may change after
/// creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitAttributes {
    /// Clay body the pieces are made of.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clay_body: Option<String>,
    /// Glaze treatment, if decided at submission time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glaze: Option<String>,
    /// Free-text notes for staff.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One member's request for a slice of kiln capacity.
///
/// `owner`, `resource`, `quantity`, and `lane` are fixed at creation.
/// `status` moves only through the transition engine; `version` and
/// `updated_at_ms` are maintained by the unit store on every accepted
/// mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchUnit {
    /// Unique identifier.
    pub id: UnitId,
    /// Submitting member.
    pub owner: ActorId,
    /// Kiln queue this unit belongs to.
    pub resource: ResourceId,
    /// Demand in capacity units (half-shelves), within `[1, CAPACITY_TARGET]`.
    pub quantity: u32,
    /// Priority lane chosen at submission.
    pub lane: PriorityLane,
    /// Advisory metadata.
    pub attributes: UnitAttributes,
    /// Current lifecycle state.
    pub status: UnitStatus,
    /// Optimistic-concurrency version, bumped on every accepted write.
    pub version: u64,
    /// Idempotency token of the last accepted transition, if the caller
    /// supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_token: Option<String>,
    /// Creation timestamp, epoch milliseconds.
    pub created_at_ms: u128,
    /// Last accepted mutation, epoch milliseconds.
    pub updated_at_ms: u128,
}

/// Mutable-field patch applied through `UnitStore::conditional_update`.
///
/// Only the fields the data model allows to change are representable here;
/// everything else on a stored unit is immutable by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPatch {
    /// New lifecycle state, if the patch carries a transition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<UnitStatus>,
    /// Replacement for the stored idempotency token. Outer `None` leaves the
    /// token untouched; `Some(None)` clears it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_token: Option<Option<String>>,
    /// Replacement notes text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl UnitPatch {
    /// Patch for an accepted transition: the new status plus the token that
    /// authorized it (stored even when absent, so stale tokens cannot match
    /// later calls).
    #[must_use]
    pub fn transition(status: UnitStatus, token: Option<String>) -> Self {
        Self {
            status: Some(status),
            transition_token: Some(token),
            notes: None,
        }
    }

    /// Patch replacing the advisory notes only.
    #[must_use]
    pub fn notes(notes: impl Into<String>) -> Self {
        Self {
            status: None,
            transition_token: None,
            notes: Some(notes.into()),
        }
    }
}
