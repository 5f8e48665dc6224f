// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::store::StoreError;
use spinbook_domain::{BookingRequestId, DomainError, EventId, UserId};

/// Errors that can occur while running a marketplace workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated. Nothing was written.
    DomainViolation(DomainError),
    /// A store call failed.
    Store(StoreError),
    /// A record the workflow needs does not exist.
    NotFound {
        /// The kind of record.
        resource: String,
        /// Its identifier.
        id: String,
    },
    /// The signed-in account may not perform this action.
    Forbidden {
        /// The attempted action.
        action: String,
        /// Why it was refused.
        reason: String,
    },
    /// An active booking request already exists for this event and DJ.
    DuplicateRequest {
        /// The event.
        event_id: EventId,
        /// The DJ.
        dj_id: UserId,
    },
    /// The first write of a two-write sequence succeeded and the second failed.
    ///
    /// The first write is not undone.
    PartialWrite {
        /// The booking request whose status was written.
        request_id: BookingRequestId,
        /// What was committed.
        committed: String,
        /// The failure of the second write.
        failed: StoreError,
    },
}

impl CoreError {
    pub(crate) fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    pub(crate) fn forbidden(action: &str, reason: &str) -> Self {
        Self::Forbidden {
            action: action.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Store(err) => write!(f, "Store error: {err}"),
            Self::NotFound { resource, id } => write!(f, "{resource} {id} not found"),
            Self::Forbidden { action, reason } => {
                write!(f, "Not permitted to {action}: {reason}")
            }
            Self::DuplicateRequest { event_id, dj_id } => write!(
                f,
                "A booking request for event {event_id} and DJ {dj_id} already exists"
            ),
            Self::PartialWrite {
                request_id,
                committed,
                failed,
            } => write!(
                f,
                "Booking request {request_id}: {committed}, but the follow-up write failed: {failed}"
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource, id } => Self::NotFound { resource, id },
            other => Self::Store(other),
        }
    }
}
