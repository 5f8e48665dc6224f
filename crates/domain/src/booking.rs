// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking request status tracking and transition logic.
//!
//! A request starts `Pending` and is answered exactly once by the DJ it is
//! addressed to. Both answers are terminal.

use crate::error::DomainError;
use crate::types::{BookingRequestId, EventId, UserId};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a booking request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting the DJ's answer.
    #[serde(alias = "Pending")]
    Pending,
    /// The DJ accepted. Older records may carry the label "accepted".
    #[serde(alias = "accepted", alias = "Accepted", alias = "Booked")]
    Booked,
    /// The DJ declined.
    #[serde(alias = "Declined")]
    Declined,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Booked => "booked",
            Self::Declined => "declined",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// Matching ignores case, and `accepted` is read as [`BookingStatus::Booked`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBookingStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "booked" | "accepted" => Ok(Self::Booked),
            "declined" => Ok(Self::Declined),
            _ => Err(DomainError::InvalidBookingStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Booked | Self::Declined)
    }

    /// Returns true if a request in this status blocks another request for
    /// the same event and DJ.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Booked)
    }

    /// Position of the status on a promoter's event board.
    #[must_use]
    pub const fn board_rank(&self) -> u8 {
        match self {
            Self::Booked => 0,
            Self::Pending => 1,
            Self::Declined => 2,
        }
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("request has already been answered"),
            });
        }

        if matches!(new_status, Self::Booked | Self::Declined) {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: String::from("a request can only be accepted or declined"),
            })
        }
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DJ's answer to a pending request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingResponse {
    Accept,
    Decline,
}

impl BookingResponse {
    /// The status a request moves to on this answer.
    #[must_use]
    pub const fn target_status(&self) -> BookingStatus {
        match self {
            Self::Accept => BookingStatus::Booked,
            Self::Decline => BookingStatus::Declined,
        }
    }
}

/// A promoter's proposal to a DJ for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: BookingRequestId,
    pub event_id: EventId,
    pub dj_id: UserId,
    pub promoter_id: UserId,
    pub status: BookingStatus,
    pub message: Option<String>,
    pub created_at: String,
}

/// Fields of a booking request before the store assigns an id.
///
/// New requests always start [`BookingStatus::Pending`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBookingRequest {
    pub event_id: EventId,
    pub dj_id: UserId,
    pub promoter_id: UserId,
    pub message: Option<String>,
}
