// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::AvailabilityEdit;
use crate::events::EventDraft;
use spinbook_domain::{
    BookingRequestId, BookingResponse, EventId, EventUpdate, MediaKind, ProfileUpdate, UserId,
};

/// A command represents user intent as data only.
///
/// Commands are the only way to request marketplace writes. They carry no
/// identity; the session context passed to [`crate::apply`] says who is acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Edit the caller's own profile.
    UpdateProfile {
        /// Fields to change.
        update: ProfileUpdate,
    },
    /// Apply availability edits and save once.
    EditAvailability {
        /// Edits in the order the DJ made them.
        edits: Vec<AvailabilityEdit>,
    },
    /// Create an event.
    CreateEvent {
        /// The event fields.
        draft: EventDraft,
    },
    /// Edit an owned event.
    UpdateEvent {
        /// The event to edit.
        event_id: EventId,
        /// Fields to change.
        update: EventUpdate,
    },
    /// Send a booking request to a DJ.
    RequestBooking {
        /// The promoter's event.
        event_id: EventId,
        /// The DJ being asked.
        dj_id: UserId,
        /// Optional note to the DJ.
        message: Option<String>,
    },
    /// Accept or decline a request.
    RespondToBooking {
        /// The request being answered.
        request_id: BookingRequestId,
        /// The answer.
        response: BookingResponse,
    },
    /// Upload a profile file.
    UploadMedia {
        /// Which file this is.
        kind: MediaKind,
        /// MIME type reported by the client.
        content_type: String,
        /// File content.
        bytes: Vec<u8>,
    },
    /// Re-block the dates of booked events in the caller's availability.
    ReconcileBookedDates,
}

impl Command {
    /// Short name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateProfile { .. } => "UpdateProfile",
            Self::EditAvailability { .. } => "EditAvailability",
            Self::CreateEvent { .. } => "CreateEvent",
            Self::UpdateEvent { .. } => "UpdateEvent",
            Self::RequestBooking { .. } => "RequestBooking",
            Self::RespondToBooking { .. } => "RespondToBooking",
            Self::UploadMedia { .. } => "UploadMedia",
            Self::ReconcileBookedDates => "ReconcileBookedDates",
        }
    }
}
