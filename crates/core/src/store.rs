// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence collaborator every workflow runs against.

use spinbook_domain::{
    BookingRequest, BookingRequestId, BookingStatus, CandidateProfile, Event, EventId,
    EventUpdate, MediaKind, NewBookingRequest, NewEvent, Profile, ProfileUpdate, UserId,
};

/// Failure reported by a store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A write targeted a record that does not exist.
    NotFound {
        /// The kind of record.
        resource: String,
        /// Its identifier.
        id: String,
    },
    /// A write would violate a uniqueness constraint.
    Conflict(String),
    /// The store could not be reached or the call failed.
    Unavailable(String),
    /// Stored data could not be read back into domain types.
    Corrupt(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { resource, id } => write!(f, "{resource} {id} not found"),
            Self::Conflict(msg) => write!(f, "Conflict: {msg}"),
            Self::Unavailable(msg) => write!(f, "Store unavailable: {msg}"),
            Self::Corrupt(msg) => write!(f, "Stored data is invalid: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Which booking requests to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFilter {
    /// Every request for one event.
    Event(EventId),
    /// Every request addressed to one DJ.
    Dj(UserId),
    /// Every request sent by one promoter.
    Promoter(UserId),
    /// Requests for one event addressed to one DJ.
    EventAndDj(EventId, UserId),
}

/// Reads and writes the marketplace documents.
///
/// Lookups return `Ok(None)` or an empty list when nothing matches. Only
/// writes against a missing record report `StoreError::NotFound`.
pub trait MarketplaceStore {
    /// Fetches the profile document for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn get_profile(&mut self, id: UserId) -> Result<Option<Profile>, StoreError>;

    /// Merges the fields present in `update` into an existing profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile does not exist, the update does not
    /// apply to it, or the store call fails.
    fn put_profile(&mut self, id: UserId, update: &ProfileUpdate) -> Result<(), StoreError>;

    /// Lists every DJ profile in a stable order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn list_candidates(&mut self) -> Result<Vec<CandidateProfile>, StoreError>;

    /// Lists booking requests matching `filter`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn list_booking_requests(
        &mut self,
        filter: BookingFilter,
    ) -> Result<Vec<BookingRequest>, StoreError>;

    /// Fetches one booking request.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn get_booking_request(
        &mut self,
        id: BookingRequestId,
    ) -> Result<Option<BookingRequest>, StoreError>;

    /// Stores a new pending booking request.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the store enforces request
    /// uniqueness and an active request already exists.
    fn create_booking_request(
        &mut self,
        request: &NewBookingRequest,
    ) -> Result<BookingRequestId, StoreError>;

    /// Overwrites the status of a booking request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request does not exist or the store call fails.
    fn update_booking_request_status(
        &mut self,
        id: BookingRequestId,
        status: BookingStatus,
    ) -> Result<(), StoreError>;

    /// Stores a new event.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn create_event(&mut self, event: &NewEvent) -> Result<EventId, StoreError>;

    /// Writes the fields present in `update` to an existing event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event does not exist or the store call fails.
    fn update_event(&mut self, id: EventId, update: &EventUpdate) -> Result<(), StoreError>;

    /// Fetches one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn get_event(&mut self, id: EventId) -> Result<Option<Event>, StoreError>;

    /// Lists a promoter's events by date.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn list_events_for_promoter(&mut self, promoter_id: UserId) -> Result<Vec<Event>, StoreError>;

    /// Stores a file for `owner`, replacing any earlier file of the same kind,
    /// and returns the URL it is served from.
    ///
    /// # Errors
    ///
    /// Returns an error if the store call fails.
    fn upload_file(
        &mut self,
        owner: UserId,
        kind: MediaKind,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StoreError>;
}
