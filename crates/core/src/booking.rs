// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking request workflows.
//!
//! Accepting a request is two writes: the status, then a blocking override
//! on the DJ's availability for the event date. They are not atomic. When
//! the second write fails the status stays `Booked` and the caller receives
//! [`CoreError::PartialWrite`]; [`reconcile_booked_dates`] repairs the
//! availability later.

use crate::error::CoreError;
use crate::events::load_owned_event;
use crate::profile::load_candidate;
use crate::session::SessionContext;
use crate::store::{BookingFilter, MarketplaceStore, StoreError};
use spinbook_domain::{
    AvailabilityRecord, BoardEntry, BookingRequest, BookingRequestId, BookingResponse,
    BookingStatus, CalendarDate, CandidateProfile, DjBoard, Event, EventBoardEntry, EventId,
    NewBookingRequest, Profile, ProfileUpdate, Role, UNKNOWN_DJ, UserId, build_dj_board,
    sort_event_board,
};
use tracing::{debug, error, info, warn};

fn load_request<S: MarketplaceStore>(
    store: &mut S,
    id: BookingRequestId,
) -> Result<BookingRequest, CoreError> {
    store
        .get_booking_request(id)?
        .ok_or_else(|| CoreError::not_found("Booking request", id))
}

/// Sends a booking request from the signed-in promoter to a DJ.
///
/// The promoter must own the event and the target must be a DJ. If an
/// active (pending or booked) request already exists for the pair the call
/// is refused before anything is written. A declined request does not block
/// a new one.
///
/// # Errors
///
/// Returns `CoreError::DuplicateRequest` when an active request exists,
/// either found up front or reported by the store as a conflict.
pub fn request_booking<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    event_id: EventId,
    dj_id: UserId,
    message: Option<String>,
) -> Result<BookingRequest, CoreError> {
    load_owned_event(store, ctx, event_id, "send booking requests")?;
    load_candidate(store, dj_id)?;

    let existing: Vec<BookingRequest> =
        store.list_booking_requests(BookingFilter::EventAndDj(event_id, dj_id))?;
    if existing.iter().any(|r| r.status.is_active()) {
        warn!(%event_id, %dj_id, "Rejected duplicate booking request");
        return Err(CoreError::DuplicateRequest { event_id, dj_id });
    }

    let request: NewBookingRequest = NewBookingRequest {
        event_id,
        dj_id,
        promoter_id: ctx.user_id(),
        message: message.map(|m| m.trim().to_string()).filter(|m| !m.is_empty()),
    };
    let id: BookingRequestId = match store.create_booking_request(&request) {
        Ok(id) => id,
        Err(StoreError::Conflict(msg)) => {
            warn!(%event_id, %dj_id, %msg, "Store rejected duplicate booking request");
            return Err(CoreError::DuplicateRequest { event_id, dj_id });
        }
        Err(e) => return Err(e.into()),
    };
    info!(request_id = %id, %event_id, %dj_id, "Booking request sent");
    load_request(store, id)
}

/// Records the signed-in DJ's answer to a pending request.
///
/// On accept the event date is blocked in the DJ's availability.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the request is addressed to someone
/// else, `CoreError::DomainViolation` if it was already answered, and
/// `CoreError::PartialWrite` if the status was saved but the availability
/// write failed.
pub fn respond_to_booking<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    request_id: BookingRequestId,
    response: BookingResponse,
) -> Result<BookingRequest, CoreError> {
    ctx.require_role(Role::Dj, "respond to booking requests")?;
    let mut request: BookingRequest = load_request(store, request_id)?;
    if request.dj_id != ctx.user_id() {
        return Err(CoreError::forbidden(
            "respond to this booking request",
            "the request is addressed to another DJ",
        ));
    }

    let target: BookingStatus = response.target_status();
    request.status.validate_transition(target)?;

    // Everything the second write needs is read before the first write.
    let pending_block: Option<(CalendarDate, AvailabilityRecord)> = if target
        == BookingStatus::Booked
    {
        let event: Event = store
            .get_event(request.event_id)?
            .ok_or_else(|| CoreError::not_found("Event", request.event_id))?;
        let profile: CandidateProfile = load_candidate(store, ctx.user_id())?;
        Some((event.date, profile.availability))
    } else {
        None
    };

    store.update_booking_request_status(request_id, target)?;
    request.status = target;
    info!(%request_id, status = %target, "Booking request answered");

    if let Some((date, mut availability)) = pending_block {
        availability.block_date(date);
        if let Err(failed) =
            store.put_profile(ctx.user_id(), &ProfileUpdate::availability(availability))
        {
            error!(
                %request_id,
                %date,
                error = %failed,
                "Booking accepted but blocking the date failed"
            );
            return Err(CoreError::PartialWrite {
                request_id,
                committed: format!("status set to {target}"),
                failed,
            });
        }
        info!(%request_id, %date, "Blocked event date in DJ availability");
    }

    Ok(request)
}

/// Blocks the date of every booked event the signed-in DJ's availability
/// does not already block, and returns the dates it repaired.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-DJ accounts, or a store error.
pub fn reconcile_booked_dates<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
) -> Result<Vec<CalendarDate>, CoreError> {
    ctx.require_role(Role::Dj, "reconcile availability")?;
    let profile: CandidateProfile = load_candidate(store, ctx.user_id())?;
    let mut availability: AvailabilityRecord = profile.availability;

    let booked: Vec<BookingRequest> = store
        .list_booking_requests(BookingFilter::Dj(ctx.user_id()))?
        .into_iter()
        .filter(|r| r.status == BookingStatus::Booked)
        .collect();

    let mut repaired: Vec<CalendarDate> = Vec::new();
    for request in booked {
        let Some(event) = store.get_event(request.event_id)? else {
            debug!(request_id = %request.id, "Booked event no longer exists");
            continue;
        };
        if availability.override_for(event.date) != Some(false) {
            availability.block_date(event.date);
            repaired.push(event.date);
        }
    }

    if !repaired.is_empty() {
        store.put_profile(ctx.user_id(), &ProfileUpdate::availability(availability))?;
        info!(profile_id = %ctx.user_id(), count = repaired.len(), "Repaired booked dates");
    }
    repaired.sort_unstable();
    Ok(repaired)
}

/// Builds the signed-in DJ's pending and upcoming lists.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-DJ accounts, or a store error.
pub fn dj_board<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
) -> Result<DjBoard, CoreError> {
    ctx.require_role(Role::Dj, "view the booking board")?;
    let requests: Vec<BookingRequest> =
        store.list_booking_requests(BookingFilter::Dj(ctx.user_id()))?;

    let mut entries: Vec<BoardEntry> = Vec::with_capacity(requests.len());
    for request in requests {
        let event: Option<Event> = store.get_event(request.event_id)?;
        entries.push(BoardEntry { request, event });
    }
    Ok(build_dj_board(entries))
}

/// Lists the requests for an event the signed-in promoter owns, Booked
/// first, each labelled with the DJ's name.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the caller does not own the event, or a
/// store error.
pub fn event_board<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    event_id: EventId,
) -> Result<Vec<EventBoardEntry>, CoreError> {
    load_owned_event(store, ctx, event_id, "view booking requests")?;
    let requests: Vec<BookingRequest> =
        store.list_booking_requests(BookingFilter::Event(event_id))?;

    let mut entries: Vec<EventBoardEntry> = Vec::with_capacity(requests.len());
    for request in requests {
        let dj_name: String = match store.get_profile(request.dj_id)? {
            Some(Profile::Dj(dj)) => dj.display_name().to_string(),
            Some(Profile::Promoter(_)) | None => String::from(UNKNOWN_DJ),
        };
        entries.push(EventBoardEntry { request, dj_name });
    }
    sort_event_board(&mut entries);
    Ok(entries)
}

/// Lists every request the signed-in promoter has sent.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-promoters, or a store error.
pub fn sent_requests<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
) -> Result<Vec<BookingRequest>, CoreError> {
    ctx.require_role(Role::Promoter, "list sent booking requests")?;
    Ok(store.list_booking_requests(BookingFilter::Promoter(ctx.user_id()))?)
}
