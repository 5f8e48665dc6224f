// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{AvailabilityChange, edit_availability};
use crate::booking::{reconcile_booked_dates, request_booking, respond_to_booking};
use crate::command::Command;
use crate::error::CoreError;
use crate::events::{create_event, update_event};
use crate::media::upload_media;
use crate::profile::update_profile;
use crate::session::SessionContext;
use crate::store::MarketplaceStore;
use spinbook_domain::{BookingRequest, CalendarDate, Event, Profile};
use tracing::{info_span, warn};

/// What a successfully applied command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The merged profile after an update.
    Profile(Profile),
    /// The availability record after edits.
    Availability(AvailabilityChange),
    /// The stored event.
    Event(Event),
    /// The stored booking request.
    BookingRequest(BookingRequest),
    /// The public URL of an uploaded file.
    MediaUrl(String),
    /// Dates newly blocked by reconciliation.
    RepairedDates(Vec<CalendarDate>),
}

/// Applies a command on behalf of the signed-in account.
///
/// # Arguments
///
/// * `store` - The persistence collaborator
/// * `ctx` - Who is acting
/// * `command` - What they asked for
///
/// # Errors
///
/// Returns whatever the underlying workflow returns.
pub fn apply<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    command: Command,
) -> Result<Outcome, CoreError> {
    let span = info_span!("apply", command = command.name(), user_id = %ctx.user_id());
    let _entered = span.enter();

    let result: Result<Outcome, CoreError> = match command {
        Command::UpdateProfile { update } => {
            update_profile(store, ctx, update).map(Outcome::Profile)
        }
        Command::EditAvailability { edits } => {
            edit_availability(store, ctx, &edits).map(Outcome::Availability)
        }
        Command::CreateEvent { draft } => create_event(store, ctx, draft).map(Outcome::Event),
        Command::UpdateEvent { event_id, update } => {
            update_event(store, ctx, event_id, update).map(Outcome::Event)
        }
        Command::RequestBooking {
            event_id,
            dj_id,
            message,
        } => request_booking(store, ctx, event_id, dj_id, message).map(Outcome::BookingRequest),
        Command::RespondToBooking {
            request_id,
            response,
        } => respond_to_booking(store, ctx, request_id, response).map(Outcome::BookingRequest),
        Command::UploadMedia {
            kind,
            content_type,
            bytes,
        } => upload_media(store, ctx, kind, &content_type, &bytes).map(Outcome::MediaUrl),
        Command::ReconcileBookedDates => {
            reconcile_booked_dates(store, ctx).map(Outcome::RepairedDates)
        }
    };

    if let Err(e) = &result {
        warn!(error = %e, "Command rejected");
    }
    result
}
