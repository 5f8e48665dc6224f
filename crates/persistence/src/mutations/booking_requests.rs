// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use spinbook_domain::{BookingRequestId, BookingStatus, NewBookingRequest};
use tracing::{info, warn};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::booking_requests;
use crate::error::PersistenceError;

/// Inserts a pending booking request.
///
/// The partial unique index on `(event_id, dj_id)` rejects a second pending
/// or booked request for the same pair.
///
/// # Errors
///
/// Returns `PersistenceError::Conflict` if an active request already exists,
/// or another error if the insert fails.
pub fn create_booking_request(
    conn: &mut SqliteConnection,
    request: &NewBookingRequest,
) -> Result<BookingRequestId, PersistenceError> {
    let inserted = diesel::insert_into(booking_requests::table)
        .values((
            booking_requests::event_id.eq(request.event_id.value()),
            booking_requests::dj_id.eq(request.dj_id.value()),
            booking_requests::promoter_id.eq(request.promoter_id.value()),
            booking_requests::status.eq(BookingStatus::Pending.as_str()),
            booking_requests::message.eq(request.message.as_deref()),
        ))
        .execute(conn);

    if let Err(e) = inserted {
        return Err(match PersistenceError::from(e) {
            PersistenceError::Conflict(_) => {
                warn!(
                    event_id = %request.event_id,
                    dj_id = %request.dj_id,
                    "Active booking request already stored"
                );
                PersistenceError::Conflict(format!(
                    "An active booking request exists for event {} and DJ {}",
                    request.event_id, request.dj_id
                ))
            }
            other => other,
        });
    }

    let request_id: i64 = get_last_insert_rowid(conn)?;
    info!(
        request_id,
        event_id = %request.event_id,
        dj_id = %request.dj_id,
        "Booking request stored"
    );
    Ok(BookingRequestId::new(request_id))
}

/// Overwrites the status of a booking request.
///
/// Transition rules are checked by the caller; this is a plain write.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if no row was updated.
pub fn update_booking_request_status(
    conn: &mut SqliteConnection,
    request_id: i64,
    status: BookingStatus,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::update(booking_requests::table)
        .filter(booking_requests::request_id.eq(request_id))
        .set(booking_requests::status.eq(status.as_str()))
        .execute(conn)?;

    if rows == 0 {
        return Err(PersistenceError::not_found("Booking request", request_id));
    }

    info!(request_id, %status, "Booking request status stored");
    Ok(())
}
