// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking request queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use spinbook::BookingFilter;
use spinbook_domain::{BookingRequest, BookingRequestId, BookingStatus, EventId, UserId};
use tracing::debug;

use crate::diesel_schema::booking_requests;
use crate::error::PersistenceError;

/// Diesel Queryable struct for booking request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = booking_requests)]
struct BookingRequestRow {
    request_id: i64,
    event_id: i64,
    dj_id: i64,
    promoter_id: i64,
    status: String,
    message: Option<String>,
    created_at: String,
}

impl TryFrom<BookingRequestRow> for BookingRequest {
    type Error = PersistenceError;

    fn try_from(row: BookingRequestRow) -> Result<Self, Self::Error> {
        let status: BookingStatus = row.status.parse().map_err(|e| {
            PersistenceError::CorruptRecord(format!("Booking request {}: {e}", row.request_id))
        })?;
        Ok(Self {
            id: BookingRequestId::new(row.request_id),
            event_id: EventId::new(row.event_id),
            dj_id: UserId::new(row.dj_id),
            promoter_id: UserId::new(row.promoter_id),
            status,
            message: row.message,
            created_at: row.created_at,
        })
    }
}

/// Retrieves one booking request.
///
/// # Errors
///
/// Returns an error if the query fails or the stored status is unknown.
/// Returns `Ok(None)` if the request does not exist.
pub fn get_booking_request(
    conn: &mut SqliteConnection,
    request_id: i64,
) -> Result<Option<BookingRequest>, PersistenceError> {
    debug!(request_id, "Loading booking request");

    booking_requests::table
        .filter(booking_requests::request_id.eq(request_id))
        .select(BookingRequestRow::as_select())
        .first(conn)
        .optional()?
        .map(BookingRequest::try_from)
        .transpose()
}

/// Lists booking requests matching `filter`, oldest first.
///
/// # Errors
///
/// Returns an error if the query fails or any stored status is unknown.
pub fn list_booking_requests(
    conn: &mut SqliteConnection,
    filter: BookingFilter,
) -> Result<Vec<BookingRequest>, PersistenceError> {
    let mut query = booking_requests::table
        .select(BookingRequestRow::as_select())
        .order(booking_requests::request_id.asc())
        .into_boxed();

    query = match filter {
        BookingFilter::Event(event_id) => {
            query.filter(booking_requests::event_id.eq(event_id.value()))
        }
        BookingFilter::Dj(dj_id) => query.filter(booking_requests::dj_id.eq(dj_id.value())),
        BookingFilter::Promoter(promoter_id) => {
            query.filter(booking_requests::promoter_id.eq(promoter_id.value()))
        }
        BookingFilter::EventAndDj(event_id, dj_id) => query
            .filter(booking_requests::event_id.eq(event_id.value()))
            .filter(booking_requests::dj_id.eq(dj_id.value())),
    };

    let rows: Vec<BookingRequestRow> = query.load(conn)?;
    debug!(?filter, count = rows.len(), "Loaded booking requests");
    rows.into_iter().map(BookingRequest::try_from).collect()
}
