// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use spinbook_domain::{CalendarDate, City, Event, EventId, UserId};
use tracing::debug;

use crate::diesel_schema::events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = events)]
struct EventRow {
    event_id: i64,
    promoter_id: i64,
    name: String,
    event_date: String,
    venue: String,
    city: Option<String>,
    description: String,
    created_at: String,
    updated_at: Option<String>,
}

impl TryFrom<EventRow> for Event {
    type Error = PersistenceError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let date: CalendarDate = CalendarDate::parse(&row.event_date).map_err(|e| {
            PersistenceError::CorruptRecord(format!("Event {}: {e}", row.event_id))
        })?;
        let city: Option<City> = row
            .city
            .as_deref()
            .map(City::parse)
            .transpose()
            .map_err(|e| PersistenceError::CorruptRecord(format!("Event {}: {e}", row.event_id)))?;

        Ok(Self {
            id: EventId::new(row.event_id),
            promoter_id: UserId::new(row.promoter_id),
            name: row.name,
            date,
            venue: row.venue,
            city,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Retrieves one event.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is invalid.
/// Returns `Ok(None)` if the event does not exist.
pub fn get_event(
    conn: &mut SqliteConnection,
    event_id: i64,
) -> Result<Option<Event>, PersistenceError> {
    debug!(event_id, "Loading event");

    events::table
        .filter(events::event_id.eq(event_id))
        .select(EventRow::as_select())
        .first(conn)
        .optional()?
        .map(Event::try_from)
        .transpose()
}

/// Lists a promoter's events by date, then by ID.
///
/// `YYYY-MM-DD` text sorts in calendar order, so ordering happens in SQL.
///
/// # Errors
///
/// Returns an error if the query fails or any stored row is invalid.
pub fn list_events_for_promoter(
    conn: &mut SqliteConnection,
    promoter_id: i64,
) -> Result<Vec<Event>, PersistenceError> {
    let rows: Vec<EventRow> = events::table
        .filter(events::promoter_id.eq(promoter_id))
        .order((events::event_date.asc(), events::event_id.asc()))
        .select(EventRow::as_select())
        .load(conn)?;

    debug!(promoter_id, count = rows.len(), "Loaded promoter events");
    rows.into_iter().map(Event::try_from).collect()
}
