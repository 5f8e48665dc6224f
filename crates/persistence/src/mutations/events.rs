// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use spinbook_domain::{Event, EventId, EventUpdate, NewEvent};
use tracing::info;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::events;
use crate::error::PersistenceError;
use crate::queries::events::get_event;

/// Inserts an event.
///
/// # Errors
///
/// Returns an error if the insert fails, including when the promoter
/// account does not exist.
pub fn create_event(
    conn: &mut SqliteConnection,
    event: &NewEvent,
) -> Result<EventId, PersistenceError> {
    diesel::insert_into(events::table)
        .values((
            events::promoter_id.eq(event.promoter_id.value()),
            events::name.eq(&event.name),
            events::event_date.eq(event.date.to_string()),
            events::venue.eq(&event.venue),
            events::city.eq(event.city.as_ref().map(|c| c.as_str().to_string())),
            events::description.eq(&event.description),
        ))
        .execute(conn)?;

    let event_id: i64 = get_last_insert_rowid(conn)?;
    info!(event_id, promoter_id = %event.promoter_id, date = %event.date, "Event created");
    Ok(EventId::new(event_id))
}

/// Applies `update` to a stored event and stamps `updated_at`.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the event does not exist and
/// `PersistenceError::InvalidUpdate` if the update tries to move the date
/// or blank the name.
pub fn update_event(
    conn: &mut SqliteConnection,
    event_id: i64,
    update: &EventUpdate,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction::<(), PersistenceError, _>(|conn| {
        let mut event: Event = get_event(conn, event_id)?
            .ok_or_else(|| PersistenceError::not_found("Event", event_id))?;

        event
            .apply_update(update.clone())
            .map_err(|e| PersistenceError::InvalidUpdate(e.to_string()))?;

        diesel::update(events::table)
            .filter(events::event_id.eq(event_id))
            .set((
                events::name.eq(&event.name),
                events::venue.eq(&event.venue),
                events::city.eq(event.city.as_ref().map(|c| c.as_str().to_string())),
                events::description.eq(&event.description),
                events::updated_at.eq(sql::<Nullable<Text>>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)?;
        Ok(())
    })?;

    info!(event_id, "Event updated");
    Ok(())
}
