// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::session::SessionContext;
use crate::store::MarketplaceStore;
use spinbook_domain::{CalendarDate, City, Event, EventId, EventUpdate, NewEvent, Role};
use tracing::{debug, info};

/// Fields a promoter supplies when creating an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub name: String,
    pub date: CalendarDate,
    pub venue: String,
    pub city: Option<City>,
    pub description: String,
}

/// Loads any event.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the event does not exist.
pub fn get_event<S: MarketplaceStore>(
    store: &mut S,
    _ctx: &SessionContext,
    id: EventId,
) -> Result<Event, CoreError> {
    debug!(event_id = %id, "Loading event");
    store
        .get_event(id)?
        .ok_or_else(|| CoreError::not_found("Event", id))
}

/// Loads an event and checks that the signed-in promoter owns it.
pub(crate) fn load_owned_event<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    id: EventId,
    action: &str,
) -> Result<Event, CoreError> {
    ctx.require_role(Role::Promoter, action)?;
    let event: Event = get_event(store, ctx, id)?;
    if event.promoter_id != ctx.user_id() {
        return Err(CoreError::forbidden(
            action,
            "the event belongs to another promoter",
        ));
    }
    Ok(event)
}

/// Creates an event owned by the signed-in promoter.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-promoters, `CoreError::DomainViolation`
/// for a blank name, or a store error.
pub fn create_event<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    draft: EventDraft,
) -> Result<Event, CoreError> {
    ctx.require_role(Role::Promoter, "create events")?;
    let new_event: NewEvent = NewEvent {
        promoter_id: ctx.user_id(),
        name: draft.name.trim().to_string(),
        date: draft.date,
        venue: draft.venue,
        city: draft.city,
        description: draft.description,
    };
    new_event.validate()?;

    let id: EventId = store.create_event(&new_event)?;
    info!(event_id = %id, promoter_id = %ctx.user_id(), date = %new_event.date, "Event created");
    store
        .get_event(id)?
        .ok_or_else(|| CoreError::not_found("Event", id))
}

/// Edits an event the signed-in promoter owns. The date cannot change.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` if the caller does not own the event,
/// `CoreError::DomainViolation` for a date change or blank name, or a store error.
pub fn update_event<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    id: EventId,
    update: EventUpdate,
) -> Result<Event, CoreError> {
    let mut event: Event = load_owned_event(store, ctx, id, "edit this event")?;
    event.apply_update(update.clone())?;

    let update: EventUpdate = EventUpdate {
        name: update.name.map(|n| n.trim().to_string()),
        date: None,
        ..update
    };
    store.update_event(id, &update)?;
    info!(event_id = %id, "Event updated");
    store
        .get_event(id)?
        .ok_or_else(|| CoreError::not_found("Event", id))
}

/// Lists the signed-in promoter's events.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-promoters, or a store error.
pub fn list_my_events<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
) -> Result<Vec<Event>, CoreError> {
    ctx.require_role(Role::Promoter, "list events")?;
    Ok(store.list_events_for_promoter(ctx.user_id())?)
}
