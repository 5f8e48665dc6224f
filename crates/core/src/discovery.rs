// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::events::load_owned_event;
use crate::session::SessionContext;
use crate::store::{BookingFilter, MarketplaceStore};
use spinbook_domain::{
    CalendarDate, CandidateProfile, City, Event, EventId, Role, SearchCriteria, UserId,
    filter_candidates,
};
use std::collections::HashSet;
use tracing::debug;

/// A promoter's DJ search.
///
/// With an `event_id` the search is scoped to that event: the date comes
/// from the event, the cities default to the event's city, and DJs already
/// holding an active request for it are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryQuery {
    pub event_id: Option<EventId>,
    pub genres: Vec<String>,
    /// `None` means "use the default"; `Some(vec![])` means any city.
    pub cities: Option<Vec<City>>,
    /// Ignored when `event_id` is set.
    pub date: Option<CalendarDate>,
    pub name: String,
}

/// Runs a DJ search for the signed-in promoter.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-promoters or for an event the
/// caller does not own, or a store error.
pub fn search_candidates<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    query: DiscoveryQuery,
) -> Result<Vec<CandidateProfile>, CoreError> {
    ctx.require_role(Role::Promoter, "search for DJs")?;

    let criteria: SearchCriteria = match query.event_id {
        Some(event_id) => {
            let event: Event = load_owned_event(store, ctx, event_id, "search for this event")?;
            let exclude_ids: HashSet<UserId> = store
                .list_booking_requests(BookingFilter::Event(event_id))?
                .into_iter()
                .filter(|r| r.status.is_active())
                .map(|r| r.dj_id)
                .collect();
            SearchCriteria {
                genres: query.genres,
                cities: query
                    .cities
                    .unwrap_or_else(|| event.city.into_iter().collect()),
                date: Some(event.date),
                name_substring: query.name,
                exclude_ids,
            }
        }
        None => SearchCriteria {
            genres: query.genres,
            cities: query.cities.unwrap_or_default(),
            date: query.date,
            name_substring: query.name,
            exclude_ids: HashSet::new(),
        },
    };

    let candidates: Vec<CandidateProfile> = store.list_candidates()?;
    let matches: Vec<CandidateProfile> = filter_candidates(&candidates, &criteria)
        .into_iter()
        .cloned()
        .collect();
    debug!(
        total = candidates.len(),
        matched = matches.len(),
        "DJ search complete"
    );
    Ok(matches)
}
