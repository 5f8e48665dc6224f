// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingFilter, MarketplaceStore, SessionContext, StoreError};
use spinbook_domain::{
    BookingRequest, BookingRequestId, BookingStatus, CalendarDate, CandidateProfile, City,
    DayOfWeek, Event, EventId, EventUpdate, MediaKind, NewBookingRequest, NewEvent, Profile,
    ProfileUpdate, Role, UserId,
};
use std::collections::BTreeMap;

/// In-memory store double.
///
/// `fail_availability_writes` makes every profile write that carries an
/// availability record fail, which is how the partial-write path is driven.
/// `enforce_unique_requests` mimics a storage-level uniqueness constraint,
/// and `stale_reads` hides existing requests from lookups.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    pub profiles: BTreeMap<UserId, Profile>,
    pub events: BTreeMap<EventId, Event>,
    pub requests: BTreeMap<BookingRequestId, BookingRequest>,
    pub media: BTreeMap<(UserId, MediaKind), (String, Vec<u8>)>,
    pub profile_writes: usize,
    pub fail_availability_writes: bool,
    pub enforce_unique_requests: bool,
    pub offline: bool,
    pub stale_reads: bool,
    next_id: i64,
}

impl InMemoryStore {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.offline {
            Err(StoreError::Unavailable(String::from("network down")))
        } else {
            Ok(())
        }
    }

    pub fn add_profile(&mut self, profile: Profile) {
        self.profiles.insert(profile.id(), profile);
    }

    pub fn candidate(&self, id: UserId) -> &CandidateProfile {
        self.profiles[&id].as_candidate().unwrap()
    }
}

impl MarketplaceStore for InMemoryStore {
    fn get_profile(&mut self, id: UserId) -> Result<Option<Profile>, StoreError> {
        self.check_online()?;
        Ok(self.profiles.get(&id).cloned())
    }

    fn put_profile(&mut self, id: UserId, update: &ProfileUpdate) -> Result<(), StoreError> {
        self.check_online()?;
        if self.fail_availability_writes && update.availability.is_some() {
            return Err(StoreError::Unavailable(String::from("write timed out")));
        }
        let profile: &mut Profile =
            self.profiles
                .get_mut(&id)
                .ok_or_else(|| StoreError::NotFound {
                    resource: String::from("Profile"),
                    id: id.to_string(),
                })?;
        profile
            .apply_update(update.clone())
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.profile_writes += 1;
        Ok(())
    }

    fn list_candidates(&mut self) -> Result<Vec<CandidateProfile>, StoreError> {
        self.check_online()?;
        Ok(self
            .profiles
            .values()
            .filter_map(|p| p.as_candidate().cloned())
            .collect())
    }

    fn list_booking_requests(
        &mut self,
        filter: BookingFilter,
    ) -> Result<Vec<BookingRequest>, StoreError> {
        self.check_online()?;
        if self.stale_reads {
            return Ok(Vec::new());
        }
        Ok(self
            .requests
            .values()
            .filter(|r| match filter {
                BookingFilter::Event(e) => r.event_id == e,
                BookingFilter::Dj(d) => r.dj_id == d,
                BookingFilter::Promoter(p) => r.promoter_id == p,
                BookingFilter::EventAndDj(e, d) => r.event_id == e && r.dj_id == d,
            })
            .cloned()
            .collect())
    }

    fn get_booking_request(
        &mut self,
        id: BookingRequestId,
    ) -> Result<Option<BookingRequest>, StoreError> {
        self.check_online()?;
        Ok(self.requests.get(&id).cloned())
    }

    fn create_booking_request(
        &mut self,
        request: &NewBookingRequest,
    ) -> Result<BookingRequestId, StoreError> {
        self.check_online()?;
        if self.enforce_unique_requests
            && self.requests.values().any(|r| {
                r.event_id == request.event_id && r.dj_id == request.dj_id && r.status.is_active()
            })
        {
            return Err(StoreError::Conflict(String::from(
                "active booking request exists",
            )));
        }
        let id: BookingRequestId = BookingRequestId::new(self.next_id());
        self.requests.insert(
            id,
            BookingRequest {
                id,
                event_id: request.event_id,
                dj_id: request.dj_id,
                promoter_id: request.promoter_id,
                status: BookingStatus::Pending,
                message: request.message.clone(),
                created_at: String::from("2024-05-01T00:00:00Z"),
            },
        );
        Ok(id)
    }

    fn update_booking_request_status(
        &mut self,
        id: BookingRequestId,
        status: BookingStatus,
    ) -> Result<(), StoreError> {
        self.check_online()?;
        let request: &mut BookingRequest =
            self.requests
                .get_mut(&id)
                .ok_or_else(|| StoreError::NotFound {
                    resource: String::from("Booking request"),
                    id: id.to_string(),
                })?;
        request.status = status;
        Ok(())
    }

    fn create_event(&mut self, event: &NewEvent) -> Result<EventId, StoreError> {
        self.check_online()?;
        let id: EventId = EventId::new(self.next_id());
        self.events.insert(
            id,
            Event {
                id,
                promoter_id: event.promoter_id,
                name: event.name.clone(),
                date: event.date,
                venue: event.venue.clone(),
                city: event.city.clone(),
                description: event.description.clone(),
                created_at: String::from("2024-05-01T00:00:00Z"),
                updated_at: None,
            },
        );
        Ok(id)
    }

    fn update_event(&mut self, id: EventId, update: &EventUpdate) -> Result<(), StoreError> {
        self.check_online()?;
        let event: &mut Event = self
            .events
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound {
                resource: String::from("Event"),
                id: id.to_string(),
            })?;
        event
            .apply_update(update.clone())
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        event.updated_at = Some(String::from("2024-05-02T00:00:00Z"));
        Ok(())
    }

    fn get_event(&mut self, id: EventId) -> Result<Option<Event>, StoreError> {
        self.check_online()?;
        Ok(self.events.get(&id).cloned())
    }

    fn list_events_for_promoter(&mut self, promoter_id: UserId) -> Result<Vec<Event>, StoreError> {
        self.check_online()?;
        let mut events: Vec<Event> = self
            .events
            .values()
            .filter(|e| e.promoter_id == promoter_id)
            .cloned()
            .collect();
        events.sort_by_key(|e| e.date);
        Ok(events)
    }

    fn upload_file(
        &mut self,
        owner: UserId,
        kind: MediaKind,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StoreError> {
        self.check_online()?;
        self.media
            .insert((owner, kind), (content_type.to_string(), bytes.to_vec()));
        Ok(format!("http://localhost:3000/media/{kind}/{owner}"))
    }
}

pub const PROMOTER: UserId = UserId::new(1);
pub const OTHER_PROMOTER: UserId = UserId::new(2);
pub const DJ_HOUSE: UserId = UserId::new(10);
pub const DJ_TECHNO: UserId = UserId::new(11);
pub const DJ_DISCO: UserId = UserId::new(12);

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

pub fn city(s: &str) -> City {
    City::parse(s).unwrap()
}

pub fn promoter_ctx() -> SessionContext {
    SessionContext::new(PROMOTER, Role::Promoter, String::from("promo@example.com"))
}

pub fn other_promoter_ctx() -> SessionContext {
    SessionContext::new(
        OTHER_PROMOTER,
        Role::Promoter,
        String::from("rival@example.com"),
    )
}

pub fn dj_ctx(id: UserId) -> SessionContext {
    SessionContext::new(id, Role::Dj, format!("dj{id}@example.com"))
}

fn dj_profile(id: UserId, name: &str, genre: &str, home: &str) -> Profile {
    let mut dj: CandidateProfile = CandidateProfile::new(id, &format!("dj{id}@example.com"));
    dj.name = name.to_string();
    dj.genres = vec![genre.to_string()];
    dj.cities = vec![city(home)];
    dj.availability.toggle_weekday(DayOfWeek::Friday);
    dj.availability.toggle_weekday(DayOfWeek::Thursday);
    Profile::Dj(dj)
}

/// Two promoters, three DJs (house, techno, disco) available on Thursdays
/// and Fridays, and one event on 2024-07-04 owned by `PROMOTER`.
pub fn seeded_store() -> (InMemoryStore, EventId) {
    let mut store: InMemoryStore = InMemoryStore::default();
    store.add_profile(Profile::empty(PROMOTER, "promo@example.com", Role::Promoter));
    store.add_profile(Profile::empty(
        OTHER_PROMOTER,
        "rival@example.com",
        Role::Promoter,
    ));
    store.add_profile(dj_profile(DJ_HOUSE, "Nova", "house", "Austin, TX"));
    store.add_profile(dj_profile(DJ_TECHNO, "Kilo", "techno", "Austin, TX"));
    store.add_profile(dj_profile(DJ_DISCO, "Mira", "disco", "Dallas, TX"));

    let event_id: EventId = store
        .create_event(&NewEvent {
            promoter_id: PROMOTER,
            name: String::from("Fourth Fest"),
            date: date("2024-07-04"),
            venue: String::from("Dock 5"),
            city: Some(city("Austin, TX")),
            description: String::new(),
        })
        .unwrap();
    (store, event_id)
}
