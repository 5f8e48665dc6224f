// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod event_tests;
mod media_tests;
mod profile_tests;

use crate::Persistence;
use spinbook::MarketplaceStore;
use spinbook_domain::{CalendarDate, City, EventId, NewEvent, Role, UserId};

/// Lowest bcrypt cost, so account creation stays fast in tests.
pub const TEST_PASSWORD_COST: u32 = 4;

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory()
        .expect("in-memory database")
        .with_password_cost(TEST_PASSWORD_COST)
}

pub fn date(s: &str) -> CalendarDate {
    CalendarDate::parse(s).unwrap()
}

pub fn city(s: &str) -> City {
    City::parse(s).unwrap()
}

pub fn create_promoter(persistence: &mut Persistence, email: &str) -> UserId {
    persistence
        .create_account(email, "secret1", Role::Promoter)
        .unwrap()
}

pub fn create_dj(persistence: &mut Persistence, email: &str) -> UserId {
    persistence
        .create_account(email, "secret1", Role::Dj)
        .unwrap()
}

pub fn create_test_event(persistence: &mut Persistence, promoter: UserId, on: &str) -> EventId {
    persistence
        .create_event(&NewEvent {
            promoter_id: promoter,
            name: String::from("Fourth Fest"),
            date: date(on),
            venue: String::from("Dock 5"),
            city: Some(city("Austin, TX")),
            description: String::new(),
        })
        .unwrap()
}
