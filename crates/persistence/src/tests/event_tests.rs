// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{city, create_promoter, create_test_event, date, test_persistence};
use crate::Persistence;
use spinbook::{MarketplaceStore, StoreError};
use spinbook_domain::{Event, EventId, EventUpdate, NewEvent, UserId};

#[test]
fn test_create_and_get_event() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");
    let id: EventId = create_test_event(&mut persistence, promoter, "2024-07-04");

    let event: Event = persistence.get_event(id).unwrap().unwrap();
    assert_eq!(event.id, id);
    assert_eq!(event.promoter_id, promoter);
    assert_eq!(event.name, "Fourth Fest");
    assert_eq!(event.date, date("2024-07-04"));
    assert_eq!(event.city, Some(city("Austin, TX")));
    assert!(!event.created_at.is_empty());
    assert!(event.updated_at.is_none());
}

#[test]
fn test_event_without_city() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");
    let id: EventId = persistence
        .create_event(&NewEvent {
            promoter_id: promoter,
            name: String::from("Secret Show"),
            date: date("2024-08-01"),
            venue: String::new(),
            city: None,
            description: String::new(),
        })
        .unwrap();

    assert!(persistence.get_event(id).unwrap().unwrap().city.is_none());
}

#[test]
fn test_event_requires_existing_promoter() {
    let mut persistence: Persistence = test_persistence();
    let result = persistence.create_event(&NewEvent {
        promoter_id: UserId::new(77),
        name: String::from("Orphan"),
        date: date("2024-08-01"),
        venue: String::new(),
        city: None,
        description: String::new(),
    });
    assert!(matches!(result, Err(StoreError::Unavailable(_))));
}

#[test]
fn test_update_event_keeps_date_and_stamps_updated_at() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");
    let id: EventId = create_test_event(&mut persistence, promoter, "2024-07-04");

    persistence
        .update_event(
            id,
            &EventUpdate {
                name: Some(String::from("Fifth Fest")),
                city: Some(Some(city("Dallas, TX"))),
                ..EventUpdate::default()
            },
        )
        .unwrap();

    let event: Event = persistence.get_event(id).unwrap().unwrap();
    assert_eq!(event.name, "Fifth Fest");
    assert_eq!(event.city, Some(city("Dallas, TX")));
    assert_eq!(event.venue, "Dock 5");
    assert_eq!(event.date, date("2024-07-04"));
    assert!(event.updated_at.is_some());
}

#[test]
fn test_update_event_clears_city() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");
    let id: EventId = create_test_event(&mut persistence, promoter, "2024-07-04");

    persistence
        .update_event(
            id,
            &EventUpdate {
                city: Some(None),
                ..EventUpdate::default()
            },
        )
        .unwrap();

    let event: Event = persistence.get_event(id).unwrap().unwrap();
    assert_eq!(event.city, None);
    assert_eq!(event.name, "Fourth Fest");
}

#[test]
fn test_update_event_refuses_date_change() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");
    let id: EventId = create_test_event(&mut persistence, promoter, "2024-07-04");

    let result = persistence.update_event(
        id,
        &EventUpdate {
            date: Some(date("2024-07-05")),
            ..EventUpdate::default()
        },
    );
    assert!(matches!(result, Err(StoreError::Corrupt(_))));
    assert_eq!(
        persistence.get_event(id).unwrap().unwrap().date,
        date("2024-07-04")
    );
}

#[test]
fn test_update_missing_event_is_not_found() {
    let mut persistence: Persistence = test_persistence();
    let result = persistence.update_event(EventId::new(9), &EventUpdate::default());
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[test]
fn test_list_events_for_promoter_sorted_by_date() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");
    let rival: UserId = create_promoter(&mut persistence, "rival@example.com");
    let late: EventId = create_test_event(&mut persistence, promoter, "2024-12-31");
    let early: EventId = create_test_event(&mut persistence, promoter, "2024-01-15");
    create_test_event(&mut persistence, rival, "2024-06-01");

    let ids: Vec<EventId> = persistence
        .list_events_for_promoter(promoter)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(ids, vec![early, late]);
}
