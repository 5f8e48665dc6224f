// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    DJ_HOUSE, PROMOTER, city, date, dj_ctx, other_promoter_ctx, promoter_ctx, seeded_store,
};
use crate::{
    CoreError, EventDraft, create_event, get_event, list_my_events, update_event,
};
use spinbook_domain::{DomainError, Event, EventUpdate};

fn draft(name: &str, day: &str) -> EventDraft {
    EventDraft {
        name: name.to_string(),
        date: date(day),
        venue: String::from("The Loft"),
        city: Some(city("Austin, TX")),
        description: String::new(),
    }
}

#[test]
fn test_create_event_assigns_owner() {
    let (mut store, _) = seeded_store();
    let event: Event =
        create_event(&mut store, &promoter_ctx(), draft("  Summer Jam ", "2024-08-10")).unwrap();
    assert_eq!(event.promoter_id, PROMOTER);
    assert_eq!(event.name, "Summer Jam");
    assert_eq!(event.date, date("2024-08-10"));
}

#[test]
fn test_create_event_rules() {
    let (mut store, _) = seeded_store();
    assert!(matches!(
        create_event(&mut store, &dj_ctx(DJ_HOUSE), draft("Mine", "2024-08-10")),
        Err(CoreError::Forbidden { .. })
    ));
    assert!(matches!(
        create_event(&mut store, &promoter_ctx(), draft("   ", "2024-08-10")),
        Err(CoreError::DomainViolation(DomainError::InvalidName(_)))
    ));
}

#[test]
fn test_update_event_keeps_date() {
    let (mut store, event_id) = seeded_store();
    let updated: Event = update_event(
        &mut store,
        &promoter_ctx(),
        event_id,
        EventUpdate {
            venue: Some(String::from("Rooftop")),
            date: Some(date("2024-07-04")),
            ..EventUpdate::default()
        },
    )
    .unwrap();
    assert_eq!(updated.venue, "Rooftop");
    assert!(updated.updated_at.is_some());

    let moved = update_event(
        &mut store,
        &promoter_ctx(),
        event_id,
        EventUpdate {
            date: Some(date("2024-07-05")),
            ..EventUpdate::default()
        },
    );
    assert_eq!(
        moved,
        Err(CoreError::DomainViolation(DomainError::EventDateImmutable))
    );
    assert_eq!(
        get_event(&mut store, &promoter_ctx(), event_id).unwrap().date,
        date("2024-07-04")
    );
}

#[test]
fn test_only_owner_updates() {
    let (mut store, event_id) = seeded_store();
    let result = update_event(
        &mut store,
        &other_promoter_ctx(),
        event_id,
        EventUpdate {
            name: Some(String::from("Hijacked")),
            ..EventUpdate::default()
        },
    );
    assert!(matches!(result, Err(CoreError::Forbidden { .. })));
}

#[test]
fn test_list_my_events_sorted_by_date() {
    let (mut store, first) = seeded_store();
    create_event(&mut store, &promoter_ctx(), draft("Early", "2024-06-01")).unwrap();
    create_event(&mut store, &other_promoter_ctx(), draft("Theirs", "2024-06-02")).unwrap();

    let events: Vec<Event> = list_my_events(&mut store, &promoter_ctx()).unwrap();
    let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Early", "Fourth Fest"]);
    assert_eq!(events[1].id, first);
}

#[test]
fn test_missing_event_is_not_found() {
    let (mut store, _) = seeded_store();
    assert!(matches!(
        get_event(&mut store, &promoter_ctx(), spinbook_domain::EventId::new(999)),
        Err(CoreError::NotFound { .. })
    ));
}
