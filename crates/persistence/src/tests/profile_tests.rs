// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{city, create_dj, create_promoter, date, test_persistence};
use crate::Persistence;
use spinbook::{MarketplaceStore, StoreError};
use spinbook_domain::{
    AvailabilityRecord, CandidateProfile, DayOfWeek, Profile, ProfileUpdate, UserId,
};

#[test]
fn test_put_profile_merges_only_present_fields() {
    let mut persistence: Persistence = test_persistence();
    let dj: UserId = create_dj(&mut persistence, "nova@example.com");

    persistence
        .put_profile(
            dj,
            &ProfileUpdate {
                name: Some(String::from("Nova")),
                genres: Some(vec![String::from("house")]),
                cities: Some(vec![city("Austin, TX")]),
                ..ProfileUpdate::default()
            },
        )
        .unwrap();
    persistence
        .put_profile(
            dj,
            &ProfileUpdate {
                bio: Some(String::from("Deep cuts")),
                ..ProfileUpdate::default()
            },
        )
        .unwrap();

    let Some(Profile::Dj(profile)) = persistence.get_profile(dj).unwrap() else {
        panic!("expected DJ profile");
    };
    assert_eq!(profile.name, "Nova");
    assert_eq!(profile.bio, "Deep cuts");
    assert_eq!(profile.genres, vec![String::from("house")]);
    assert_eq!(profile.cities, vec![city("Austin, TX")]);
}

#[test]
fn test_availability_round_trips_through_document() {
    let mut persistence: Persistence = test_persistence();
    let dj: UserId = create_dj(&mut persistence, "nova@example.com");

    let mut availability: AvailabilityRecord = AvailabilityRecord::new();
    availability.toggle_weekday(DayOfWeek::Friday);
    availability.block_date(date("2024-06-07"));
    persistence
        .put_profile(dj, &ProfileUpdate::availability(availability.clone()))
        .unwrap();

    let Some(Profile::Dj(profile)) = persistence.get_profile(dj).unwrap() else {
        panic!("expected DJ profile");
    };
    assert_eq!(profile.availability, availability);
    assert!(!profile.availability.resolve(date("2024-06-07")));
    assert!(profile.availability.resolve(date("2024-06-14")));
}

#[test]
fn test_put_profile_for_missing_account_is_not_found() {
    let mut persistence: Persistence = test_persistence();
    let result = persistence.put_profile(
        UserId::new(404),
        &ProfileUpdate {
            bio: Some(String::from("ghost")),
            ..ProfileUpdate::default()
        },
    );
    assert!(matches!(result, Err(StoreError::NotFound { .. })));
}

#[test]
fn test_put_profile_rejects_field_of_other_role() {
    let mut persistence: Persistence = test_persistence();
    let promoter: UserId = create_promoter(&mut persistence, "promo@example.com");

    let result = persistence.put_profile(
        promoter,
        &ProfileUpdate {
            press_kit_url: Some(String::from("https://example.com/kit.pdf")),
            ..ProfileUpdate::default()
        },
    );
    assert!(matches!(result, Err(StoreError::Corrupt(_))));

    let Some(Profile::Promoter(profile)) = persistence.get_profile(promoter).unwrap() else {
        panic!("expected promoter profile");
    };
    assert!(profile.logo_url.is_none());
}

#[test]
fn test_get_profile_missing_is_none() {
    let mut persistence: Persistence = test_persistence();
    assert!(persistence.get_profile(UserId::new(5)).unwrap().is_none());
}

#[test]
fn test_list_candidates_returns_only_djs_in_id_order() {
    let mut persistence: Persistence = test_persistence();
    let first: UserId = create_dj(&mut persistence, "a@example.com");
    create_promoter(&mut persistence, "promo@example.com");
    let second: UserId = create_dj(&mut persistence, "b@example.com");

    let candidates: Vec<CandidateProfile> = persistence.list_candidates().unwrap();
    let ids: Vec<UserId> = candidates.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![first, second]);
}
