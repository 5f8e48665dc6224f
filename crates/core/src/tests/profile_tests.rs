// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    DJ_HOUSE, PROMOTER, city, dj_ctx, promoter_ctx, seeded_store,
};
use crate::{CoreError, get_own_profile, get_profile, update_profile, upload_media};
use spinbook_domain::{DomainError, MediaKind, Profile, ProfileUpdate, SocialLinks, UserId};

#[test]
fn test_dj_profile_update_normalises_fields() {
    let (mut store, _) = seeded_store();
    let profile: Profile = update_profile(
        &mut store,
        &dj_ctx(DJ_HOUSE),
        ProfileUpdate {
            name: Some(String::from("  Nova  ")),
            genres: Some(vec![
                String::from("house"),
                String::from(" house"),
                String::from("garage"),
            ]),
            socials: Some(SocialLinks {
                website: Some(String::from("nova.fm")),
                ..SocialLinks::default()
            }),
            ..ProfileUpdate::default()
        },
    )
    .unwrap();

    let dj = profile.as_candidate().unwrap();
    assert_eq!(dj.name, "Nova");
    assert_eq!(dj.genres, vec![String::from("house"), String::from("garage")]);
    assert_eq!(dj.socials.website.as_deref(), Some("https://nova.fm"));
    assert_eq!(store.candidate(DJ_HOUSE), dj);
}

#[test]
fn test_bad_social_link_rejected_before_write() {
    let (mut store, _) = seeded_store();
    let writes: usize = store.profile_writes;
    let result = update_profile(
        &mut store,
        &dj_ctx(DJ_HOUSE),
        ProfileUpdate {
            socials: Some(SocialLinks {
                instagram: Some(String::from("not a link")),
                ..SocialLinks::default()
            }),
            ..ProfileUpdate::default()
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidUrl { .. }))
    ));
    assert_eq!(store.profile_writes, writes);
}

#[test]
fn test_promoter_profile_requires_org_and_city() {
    let (mut store, _) = seeded_store();
    let missing_city = update_profile(
        &mut store,
        &promoter_ctx(),
        ProfileUpdate {
            org_name: Some(String::from("Night Owls")),
            ..ProfileUpdate::default()
        },
    );
    assert_eq!(
        missing_city,
        Err(CoreError::DomainViolation(DomainError::MissingCity))
    );

    let saved: Profile = update_profile(
        &mut store,
        &promoter_ctx(),
        ProfileUpdate {
            org_name: Some(String::from("Night Owls")),
            cities: Some(vec![city("Austin, TX"), city("Austin, TX")]),
            venues: Some(vec![String::from("Dock 5, The Loft, Dock 5")]),
            phone: Some(String::from("(512) 555-0100")),
            website: Some(String::from("https://nightowls.example.com")),
            ..ProfileUpdate::default()
        },
    )
    .unwrap();
    match saved {
        Profile::Promoter(p) => {
            assert_eq!(p.cities.len(), 1);
            assert_eq!(p.venues, vec![String::from("Dock 5"), String::from("The Loft")]);
        }
        Profile::Dj(_) => panic!("expected promoter profile"),
    }
}

#[test]
fn test_dj_fields_rejected_on_promoter() {
    let (mut store, _) = seeded_store();
    let result = update_profile(
        &mut store,
        &promoter_ctx(),
        ProfileUpdate {
            name: Some(String::from("DJ Promo")),
            ..ProfileUpdate::default()
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::FieldNotApplicable { .. }
        ))
    ));
}

#[test]
fn test_profile_reads() {
    let (mut store, _) = seeded_store();
    assert_eq!(
        get_own_profile(&mut store, &promoter_ctx()).unwrap().id(),
        PROMOTER
    );
    assert_eq!(
        get_profile(&mut store, &promoter_ctx(), DJ_HOUSE)
            .unwrap()
            .id(),
        DJ_HOUSE
    );
    assert!(matches!(
        get_profile(&mut store, &promoter_ctx(), UserId::new(404)),
        Err(CoreError::NotFound { .. })
    ));
}

#[test]
fn test_media_upload_sets_profile_field() {
    let (mut store, _) = seeded_store();
    let url: String = upload_media(
        &mut store,
        &dj_ctx(DJ_HOUSE),
        MediaKind::ProfileImage,
        "image/png",
        &[1, 2, 3],
    )
    .unwrap();
    assert_eq!(
        store.candidate(DJ_HOUSE).profile_image_url.as_deref(),
        Some(url.as_str())
    );
    assert_eq!(
        store.media[&(DJ_HOUSE, MediaKind::ProfileImage)].1,
        vec![1_u8, 2, 3]
    );
}

#[test]
fn test_media_upload_rules() {
    let (mut store, _) = seeded_store();
    assert_eq!(
        upload_media(
            &mut store,
            &dj_ctx(DJ_HOUSE),
            MediaKind::PressKit,
            "application/pdf",
            &[]
        ),
        Err(CoreError::DomainViolation(DomainError::EmptyUpload))
    );
    assert!(matches!(
        upload_media(
            &mut store,
            &dj_ctx(DJ_HOUSE),
            MediaKind::Logo,
            "image/png",
            &[1]
        ),
        Err(CoreError::DomainViolation(
            DomainError::FieldNotApplicable { .. }
        ))
    ));
    assert_eq!(
        upload_media(
            &mut store,
            &dj_ctx(DJ_HOUSE),
            MediaKind::ProfileImage,
            "text/html",
            b"<script>alert(1)</script>"
        ),
        Err(CoreError::DomainViolation(
            DomainError::UnsupportedContentType {
                kind: String::from("profile_image"),
                content_type: String::from("text/html"),
            }
        ))
    );
    assert!(store.media.is_empty());
    assert_eq!(store.candidate(DJ_HOUSE).profile_image_url, None);
}

#[test]
fn test_media_upload_stores_bare_content_type() {
    let (mut store, _) = seeded_store();
    upload_media(
        &mut store,
        &dj_ctx(DJ_HOUSE),
        MediaKind::ProfileImage,
        "IMAGE/JPEG; quality=high",
        &[9],
    )
    .unwrap();
    assert_eq!(
        store.media[&(DJ_HOUSE, MediaKind::ProfileImage)].0,
        "image/jpeg"
    );
}
