// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_dj, test_persistence};
use crate::{MediaData, Persistence};
use spinbook::MarketplaceStore;
use spinbook_domain::{MediaKind, UserId};

#[test]
fn test_upload_returns_public_url_and_stores_bytes() {
    let mut persistence: Persistence = test_persistence();
    let dj: UserId = create_dj(&mut persistence, "nova@example.com");

    let url: String = persistence
        .upload_file(dj, MediaKind::ProfileImage, "image/png", &[0x89, b'P', b'N', b'G'])
        .unwrap();
    assert_eq!(url, format!("http://127.0.0.1:3000/media/profile_image/{dj}"));

    let media: MediaData = persistence
        .get_media(dj, MediaKind::ProfileImage)
        .unwrap()
        .unwrap();
    assert_eq!(media.content_type, "image/png");
    assert_eq!(media.bytes, vec![0x89, b'P', b'N', b'G']);
    assert_eq!(media.kind, "profile_image");
}

#[test]
fn test_reupload_replaces_previous_file() {
    let mut persistence: Persistence = test_persistence();
    let dj: UserId = create_dj(&mut persistence, "nova@example.com");

    persistence
        .upload_file(dj, MediaKind::PressKit, "application/pdf", b"v1")
        .unwrap();
    persistence
        .upload_file(dj, MediaKind::PressKit, "application/octet-stream", b"version two")
        .unwrap();

    let media: MediaData = persistence
        .get_media(dj, MediaKind::PressKit)
        .unwrap()
        .unwrap();
    assert_eq!(media.content_type, "application/octet-stream");
    assert_eq!(media.bytes, b"version two".to_vec());
}

#[test]
fn test_kinds_are_stored_separately() {
    let mut persistence: Persistence = test_persistence();
    let dj: UserId = create_dj(&mut persistence, "nova@example.com");

    persistence
        .upload_file(dj, MediaKind::PressKit, "application/pdf", b"kit")
        .unwrap();

    assert!(
        persistence
            .get_media(dj, MediaKind::ProfileImage)
            .unwrap()
            .is_none()
    );
}
