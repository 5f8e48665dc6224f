// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::AvailabilityRecord;
use crate::error::DomainError;
use crate::types::{City, MediaKind, Role, SocialLinks, UserId};
use serde::{Deserialize, Serialize};

/// A DJ profile as seen by discovery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    /// Ordered, no duplicates.
    #[serde(default)]
    pub genres: Vec<String>,
    /// Ordered, no duplicates.
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub socials: SocialLinks,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    #[serde(default)]
    pub press_kit_url: Option<String>,
    #[serde(default)]
    pub availability: AvailabilityRecord,
}

impl CandidateProfile {
    /// Creates an empty DJ profile for a newly registered account.
    #[must_use]
    pub fn new(id: UserId, email: &str) -> Self {
        Self {
            id,
            email: email.to_string(),
            name: String::new(),
            bio: String::new(),
            genres: Vec::new(),
            cities: Vec::new(),
            socials: SocialLinks::default(),
            profile_image_url: None,
            press_kit_url: None,
            availability: AvailabilityRecord::new(),
        }
    }

    /// Returns the name to show for this DJ, falling back to the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.email
        } else {
            &self.name
        }
    }
}

/// An event promoter's organisation profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromoterProfile {
    pub id: UserId,
    pub email: String,
    #[serde(default)]
    pub org_name: String,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub genres_interested: Vec<String>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub venues: Vec<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

impl PromoterProfile {
    /// Creates an empty promoter profile for a newly registered account.
    #[must_use]
    pub fn new(id: UserId, email: &str) -> Self {
        Self {
            id,
            email: email.to_string(),
            org_name: String::new(),
            contact_name: String::new(),
            phone: String::new(),
            website: String::new(),
            bio: String::new(),
            genres_interested: Vec::new(),
            cities: Vec::new(),
            venues: Vec::new(),
            logo_url: None,
        }
    }
}

/// The profile document stored for every account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Profile {
    Dj(CandidateProfile),
    Promoter(PromoterProfile),
}

impl Profile {
    /// Creates the empty profile that goes with a new account.
    #[must_use]
    pub fn empty(id: UserId, email: &str, role: Role) -> Self {
        match role {
            Role::Dj => Self::Dj(CandidateProfile::new(id, email)),
            Role::Promoter => Self::Promoter(PromoterProfile::new(id, email)),
        }
    }

    #[must_use]
    pub const fn id(&self) -> UserId {
        match self {
            Self::Dj(p) => p.id,
            Self::Promoter(p) => p.id,
        }
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Dj(_) => Role::Dj,
            Self::Promoter(_) => Role::Promoter,
        }
    }

    /// Returns the DJ profile, if this is one.
    #[must_use]
    pub const fn as_candidate(&self) -> Option<&CandidateProfile> {
        match self {
            Self::Dj(p) => Some(p),
            Self::Promoter(_) => None,
        }
    }

    /// Merges the fields present in `update` into this profile.
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::FieldNotApplicable` if the update sets a field
    /// that belongs to the other role.
    pub fn apply_update(&mut self, update: ProfileUpdate) -> Result<(), DomainError> {
        if let Some(field) = update.first_field_not_for(self.role()) {
            return Err(DomainError::FieldNotApplicable {
                field: field.to_string(),
                role: self.role().to_string(),
            });
        }

        match self {
            Self::Dj(p) => {
                if let Some(name) = update.name {
                    p.name = name;
                }
                if let Some(bio) = update.bio {
                    p.bio = bio;
                }
                if let Some(genres) = update.genres {
                    p.genres = genres;
                }
                if let Some(cities) = update.cities {
                    p.cities = cities;
                }
                if let Some(socials) = update.socials {
                    p.socials = socials;
                }
                if let Some(url) = update.profile_image_url {
                    p.profile_image_url = Some(url);
                }
                if let Some(url) = update.press_kit_url {
                    p.press_kit_url = Some(url);
                }
                if let Some(availability) = update.availability {
                    p.availability = availability;
                }
            }
            Self::Promoter(p) => {
                if let Some(org_name) = update.org_name {
                    p.org_name = org_name;
                }
                if let Some(contact_name) = update.contact_name {
                    p.contact_name = contact_name;
                }
                if let Some(email) = update.email {
                    p.email = email;
                }
                if let Some(phone) = update.phone {
                    p.phone = phone;
                }
                if let Some(website) = update.website {
                    p.website = website;
                }
                if let Some(bio) = update.bio {
                    p.bio = bio;
                }
                if let Some(genres) = update.genres {
                    p.genres_interested = genres;
                }
                if let Some(cities) = update.cities {
                    p.cities = cities;
                }
                if let Some(venues) = update.venues {
                    p.venues = venues;
                }
                if let Some(url) = update.logo_url {
                    p.logo_url = Some(url);
                }
            }
        }
        Ok(())
    }
}

/// A partial profile change. Only the fields that are `Some` are written.
///
/// `genres` maps to a DJ's genres or a promoter's genres of interest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    // DJ
    pub name: Option<String>,
    pub socials: Option<SocialLinks>,
    pub profile_image_url: Option<String>,
    pub press_kit_url: Option<String>,
    pub availability: Option<AvailabilityRecord>,
    // Promoter
    pub org_name: Option<String>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub venues: Option<Vec<String>>,
    pub logo_url: Option<String>,
    // Both
    pub bio: Option<String>,
    pub genres: Option<Vec<String>>,
    pub cities: Option<Vec<City>>,
}

impl ProfileUpdate {
    /// An update that only replaces the availability record.
    #[must_use]
    pub fn availability(record: AvailabilityRecord) -> Self {
        Self {
            availability: Some(record),
            ..Self::default()
        }
    }

    /// An update that points the field for `kind` at `url`.
    #[must_use]
    pub fn media(kind: MediaKind, url: String) -> Self {
        match kind {
            MediaKind::ProfileImage => Self {
                profile_image_url: Some(url),
                ..Self::default()
            },
            MediaKind::PressKit => Self {
                press_kit_url: Some(url),
                ..Self::default()
            },
            MediaKind::Logo => Self {
                logo_url: Some(url),
                ..Self::default()
            },
        }
    }

    /// Returns true when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn first_field_not_for(&self, role: Role) -> Option<&'static str> {
        let dj_only: [(&'static str, bool); 5] = [
            ("name", self.name.is_some()),
            ("socials", self.socials.is_some()),
            ("profile_image_url", self.profile_image_url.is_some()),
            ("press_kit_url", self.press_kit_url.is_some()),
            ("availability", self.availability.is_some()),
        ];
        let promoter_only: [(&'static str, bool); 7] = [
            ("org_name", self.org_name.is_some()),
            ("contact_name", self.contact_name.is_some()),
            ("email", self.email.is_some()),
            ("phone", self.phone.is_some()),
            ("website", self.website.is_some()),
            ("venues", self.venues.is_some()),
            ("logo_url", self.logo_url.is_some()),
        ];
        let foreign: &[(&'static str, bool)] = match role {
            Role::Dj => &promoter_only,
            Role::Promoter => &dj_only,
        };
        foreign
            .iter()
            .find(|(_, present)| *present)
            .map(|(field, _)| *field)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calendar::DayOfWeek;

    #[test]
    fn test_partial_update_leaves_other_fields() {
        let mut profile: Profile = Profile::empty(UserId::new(1), "dj@example.com", Role::Dj);
        profile
            .apply_update(ProfileUpdate {
                name: Some(String::from("DJ Nova")),
                genres: Some(vec![String::from("house")]),
                ..ProfileUpdate::default()
            })
            .unwrap();
        profile
            .apply_update(ProfileUpdate {
                bio: Some(String::from("Deep cuts")),
                ..ProfileUpdate::default()
            })
            .unwrap();

        let dj: &CandidateProfile = profile.as_candidate().unwrap();
        assert_eq!(dj.name, "DJ Nova");
        assert_eq!(dj.genres, vec![String::from("house")]);
        assert_eq!(dj.bio, "Deep cuts");
    }

    #[test]
    fn test_foreign_field_is_rejected_without_changes() {
        let mut profile: Profile = Profile::empty(UserId::new(2), "p@example.com", Role::Promoter);
        let before: Profile = profile.clone();
        let result = profile.apply_update(ProfileUpdate {
            bio: Some(String::from("changed")),
            availability: Some(AvailabilityRecord::new()),
            ..ProfileUpdate::default()
        });

        assert_eq!(
            result,
            Err(DomainError::FieldNotApplicable {
                field: String::from("availability"),
                role: String::from("promoter"),
            })
        );
        assert_eq!(profile, before);
    }

    #[test]
    fn test_genres_map_to_promoter_interests() {
        let mut profile: Profile = Profile::empty(UserId::new(3), "p@example.com", Role::Promoter);
        profile
            .apply_update(ProfileUpdate {
                genres: Some(vec![String::from("techno")]),
                ..ProfileUpdate::default()
            })
            .unwrap();
        match profile {
            Profile::Promoter(p) => assert_eq!(p.genres_interested, vec![String::from("techno")]),
            Profile::Dj(_) => panic!("expected promoter profile"),
        }
    }

    #[test]
    fn test_media_update_targets_kind_field() {
        let update: ProfileUpdate =
            ProfileUpdate::media(MediaKind::PressKit, String::from("http://h/media/press_kit/1"));
        assert_eq!(
            update.press_kit_url.as_deref(),
            Some("http://h/media/press_kit/1")
        );
        assert!(update.profile_image_url.is_none());
    }

    #[test]
    fn test_profile_json_is_tagged_by_role() {
        let mut dj: CandidateProfile = CandidateProfile::new(UserId::new(9), "dj@example.com");
        dj.availability.toggle_weekday(DayOfWeek::Friday);
        let json: serde_json::Value = serde_json::to_value(Profile::Dj(dj.clone())).unwrap();
        assert_eq!(json["role"], "dj");
        assert_eq!(json["availability"]["weekly_pattern"]["Friday"], true);

        let back: Profile = serde_json::from_value(json).unwrap();
        assert_eq!(back, Profile::Dj(dj));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut dj: CandidateProfile = CandidateProfile::new(UserId::new(4), "dj@example.com");
        assert_eq!(dj.display_name(), "dj@example.com");
        dj.name = String::from("Selector");
        assert_eq!(dj.display_name(), "Selector");
    }

    #[test]
    fn test_empty_update() {
        assert!(ProfileUpdate::default().is_empty());
        assert!(!ProfileUpdate::availability(AvailabilityRecord::new()).is_empty());
    }
}
