// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

macro_rules! id_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a database-assigned identifier.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn value(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(
    /// Identifier of an account. A profile shares the id of its account.
    UserId
);
id_newtype!(
    /// Identifier of an event.
    EventId
);
id_newtype!(
    /// Identifier of a booking request.
    BookingRequestId
);

/// The side of the marketplace an account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A DJ offering performances.
    Dj,
    /// An event promoter booking DJs.
    Promoter,
}

impl Role {
    /// Returns the persisted string form of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dj => "dj",
            Self::Promoter => "promoter",
        }
    }

    /// Parses a role string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRole` for anything other than `dj` or `promoter`.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dj" => Ok(Self::Dj),
            "promoter" => Ok(Self::Promoter),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serviceable city in canonical `"City, State"` form.
///
/// Construction trims both halves and rejoins them with `", "`, so two
/// spellings that differ only in surrounding whitespace compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct City(String);

impl City {
    /// Parses a `"City, State"` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCity` unless the input holds exactly one
    /// comma with a non-empty name on each side.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let mut parts = value.split(',');
        let (Some(city), Some(state), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(DomainError::InvalidCity(value.to_string()));
        };
        let city: &str = city.trim();
        let state: &str = state.trim();
        if city.is_empty() || state.is_empty() {
            return Err(DomainError::InvalidCity(value.to_string()));
        }
        Ok(Self(format!("{city}, {state}")))
    }

    /// Returns the canonical text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for City {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Links a DJ publishes alongside their profile. Every link is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soundcloud: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiktok: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<String>,
}

impl SocialLinks {
    /// Returns `(field, link)` for every link that is set, in display order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("soundcloud", self.soundcloud.as_deref()),
            ("instagram", self.instagram.as_deref()),
            ("facebook", self.facebook.as_deref()),
            ("twitter", self.twitter.as_deref()),
            ("tiktok", self.tiktok.as_deref()),
            ("youtube", self.youtube.as_deref()),
            ("website", self.website.as_deref()),
            ("other", self.other.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, link)| link.map(|l| (name, l)))
        .collect()
    }
}

/// Which uploaded file a media blob represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    /// A DJ's profile picture.
    ProfileImage,
    /// A DJ's electronic press kit.
    PressKit,
    /// A promoter's organisation logo.
    Logo,
}

impl MediaKind {
    /// Returns the path segment and persisted form of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ProfileImage => "profile_image",
            Self::PressKit => "press_kit",
            Self::Logo => "logo",
        }
    }

    /// Parses a kind string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMediaKind` for an unrecognised kind.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "profile_image" => Ok(Self::ProfileImage),
            "press_kit" => Ok(Self::PressKit),
            "logo" => Ok(Self::Logo),
            _ => Err(DomainError::InvalidMediaKind(s.to_string())),
        }
    }

    /// Returns the role whose profile has a field for this kind.
    #[must_use]
    pub const fn owner_role(&self) -> Role {
        match self {
            Self::ProfileImage | Self::PressKit => Role::Dj,
            Self::Logo => Role::Promoter,
        }
    }

    /// Checks an upload's declared MIME type against this kind and returns
    /// the bare, lowercased type to store.
    ///
    /// Profile images and logos take raster images (`image/*` other than
    /// SVG); press kits take `application/pdf`. Parameters after `;` are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedContentType` for any other type.
    pub fn accept_content_type(&self, content_type: &str) -> Result<String, DomainError> {
        let essence: String = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        let accepted: bool = match self {
            Self::ProfileImage | Self::Logo => essence
                .strip_prefix("image/")
                .is_some_and(|subtype| !subtype.is_empty() && subtype != "svg+xml"),
            Self::PressKit => essence == "application/pdf",
        };
        if accepted {
            Ok(essence)
        } else {
            Err(DomainError::UnsupportedContentType {
                kind: self.as_str().to_string(),
                content_type: content_type.to_string(),
            })
        }
    }
}

impl FromStr for MediaKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
