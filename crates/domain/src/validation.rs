// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::profile::{Profile, ProfileUpdate};
use crate::types::{City, SocialLinks};
use std::collections::HashSet;

/// Trims genre tags, drops empty ones and drops repeats, keeping first-seen order.
#[must_use]
pub fn normalize_genres(genres: &[String]) -> Vec<String> {
    dedupe_trimmed(genres.iter().map(String::as_str))
}

/// Splits venue entries on commas, trims them, drops empty ones and drops
/// repeats, keeping first-seen order.
#[must_use]
pub fn normalize_venues(venues: &[String]) -> Vec<String> {
    dedupe_trimmed(venues.iter().flat_map(|v| v.split(',')))
}

fn dedupe_trimmed<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    values
        .map(str::trim)
        .filter(|v| !v.is_empty() && seen.insert(v))
        .map(String::from)
        .collect()
}

/// Parses every city and drops repeats, keeping first-seen order.
///
/// # Errors
///
/// Returns `DomainError::InvalidCity` for the first city not in
/// `"City, State"` form.
pub fn normalize_cities(cities: &[String]) -> Result<Vec<City>, DomainError> {
    let mut result: Vec<City> = Vec::with_capacity(cities.len());
    for raw in cities {
        let city: City = City::parse(raw)?;
        if !result.contains(&city) {
            result.push(city);
        }
    }
    Ok(result)
}

/// Checks a link against the accepted URL shape:
/// an optional `http://` or `https://` scheme, a host of word characters,
/// dots and dashes ending in a dot and at least two letters, and an optional
/// path starting with `/` and free of whitespace. Letters match in any case.
///
/// # Arguments
///
/// * `value` - The link to check
/// * `require_scheme` - Whether the scheme must be present
#[must_use]
pub fn is_valid_link(value: &str, require_scheme: bool) -> bool {
    let lower: String = value.to_ascii_lowercase();
    let rest: &str = if lower.starts_with("https://") {
        &value[8..]
    } else if lower.starts_with("http://") {
        &value[7..]
    } else if require_scheme {
        return false;
    } else {
        value
    };

    let (host, path): (&str, &str) = rest.find('/').map_or((rest, ""), |i| rest.split_at(i));

    if path.chars().any(char::is_whitespace) {
        return false;
    }
    if !host
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.' || c == '-')
    {
        return false;
    }
    let Some((name, tld)) = host.rsplit_once('.') else {
        return false;
    };
    !name.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Normalises a DJ's social links.
///
/// Blank links are cleared. A website without a scheme gets `https://`.
///
/// # Errors
///
/// Returns `DomainError::InvalidUrl` naming the first link that is not a
/// well-formed URL.
pub fn normalize_socials(socials: SocialLinks) -> Result<SocialLinks, DomainError> {
    let clean = |link: Option<String>| -> Option<String> {
        link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
    };

    let website: Option<String> = clean(socials.website).map(|w| {
        if w.starts_with("http://") || w.starts_with("https://") {
            w
        } else {
            format!("https://{w}")
        }
    });

    let normalized: SocialLinks = SocialLinks {
        soundcloud: clean(socials.soundcloud),
        instagram: clean(socials.instagram),
        facebook: clean(socials.facebook),
        twitter: clean(socials.twitter),
        tiktok: clean(socials.tiktok),
        youtube: clean(socials.youtube),
        website,
        other: clean(socials.other),
    };

    if let Some((field, link)) = normalized
        .entries()
        .into_iter()
        .find(|(_, link)| !is_valid_link(link, false))
    {
        return Err(DomainError::InvalidUrl {
            field: field.to_string(),
            value: link.to_string(),
        });
    }
    Ok(normalized)
}

/// Validates a promoter website. Blank is allowed; otherwise a scheme is required.
///
/// # Errors
///
/// Returns `DomainError::InvalidUrl` if the website is set and malformed.
pub fn validate_website(website: &str) -> Result<String, DomainError> {
    let website: &str = website.trim();
    if website.is_empty() || is_valid_link(website, true) {
        Ok(website.to_string())
    } else {
        Err(DomainError::InvalidUrl {
            field: String::from("website"),
            value: website.to_string(),
        })
    }
}

/// Validates a phone number. Blank is allowed; otherwise at least seven
/// characters drawn from digits, parentheses, `+`, `-` and whitespace.
///
/// # Errors
///
/// Returns `DomainError::InvalidPhone` if the phone is set and malformed.
pub fn validate_phone(phone: &str) -> Result<String, DomainError> {
    if phone.is_empty() {
        return Ok(String::new());
    }
    let allowed: bool = phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | '+' | '-') || c.is_whitespace());
    if allowed && phone.chars().count() >= 7 {
        Ok(phone.to_string())
    } else {
        Err(DomainError::InvalidPhone(phone.to_string()))
    }
}

/// Validates and lowercases an email address.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` unless the address has one `@` with a
/// non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<String, DomainError> {
    let email: String = email.trim().to_lowercase();
    let valid: bool = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
                && domain
                    .split_once('.')
                    .is_some_and(|(a, b)| !a.is_empty() && !b.is_empty())
        }
        None => false,
    };
    if valid {
        Ok(email)
    } else {
        Err(DomainError::InvalidEmail(email))
    }
}

/// Normalises every field present in a profile update.
///
/// Names are trimmed. Genres and venues are deduplicated. Links, phone and
/// email are checked.
///
/// # Errors
///
/// Returns the first validation failure found.
pub fn normalize_profile_update(update: ProfileUpdate) -> Result<ProfileUpdate, DomainError> {
    Ok(ProfileUpdate {
        name: update.name.map(|n| n.trim().to_string()),
        org_name: update.org_name.map(|n| n.trim().to_string()),
        contact_name: update.contact_name.map(|n| n.trim().to_string()),
        genres: update.genres.as_deref().map(normalize_genres),
        venues: update.venues.as_deref().map(normalize_venues),
        socials: update.socials.map(normalize_socials).transpose()?,
        website: update.website.as_deref().map(validate_website).transpose()?,
        phone: update.phone.as_deref().map(validate_phone).transpose()?,
        email: update.email.as_deref().map(validate_email).transpose()?,
        cities: update.cities.map(|cities| {
            let mut unique: Vec<City> = Vec::with_capacity(cities.len());
            for city in cities {
                if !unique.contains(&city) {
                    unique.push(city);
                }
            }
            unique
        }),
        ..update
    })
}

/// Validates that a profile has the fields required to be saved.
///
/// # Errors
///
/// Returns `DomainError::InvalidName` if the DJ name or organisation name is
/// blank, or `DomainError::MissingCity` if no city is listed.
pub fn validate_profile_complete(profile: &Profile) -> Result<(), DomainError> {
    let (name, cities) = match profile {
        Profile::Dj(p) => (p.name.as_str(), p.cities.as_slice()),
        Profile::Promoter(p) => (p.org_name.as_str(), p.cities.as_slice()),
    };

    // Rule: name must not be empty
    if name.trim().is_empty() {
        return Err(DomainError::InvalidName(match profile {
            Profile::Dj(_) => String::from("Name is required"),
            Profile::Promoter(_) => String::from("Organization name is required"),
        }));
    }

    // Rule: at least one serviceable city
    if cities.is_empty() {
        return Err(DomainError::MissingCity);
    }

    Ok(())
}
