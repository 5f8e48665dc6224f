// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw strings; handlers parse them into domain types so a
//! malformed date or city is reported as invalid input on the field it came
//! from. Responses reuse the serializable domain types where the shape is
//! already what clients need.

use serde::{Deserialize, Serialize};
use spinbook_domain::{
    AvailabilityRecord, BookingRequest, BookingResponse, CalendarDate, CandidateProfile,
    EventBoardEntry, SocialLinks,
};

/// API request to create an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// The sign-in email.
    pub email: String,
    /// The chosen password.
    pub password: String,
    /// The password typed a second time.
    pub password_confirmation: String,
    /// `dj` or `promoter`.
    pub role: String,
}

/// API request to sign in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The sign-in email, any case.
    pub email: String,
    /// The password.
    pub password: String,
}

/// API response for a successful sign-up or sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The bearer token for later requests.
    pub session_token: String,
    /// The account's canonical identifier.
    pub user_id: i64,
    /// The stored (lowercased) email.
    pub email: String,
    /// `dj` or `promoter`.
    pub role: String,
    /// When the session expires (ISO 8601, UTC).
    pub expires_at: String,
}

/// API response describing the signed-in account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// The account's canonical identifier.
    pub user_id: i64,
    /// The stored email.
    pub email: String,
    /// `dj` or `promoter`.
    pub role: String,
    /// Whether the profile has a name and at least one city.
    pub profile_complete: bool,
}

/// API request to edit the signed-in account's profile.
///
/// Absent fields are left unchanged. DJ-only and promoter-only fields are
/// rejected when sent for the other role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProfileRequest {
    /// DJ display name.
    pub name: Option<String>,
    /// DJ social links.
    pub socials: Option<SocialLinks>,
    /// Promoter organisation name.
    pub org_name: Option<String>,
    /// Promoter contact person.
    pub contact_name: Option<String>,
    /// Promoter contact email.
    pub email: Option<String>,
    /// Promoter phone number.
    pub phone: Option<String>,
    /// Promoter website.
    pub website: Option<String>,
    /// Promoter venues.
    pub venues: Option<Vec<String>>,
    /// Free-text bio, either role.
    pub bio: Option<String>,
    /// Genres played (DJ) or of interest (promoter).
    pub genres: Option<Vec<String>>,
    /// Cities in `"City, State"` form.
    pub cities: Option<Vec<String>>,
}

/// API request to flip one weekday in the weekly pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleWeekdayRequest {
    /// English weekday name, e.g. `Friday`.
    pub day: String,
}

/// API request to cycle the override for one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleDateRequest {
    /// `YYYY-MM-DD`.
    pub date: String,
}

/// API response after an availability edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The availability after the edit.
    pub availability: AvailabilityRecord,
    /// Whether the edit changed what was stored.
    pub saved: bool,
}

/// API request to create an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub venue: String,
    /// `"City, State"`, optional.
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// API request to edit an event. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateEventRequest {
    pub name: Option<String>,
    /// Accepted only when equal to the stored date.
    pub date: Option<String>,
    pub venue: Option<String>,
    /// An empty string clears the city.
    pub city: Option<String>,
    pub description: Option<String>,
}

/// API request to search for DJs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchDjsRequest {
    /// Scope the search to one of the caller's events.
    pub event_id: Option<i64>,
    /// Any-of genre match on exact tags.
    pub genres: Vec<String>,
    /// Any-of city match. Omit to use the event's city; send `[]` for any city.
    pub cities: Option<Vec<String>>,
    /// `YYYY-MM-DD`. Ignored when `event_id` is set.
    pub date: Option<String>,
    /// Case-insensitive substring of the DJ name.
    pub name: String,
}

/// API response for a DJ search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchDjsResponse {
    pub djs: Vec<CandidateProfile>,
}

/// API request to send a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub event_id: i64,
    pub dj_id: i64,
    #[serde(default)]
    pub message: Option<String>,
}

/// API request for a DJ's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespondToBookingRequest {
    /// `accept` or `decline`.
    pub response: BookingResponse,
}

/// API response listing the requests for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBookingsResponse {
    pub event_id: i64,
    pub entries: Vec<EventBoardEntry>,
}

/// API response listing the requests a promoter has sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentRequestsResponse {
    pub requests: Vec<BookingRequest>,
}

/// API response after blocking booked dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// Dates newly blocked, ascending.
    pub repaired: Vec<CalendarDate>,
}

/// API response after a media upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadMediaResponse {
    /// Public URL of the stored file.
    pub url: String,
}

/// An uploaded file ready to be served.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    pub content_type: String,
    pub bytes: Vec<u8>,
}
