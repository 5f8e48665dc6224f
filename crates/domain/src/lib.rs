// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod board;
mod booking;
mod calendar;
mod error;
mod event;
mod filter;
mod profile;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use availability::{AvailabilityEditor, AvailabilityRecord, resolve};
pub use board::{
    BoardEntry, DjBoard, EventBoardEntry, UNKNOWN_DJ, build_dj_board, sort_event_board,
};
pub use booking::{BookingRequest, BookingResponse, BookingStatus, NewBookingRequest};
pub use calendar::{CalendarDate, DayOfWeek};
pub use event::{Event, EventUpdate, NewEvent};
pub use filter::{SearchCriteria, filter_candidates};
pub use profile::{CandidateProfile, Profile, ProfileUpdate, PromoterProfile};

// Re-export public types
pub use error::DomainError;
pub use types::{BookingRequestId, City, EventId, MediaKind, Role, SocialLinks, UserId};
pub use validation::{
    is_valid_link, normalize_cities, normalize_genres, normalize_profile_update,
    normalize_socials, normalize_venues, validate_email, validate_phone,
    validate_profile_complete, validate_website,
};
