// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Spinbook marketplace.
//!
//! Handlers take request DTOs and a [`spinbook::SessionContext`], run the
//! marketplace workflows against [`spinbook_persistence::Persistence`], and
//! return response DTOs or an [`ApiError`]. Domain and core errors never
//! cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticationService, AuthorizationService};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    create_event, dj_board, event_bookings, get_event, get_media, get_my_profile, get_profile,
    list_events, login, logout, reconcile_bookings, request_booking, respond_to_booking,
    search_djs, sent_requests, sign_up, toggle_date, toggle_weekday, update_event,
    update_profile, upload_media, whoami,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AvailabilityResponse, CreateBookingRequest, CreateEventRequest, EventBookingsResponse,
    LoginRequest, LoginResponse, MediaFile, ReconcileResponse, RespondToBookingRequest,
    SearchDjsRequest, SearchDjsResponse, SentRequestsResponse, SignUpRequest, ToggleDateRequest,
    ToggleWeekdayRequest, UpdateEventRequest, UpdateProfileRequest, UploadMediaResponse,
    WhoAmIResponse,
};
