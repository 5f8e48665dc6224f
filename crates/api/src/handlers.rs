// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler parses its request DTO into domain types, checks the caller's
//! role, and runs the matching workflow against the store. Writes go through
//! [`spinbook::apply`] as commands; reads call the workflows directly.

use spinbook::{
    AvailabilityChange, AvailabilityEdit, Command, DiscoveryQuery, EventDraft, Outcome,
    SessionContext, apply, dj_board as core_dj_board, event_board, get_event as core_get_event,
    get_own_profile, get_profile as core_get_profile, list_my_events, search_candidates,
    sent_requests as core_sent_requests,
};
use spinbook_domain::{
    BookingRequest, BookingRequestId, CalendarDate, CandidateProfile, City, DayOfWeek, DjBoard,
    Event, EventBoardEntry, EventId, EventUpdate, MediaKind, Profile, ProfileUpdate, Role, UserId,
    normalize_cities, validate_email, validate_profile_complete,
};
use spinbook_persistence::{MediaData, Persistence, PersistenceError};
use std::str::FromStr;
use tracing::{debug, info};

use crate::auth::{AuthenticationService, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AvailabilityResponse, CreateBookingRequest, CreateEventRequest, EventBookingsResponse,
    LoginRequest, LoginResponse, MediaFile, ReconcileResponse, RespondToBookingRequest,
    SearchDjsRequest, SearchDjsResponse, SentRequestsResponse, SignUpRequest, ToggleDateRequest,
    ToggleWeekdayRequest, UpdateEventRequest, UpdateProfileRequest, UploadMediaResponse,
    WhoAmIResponse,
};

// ============================================================================
// Parsing helpers
// ============================================================================

fn parse_date(value: &str) -> Result<CalendarDate, ApiError> {
    CalendarDate::parse(value).map_err(translate_domain_error)
}

fn parse_city(value: &str) -> Result<City, ApiError> {
    City::parse(value).map_err(translate_domain_error)
}

/// A blank city in an edit clears the stored one.
fn parse_city_edit(value: &str) -> Result<Option<City>, ApiError> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        parse_city(value).map(Some)
    }
}

fn parse_cities(values: &[String]) -> Result<Vec<City>, ApiError> {
    normalize_cities(values).map_err(translate_domain_error)
}

fn unexpected_outcome(command: &str) -> ApiError {
    ApiError::Internal {
        message: format!("{command} produced an unexpected outcome"),
    }
}

/// Runs a command and maps a failure into an API error.
fn run(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    command: Command,
) -> Result<Outcome, ApiError> {
    apply(persistence, ctx, command).map_err(translate_core_error)
}

// ============================================================================
// Accounts and sessions
// ============================================================================

/// Creates an account with an empty profile and signs it in.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The sign-up request
///
/// # Errors
///
/// Returns an error if:
/// - The email or role is invalid
/// - The password fails the password policy
/// - The email is already registered
/// - The account or session cannot be stored
pub fn sign_up(
    persistence: &mut Persistence,
    request: &SignUpRequest,
) -> Result<LoginResponse, ApiError> {
    let email: String = validate_email(&request.email).map_err(translate_domain_error)?;
    let role: Role = Role::parse(&request.role).map_err(translate_domain_error)?;
    PasswordPolicy::default().check(&request.password, &request.password_confirmation, &email)?;

    let user_id: UserId = persistence
        .create_account(&email, &request.password, role)
        .map_err(|e| match e {
            PersistenceError::Conflict(message) => ApiError::DomainRuleViolation {
                rule: String::from("unique_email"),
                message,
            },
            other => ApiError::from(other),
        })?;

    let (session_token, expires_at) = AuthenticationService::open_session(persistence, user_id)?;
    info!(user_id = %user_id, %role, "Account signed up");

    Ok(LoginResponse {
        session_token,
        user_id: user_id.value(),
        email,
        role: role.as_str().to_string(),
        expires_at,
    })
}

/// Signs in with email and password.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` if the credentials do not match.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, ctx, expires_at): (String, SessionContext, String) =
        AuthenticationService::login(persistence, &request.email, &request.password)?;

    Ok(LoginResponse {
        session_token,
        user_id: ctx.user_id().value(),
        email: ctx.email().to_string(),
        role: ctx.role().as_str().to_string(),
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Describes the signed-in account.
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded.
pub fn whoami(
    persistence: &mut Persistence,
    ctx: &SessionContext,
) -> Result<WhoAmIResponse, ApiError> {
    let profile: Profile = get_own_profile(persistence, ctx).map_err(translate_core_error)?;

    Ok(WhoAmIResponse {
        user_id: ctx.user_id().value(),
        email: ctx.email().to_string(),
        role: ctx.role().as_str().to_string(),
        profile_complete: validate_profile_complete(&profile).is_ok(),
    })
}

// ============================================================================
// Profiles
// ============================================================================

/// Returns the signed-in account's profile.
///
/// # Errors
///
/// Returns an error if the profile cannot be loaded.
pub fn get_my_profile(
    persistence: &mut Persistence,
    ctx: &SessionContext,
) -> Result<Profile, ApiError> {
    get_own_profile(persistence, ctx).map_err(translate_core_error)
}

/// Returns any account's profile.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if no such profile exists.
pub fn get_profile(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    user_id: i64,
) -> Result<Profile, ApiError> {
    core_get_profile(persistence, ctx, UserId::new(user_id)).map_err(translate_core_error)
}

/// Edits the signed-in account's profile.
///
/// # Errors
///
/// Returns an error if a field is invalid, does not apply to the account's
/// role, or would leave the profile without a name or a city.
pub fn update_profile(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request: &UpdateProfileRequest,
) -> Result<Profile, ApiError> {
    let cities: Option<Vec<City>> = request.cities.as_deref().map(parse_cities).transpose()?;
    let update: ProfileUpdate = ProfileUpdate {
        name: request.name.clone(),
        socials: request.socials.clone(),
        org_name: request.org_name.clone(),
        contact_name: request.contact_name.clone(),
        email: request.email.clone(),
        phone: request.phone.clone(),
        website: request.website.clone(),
        venues: request.venues.clone(),
        bio: request.bio.clone(),
        genres: request.genres.clone(),
        cities,
        ..ProfileUpdate::default()
    };

    match run(persistence, ctx, Command::UpdateProfile { update })? {
        Outcome::Profile(profile) => Ok(profile),
        _ => Err(unexpected_outcome("UpdateProfile")),
    }
}

// ============================================================================
// Availability
// ============================================================================

fn edit_availability(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    edit: AvailabilityEdit,
) -> Result<AvailabilityResponse, ApiError> {
    AuthorizationService::authorize_dj(ctx, "edit_availability")?;

    match run(
        persistence,
        ctx,
        Command::EditAvailability { edits: vec![edit] },
    )? {
        Outcome::Availability(AvailabilityChange { record, synced }) => Ok(AvailabilityResponse {
            availability: record,
            saved: synced,
        }),
        _ => Err(unexpected_outcome("EditAvailability")),
    }
}

/// Flips one weekday in the signed-in DJ's weekly pattern.
///
/// # Errors
///
/// Returns an error for non-DJ accounts or an unknown weekday name.
pub fn toggle_weekday(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request: &ToggleWeekdayRequest,
) -> Result<AvailabilityResponse, ApiError> {
    let day: DayOfWeek = DayOfWeek::from_str(&request.day).map_err(translate_domain_error)?;
    edit_availability(persistence, ctx, AvailabilityEdit::ToggleWeekday(day))
}

/// Cycles the override for one date in the signed-in DJ's availability.
///
/// # Errors
///
/// Returns an error for non-DJ accounts or a malformed date.
pub fn toggle_date(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request: &ToggleDateRequest,
) -> Result<AvailabilityResponse, ApiError> {
    let date: CalendarDate = parse_date(&request.date)?;
    edit_availability(persistence, ctx, AvailabilityEdit::ToggleDate(date))
}

// ============================================================================
// Events
// ============================================================================

/// Creates an event owned by the signed-in promoter.
///
/// # Errors
///
/// Returns an error for non-promoters, a malformed date or city, or a
/// blank name.
pub fn create_event(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request: &CreateEventRequest,
) -> Result<Event, ApiError> {
    AuthorizationService::authorize_promoter(ctx, "create_event")?;

    let draft: EventDraft = EventDraft {
        name: request.name.clone(),
        date: parse_date(&request.date)?,
        venue: request.venue.trim().to_string(),
        city: request.city.as_deref().map(parse_city).transpose()?,
        description: request.description.clone(),
    };

    match run(persistence, ctx, Command::CreateEvent { draft })? {
        Outcome::Event(event) => Ok(event),
        _ => Err(unexpected_outcome("CreateEvent")),
    }
}

/// Edits an event the signed-in promoter owns.
///
/// # Errors
///
/// Returns an error if the caller does not own the event, the event does
/// not exist, or the request tries to change the date.
pub fn update_event(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    event_id: i64,
    request: &UpdateEventRequest,
) -> Result<Event, ApiError> {
    AuthorizationService::authorize_promoter(ctx, "update_event")?;

    let update: EventUpdate = EventUpdate {
        name: request.name.clone(),
        date: request.date.as_deref().map(parse_date).transpose()?,
        venue: request.venue.as_deref().map(|v| v.trim().to_string()),
        city: request.city.as_deref().map(parse_city_edit).transpose()?,
        description: request.description.clone(),
    };

    match run(
        persistence,
        ctx,
        Command::UpdateEvent {
            event_id: EventId::new(event_id),
            update,
        },
    )? {
        Outcome::Event(event) => Ok(event),
        _ => Err(unexpected_outcome("UpdateEvent")),
    }
}

/// Lists the signed-in promoter's events by date.
///
/// # Errors
///
/// Returns an error for non-promoters.
pub fn list_events(
    persistence: &mut Persistence,
    ctx: &SessionContext,
) -> Result<Vec<Event>, ApiError> {
    list_my_events(persistence, ctx).map_err(translate_core_error)
}

/// Returns one event.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if the event does not exist.
pub fn get_event(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    event_id: i64,
) -> Result<Event, ApiError> {
    core_get_event(persistence, ctx, EventId::new(event_id)).map_err(translate_core_error)
}

// ============================================================================
// Discovery
// ============================================================================

/// Searches DJs for the signed-in promoter.
///
/// # Errors
///
/// Returns an error for non-promoters, a malformed date or city, or an
/// event the caller does not own.
pub fn search_djs(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request: &SearchDjsRequest,
) -> Result<SearchDjsResponse, ApiError> {
    AuthorizationService::authorize_promoter(ctx, "search_djs")?;

    let query: DiscoveryQuery = DiscoveryQuery {
        event_id: request.event_id.map(EventId::new),
        genres: request.genres.clone(),
        cities: request.cities.as_deref().map(parse_cities).transpose()?,
        date: request.date.as_deref().map(parse_date).transpose()?,
        name: request.name.clone(),
    };

    let djs: Vec<CandidateProfile> =
        search_candidates(persistence, ctx, query).map_err(translate_core_error)?;
    debug!(count = djs.len(), "DJ search returned");
    Ok(SearchDjsResponse { djs })
}

// ============================================================================
// Booking requests
// ============================================================================

/// Sends a booking request for one of the caller's events.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if the DJ already has a pending
/// or booked request for the event, or another error if the event or DJ
/// does not exist or the caller does not own the event.
pub fn request_booking(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request: &CreateBookingRequest,
) -> Result<BookingRequest, ApiError> {
    AuthorizationService::authorize_promoter(ctx, "request_booking")?;

    match run(
        persistence,
        ctx,
        Command::RequestBooking {
            event_id: EventId::new(request.event_id),
            dj_id: UserId::new(request.dj_id),
            message: request.message.clone(),
        },
    )? {
        Outcome::BookingRequest(booking) => Ok(booking),
        _ => Err(unexpected_outcome("RequestBooking")),
    }
}

/// Accepts or declines a request addressed to the signed-in DJ.
///
/// # Errors
///
/// Returns an error if the request is addressed to someone else, was
/// already answered, or the availability write after an accept failed.
pub fn respond_to_booking(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    request_id: i64,
    request: &RespondToBookingRequest,
) -> Result<BookingRequest, ApiError> {
    AuthorizationService::authorize_dj(ctx, "respond_to_booking")?;

    match run(
        persistence,
        ctx,
        Command::RespondToBooking {
            request_id: BookingRequestId::new(request_id),
            response: request.response,
        },
    )? {
        Outcome::BookingRequest(booking) => Ok(booking),
        _ => Err(unexpected_outcome("RespondToBooking")),
    }
}

/// Returns the signed-in DJ's pending and upcoming requests.
///
/// # Errors
///
/// Returns an error for non-DJ accounts.
pub fn dj_board(persistence: &mut Persistence, ctx: &SessionContext) -> Result<DjBoard, ApiError> {
    AuthorizationService::authorize_dj(ctx, "view_dj_board")?;
    core_dj_board(persistence, ctx).map_err(translate_core_error)
}

/// Returns the requests for one of the caller's events, booked first.
///
/// # Errors
///
/// Returns an error if the caller does not own the event.
pub fn event_bookings(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    event_id: i64,
) -> Result<EventBookingsResponse, ApiError> {
    AuthorizationService::authorize_promoter(ctx, "view_event_bookings")?;
    let entries: Vec<EventBoardEntry> =
        event_board(persistence, ctx, EventId::new(event_id)).map_err(translate_core_error)?;
    Ok(EventBookingsResponse { event_id, entries })
}

/// Returns every request the signed-in promoter has sent.
///
/// # Errors
///
/// Returns an error for non-promoters.
pub fn sent_requests(
    persistence: &mut Persistence,
    ctx: &SessionContext,
) -> Result<SentRequestsResponse, ApiError> {
    let requests: Vec<BookingRequest> =
        core_sent_requests(persistence, ctx).map_err(translate_core_error)?;
    Ok(SentRequestsResponse { requests })
}

/// Blocks the date of every booked event the signed-in DJ's availability
/// still leaves open.
///
/// # Errors
///
/// Returns an error for non-DJ accounts.
pub fn reconcile_bookings(
    persistence: &mut Persistence,
    ctx: &SessionContext,
) -> Result<ReconcileResponse, ApiError> {
    AuthorizationService::authorize_dj(ctx, "reconcile_bookings")?;

    match run(persistence, ctx, Command::ReconcileBookedDates)? {
        Outcome::RepairedDates(repaired) => Ok(ReconcileResponse { repaired }),
        _ => Err(unexpected_outcome("ReconcileBookedDates")),
    }
}

// ============================================================================
// Media
// ============================================================================

/// Stores a file for the signed-in account and links it from the profile.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `ctx` - The session context
/// * `kind` - `profile_image`, `press_kit` or `logo`
/// * `content_type` - MIME type reported by the client
/// * `bytes` - File content
///
/// # Errors
///
/// Returns an error for an unknown kind, an empty file, or a kind that does
/// not belong to the account's role.
pub fn upload_media(
    persistence: &mut Persistence,
    ctx: &SessionContext,
    kind: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<UploadMediaResponse, ApiError> {
    let kind: MediaKind = MediaKind::parse(kind).map_err(translate_domain_error)?;

    match run(
        persistence,
        ctx,
        Command::UploadMedia {
            kind,
            content_type: content_type.to_string(),
            bytes: bytes.to_vec(),
        },
    )? {
        Outcome::MediaUrl(url) => Ok(UploadMediaResponse { url }),
        _ => Err(unexpected_outcome("UploadMedia")),
    }
}

/// Loads an uploaded file for serving. No session is needed.
///
/// # Errors
///
/// Returns `ApiError::ResourceNotFound` if nothing was uploaded.
pub fn get_media(
    persistence: &mut Persistence,
    kind: &str,
    owner_id: i64,
) -> Result<MediaFile, ApiError> {
    let kind: MediaKind = MediaKind::parse(kind).map_err(translate_domain_error)?;
    let media: MediaData = persistence
        .get_media(UserId::new(owner_id), kind)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Media"),
            message: format!("No {kind} uploaded for account {owner_id}"),
        })?;

    Ok(MediaFile {
        content_type: media.content_type,
        bytes: media.bytes,
    })
}
