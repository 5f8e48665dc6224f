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
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State as AxumState},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use spinbook_api::{
    ApiError, AvailabilityResponse, CreateBookingRequest, CreateEventRequest,
    EventBookingsResponse, LoginRequest, LoginResponse, MediaFile, ReconcileResponse,
    RespondToBookingRequest, SearchDjsRequest, SearchDjsResponse, SentRequestsResponse,
    SignUpRequest, ToggleDateRequest, ToggleWeekdayRequest, UpdateEventRequest,
    UpdateProfileRequest, UploadMediaResponse, WhoAmIResponse,
};
use spinbook_domain::{BookingRequest, DjBoard, Event, Profile};
use spinbook_persistence::Persistence;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::session::SessionUser;

/// Largest accepted media upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Spinbook Server - HTTP server for the Spinbook booking marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "SPINBOOK_DATABASE")]
    database: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "SPINBOOK_BIND", default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, env = "SPINBOOK_PORT", default_value_t = 3000)]
    port: u16,

    /// Base URL used when building public media links.
    /// Defaults to `http://{bind}:{port}`.
    #[arg(long, env = "SPINBOOK_PUBLIC_BASE_URL")]
    public_base_url: Option<String>,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(long, env = "SPINBOOK_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The marketplace store.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    error: String,
    /// Always `false`.
    success: bool,
}

/// Response for writes that return no record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WriteResponse {
    /// Whether the operation succeeded.
    success: bool,
    /// Optional message.
    message: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: self.message,
            success: false,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::DomainRuleViolation { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

// ============================================================================
// Accounts
// ============================================================================

/// Handler for POST `/auth/signup`.
async fn handle_sign_up(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<SignUpRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(role = %req.role, "Handling sign_up request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = spinbook_api::sign_up(&mut persistence, &req)?;
    drop(persistence);

    info!(user_id = response.user_id, "Account created");
    Ok(Json(response))
}

/// Handler for POST `/auth/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = spinbook_api::login(&mut persistence, &req)?;
    drop(persistence);

    info!(user_id = response.user_id, "Signed in");
    Ok(Json(response))
}

/// Handler for POST `/auth/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, token): SessionUser,
) -> Result<Json<WriteResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    spinbook_api::logout(&mut persistence, &token)?;
    drop(persistence);

    info!(user_id = %ctx.user_id(), "Signed out");
    Ok(Json(WriteResponse {
        success: true,
        message: Some(String::from("Signed out")),
    }))
}

/// Handler for GET `/auth/me`.
async fn handle_whoami(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
) -> Result<Json<WhoAmIResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::whoami(&mut persistence, &ctx)?))
}

// ============================================================================
// Profiles and availability
// ============================================================================

/// Handler for GET `/profile`.
async fn handle_get_my_profile(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
) -> Result<Json<Profile>, HttpError> {
    debug!(user_id = %ctx.user_id(), "Handling get_my_profile request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::get_my_profile(&mut persistence, &ctx)?))
}

/// Handler for PUT `/profile`.
async fn handle_update_profile(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<Profile>, HttpError> {
    info!(user_id = %ctx.user_id(), "Handling update_profile request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::update_profile(
        &mut persistence,
        &ctx,
        &req,
    )?))
}

/// Handler for GET `/profiles/{id}`.
async fn handle_get_profile(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Path(user_id): Path<i64>,
) -> Result<Json<Profile>, HttpError> {
    debug!(user_id, "Handling get_profile request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::get_profile(
        &mut persistence,
        &ctx,
        user_id,
    )?))
}

/// Handler for POST `/profile/availability/weekday`.
async fn handle_toggle_weekday(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Json(req): Json<ToggleWeekdayRequest>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(user_id = %ctx.user_id(), day = %req.day, "Handling toggle_weekday request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::toggle_weekday(
        &mut persistence,
        &ctx,
        &req,
    )?))
}

/// Handler for POST `/profile/availability/date`.
async fn handle_toggle_date(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Json(req): Json<ToggleDateRequest>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    info!(user_id = %ctx.user_id(), date = %req.date, "Handling toggle_date request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::toggle_date(
        &mut persistence,
        &ctx,
        &req,
    )?))
}

// ============================================================================
// Events
// ============================================================================

/// Handler for POST `/events`.
async fn handle_create_event(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Json(req): Json<CreateEventRequest>,
) -> Result<Json<Event>, HttpError> {
    info!(user_id = %ctx.user_id(), date = %req.date, "Handling create_event request");

    let mut persistence = app_state.persistence.lock().await;
    let event: Event = spinbook_api::create_event(&mut persistence, &ctx, &req)?;
    drop(persistence);

    info!(event_id = %event.id, "Event created");
    Ok(Json(event))
}

/// Handler for PUT `/events/{id}`.
async fn handle_update_event(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Path(event_id): Path<i64>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Json<Event>, HttpError> {
    info!(event_id, "Handling update_event request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::update_event(
        &mut persistence,
        &ctx,
        event_id,
        &req,
    )?))
}

/// Handler for GET `/events`.
async fn handle_list_events(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
) -> Result<Json<Vec<Event>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::list_events(&mut persistence, &ctx)?))
}

/// Handler for GET `/events/{id}`.
async fn handle_get_event(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Path(event_id): Path<i64>,
) -> Result<Json<Event>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::get_event(
        &mut persistence,
        &ctx,
        event_id,
    )?))
}

// ============================================================================
// Discovery and bookings
// ============================================================================

/// Handler for POST `/djs/search`.
async fn handle_search_djs(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Json(req): Json<SearchDjsRequest>,
) -> Result<Json<SearchDjsResponse>, HttpError> {
    debug!(event_id = ?req.event_id, "Handling search_djs request");
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::search_djs(&mut persistence, &ctx, &req)?))
}

/// Handler for POST `/bookings`.
async fn handle_request_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Json(req): Json<CreateBookingRequest>,
) -> Result<Json<BookingRequest>, HttpError> {
    info!(
        event_id = req.event_id,
        dj_id = req.dj_id,
        "Handling request_booking request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let request: BookingRequest = spinbook_api::request_booking(&mut persistence, &ctx, &req)?;
    drop(persistence);

    info!(request_id = %request.id, "Booking request sent");
    Ok(Json(request))
}

/// Handler for POST `/bookings/{id}/respond`.
async fn handle_respond_to_booking(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Path(request_id): Path<i64>,
    Json(req): Json<RespondToBookingRequest>,
) -> Result<Json<BookingRequest>, HttpError> {
    info!(request_id, response = ?req.response, "Handling respond_to_booking request");

    let mut persistence = app_state.persistence.lock().await;
    let result: Result<BookingRequest, ApiError> =
        spinbook_api::respond_to_booking(&mut persistence, &ctx, request_id, &req);
    drop(persistence);

    if let Err(ApiError::Internal { message }) = &result {
        warn!(request_id, %message, "Booking answer not fully applied");
    }
    Ok(Json(result?))
}

/// Handler for GET `/bookings/mine`.
async fn handle_dj_board(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
) -> Result<Json<DjBoard>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::dj_board(&mut persistence, &ctx)?))
}

/// Handler for GET `/bookings/sent`.
async fn handle_sent_requests(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
) -> Result<Json<SentRequestsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::sent_requests(&mut persistence, &ctx)?))
}

/// Handler for GET `/events/{id}/bookings`.
async fn handle_event_bookings(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
    Path(event_id): Path<i64>,
) -> Result<Json<EventBookingsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::event_bookings(
        &mut persistence,
        &ctx,
        event_id,
    )?))
}

/// Handler for POST `/bookings/reconcile`.
async fn handle_reconcile_bookings(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(ctx, _): SessionUser,
) -> Result<Json<ReconcileResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: ReconcileResponse = spinbook_api::reconcile_bookings(&mut persistence, &ctx)?;
    drop(persistence);

    info!(
        user_id = %ctx.user_id(),
        repaired = response.repaired.len(),
        "Reconciled booked dates"
    );
    Ok(Json(response))
}

// ============================================================================
// Media
// ============================================================================

/// Handler for PUT `/media/{kind}`.
///
/// The request body is the raw file. Its `Content-Type` header must suit the
/// media kind and is replayed when the file is served.
async fn handle_upload_media(
    AxumState(app_state): AxumState<AppState>,
    Path(kind): Path<String>,
    SessionUser(ctx, _): SessionUser,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<UploadMediaResponse>, HttpError> {
    let content_type: &str = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream");
    info!(
        user_id = %ctx.user_id(),
        kind = %kind,
        content_type,
        size = body.len(),
        "Handling upload_media request"
    );

    let mut persistence = app_state.persistence.lock().await;
    Ok(Json(spinbook_api::upload_media(
        &mut persistence,
        &ctx,
        &kind,
        content_type,
        &body,
    )?))
}

/// Handler for GET `/media/{kind}/{owner_id}`.
async fn handle_get_media(
    AxumState(app_state): AxumState<AppState>,
    Path((kind, owner_id)): Path<(String, i64)>,
) -> Result<Response, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let media: MediaFile = spinbook_api::get_media(&mut persistence, &kind, owner_id)?;
    drop(persistence);

    let headers: [(header::HeaderName, String); 2] = [
        (header::CONTENT_TYPE, media.content_type),
        (header::X_CONTENT_TYPE_OPTIONS, String::from("nosniff")),
    ];
    Ok((headers, media.bytes).into_response())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/auth/signup", post(handle_sign_up))
        .route("/auth/login", post(handle_login))
        .route("/auth/logout", post(handle_logout))
        .route("/auth/me", get(handle_whoami))
        .route(
            "/profile",
            get(handle_get_my_profile).put(handle_update_profile),
        )
        .route("/profiles/{id}", get(handle_get_profile))
        .route("/profile/availability/weekday", post(handle_toggle_weekday))
        .route("/profile/availability/date", post(handle_toggle_date))
        .route("/events", post(handle_create_event).get(handle_list_events))
        .route(
            "/events/{id}",
            get(handle_get_event).put(handle_update_event),
        )
        .route("/events/{id}/bookings", get(handle_event_bookings))
        .route("/djs/search", post(handle_search_djs))
        .route("/bookings", post(handle_request_booking))
        .route("/bookings/{id}/respond", post(handle_respond_to_booking))
        .route("/bookings/mine", get(handle_dj_board))
        .route("/bookings/sent", get(handle_sent_requests))
        .route("/bookings/reconcile", post(handle_reconcile_bookings))
        .route("/media/{kind}", put(handle_upload_media))
        .route("/media/{kind}/{owner_id}", get(handle_get_media))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
        )
        .init();

    info!("Initializing Spinbook Server");

    let public_base_url: String = args
        .public_base_url
        .clone()
        .unwrap_or_else(|| format!("http://{}:{}", args.bind, args.port));

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    let mut persistence: Persistence = persistence.with_public_base_url(&public_base_url);
    let purged: usize = persistence.delete_expired_sessions()?;
    info!(purged, "Removed expired sessions");

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!(%public_base_url, "Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
