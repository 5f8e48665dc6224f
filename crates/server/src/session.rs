// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session extraction for the server.
//!
//! Handlers that need a signed-in account take a [`SessionUser`] argument;
//! the bearer token is validated before the handler body runs.

use axum::{
    Json,
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use spinbook::SessionContext;
use spinbook_api::AuthenticationService;
use tracing::{debug, warn};

use crate::{AppState, ErrorResponse};

/// Extractor for signed-in accounts.
///
/// Carries the validated session context and the raw bearer token, which
/// sign-out needs to delete the session.
///
/// # Authentication Flow
///
/// 1. Extract `Authorization: Bearer <token>` header
/// 2. Validate the token via `AuthenticationService::validate_session`
/// 3. Return the `SessionContext` and the token
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if the header is missing or malformed, or
/// if the session is unknown or expired.
pub struct SessionUser(pub SessionContext, pub String);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header: &str = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token: &str = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        let mut persistence = state.persistence.lock().await;
        let ctx: SessionContext = AuthenticationService::validate_session(&mut persistence, token)
            .map_err(|e| {
                warn!(error = %e, "Session validation failed");
                SessionError::InvalidSession(e.to_string())
            })?;
        drop(persistence);

        debug!(
            user_id = %ctx.user_id(),
            role = %ctx.role(),
            "Session validated"
        );

        Ok(Self(ctx, token.to_string()))
    }
}

/// Session extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
    /// Session validation failed.
    InvalidSession(String),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: String = match self {
            Self::MissingAuthorizationHeader => String::from("Missing Authorization header"),
            Self::InvalidAuthorizationHeader => String::from(
                "Invalid Authorization header format. Expected: 'Bearer <token>'",
            ),
            Self::InvalidSession(reason) => reason,
        };

        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: message,
            success: false,
        });
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}
