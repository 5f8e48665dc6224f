// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization services.

use spinbook::SessionContext;
use spinbook_domain::{Role, UserId};
use spinbook_persistence::{
    AccountData, Persistence, PersistenceError, SessionData, format_timestamp,
};
use time::format_description::well_known::Iso8601;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info, warn};

use crate::error::AuthError;

/// Authorization service for role-based access control.
///
/// Workflows check roles again on their own; these checks reject a request
/// before any store call is made.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks that the signed-in account is a DJ.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The session context
    /// * `action` - The attempted action, used in the error
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for promoter accounts.
    pub fn authorize_dj(ctx: &SessionContext, action: &str) -> Result<(), AuthError> {
        Self::require(ctx, Role::Dj, action)
    }

    /// Checks that the signed-in account is a promoter.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The session context
    /// * `action` - The attempted action, used in the error
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Unauthorized` for DJ accounts.
    pub fn authorize_promoter(ctx: &SessionContext, action: &str) -> Result<(), AuthError> {
        Self::require(ctx, Role::Promoter, action)
    }

    fn require(ctx: &SessionContext, role: Role, action: &str) -> Result<(), AuthError> {
        if ctx.role() == role {
            Ok(())
        } else {
            Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: role.to_string(),
            })
        }
    }
}

/// Session-based authentication.
pub struct AuthenticationService;

impl AuthenticationService {
    /// Default session expiration duration (30 days).
    const DEFAULT_SESSION_EXPIRATION: Duration = Duration::days(30);

    /// Verifies an email and password and opens a session.
    ///
    /// Unknown emails and wrong passwords fail with the same reason.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `email` - The sign-in email, any case
    /// * `password` - The plain-text password
    ///
    /// # Returns
    ///
    /// A tuple of (`session_token`, `session_context`, `expires_at`)
    ///
    /// # Errors
    ///
    /// Returns an error if the credentials do not match or the session
    /// cannot be stored.
    pub fn login(
        persistence: &mut Persistence,
        email: &str,
        password: &str,
    ) -> Result<(String, SessionContext, String), AuthError> {
        let account: AccountData = persistence
            .get_account_by_email(email)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| {
                warn!(email, "Sign-in for unknown email");
                Self::invalid_credentials()
            })?;

        let matches: bool = Persistence::verify_password(&account, password)
            .map_err(Self::map_persistence_error)?;
        if !matches {
            warn!(account_id = account.account_id, "Sign-in with wrong password");
            return Err(Self::invalid_credentials());
        }

        let ctx: SessionContext = Self::context_for(&account)?;
        let (session_token, expires_at) = Self::open_session(persistence, ctx.user_id())?;

        persistence
            .update_last_login(ctx.user_id())
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to update last login: {e}"),
            })?;

        info!(account_id = account.account_id, role = %ctx.role(), "Signed in");
        Ok((session_token, ctx, expires_at))
    }

    /// Validates a session token and returns the session context.
    ///
    /// An expired session is deleted as it is rejected.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to validate
    ///
    /// # Errors
    ///
    /// Returns an error if the session is unknown or expired, or its
    /// account no longer exists.
    pub fn validate_session(
        persistence: &mut Persistence,
        session_token: &str,
    ) -> Result<SessionContext, AuthError> {
        let session: SessionData = persistence
            .get_session_by_token(session_token)
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Invalid session token"),
            })?;

        let expires_at: OffsetDateTime =
            OffsetDateTime::parse(&session.expires_at, &Iso8601::DEFAULT).map_err(|e| {
                AuthError::AuthenticationFailed {
                    reason: format!("Failed to parse session expiration: {e}"),
                }
            })?;

        if OffsetDateTime::now_utc() > expires_at {
            warn!(session_id = session.session_id, "Rejected expired session");
            persistence
                .delete_session(session_token)
                .map_err(Self::map_persistence_error)?;
            return Err(AuthError::AuthenticationFailed {
                reason: String::from("Session expired"),
            });
        }

        let account: AccountData = persistence
            .get_account_by_id(UserId::new(session.account_id))
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| AuthError::AuthenticationFailed {
                reason: String::from("Account not found"),
            })?;

        let ctx: SessionContext = Self::context_for(&account)?;

        persistence
            .update_session_activity(session.session_id)
            .map_err(Self::map_persistence_error)?;

        debug!(account_id = account.account_id, "Session validated");
        Ok(ctx)
    }

    /// Logs out by deleting the session. Unknown tokens are not an error.
    ///
    /// # Arguments
    ///
    /// * `persistence` - The persistence layer
    /// * `session_token` - The session token to delete
    ///
    /// # Errors
    ///
    /// Returns an error if the logout fails.
    pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), AuthError> {
        persistence
            .delete_session(session_token)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to delete session: {e}"),
            })?;

        Ok(())
    }

    /// Creates a session for an account and returns its token and expiry.
    /// Sessions of any account that have already expired are removed first.
    ///
    /// # Errors
    ///
    /// Returns an error if the expiry cannot be formatted or the session
    /// cannot be stored.
    pub fn open_session(
        persistence: &mut Persistence,
        account_id: UserId,
    ) -> Result<(String, String), AuthError> {
        persistence
            .delete_expired_sessions()
            .map_err(Self::map_persistence_error)?;

        let session_token: String = Self::generate_session_token();
        let expires_at: String =
            format_timestamp(OffsetDateTime::now_utc() + Self::DEFAULT_SESSION_EXPIRATION)
                .map_err(Self::map_persistence_error)?;

        persistence
            .create_session(&session_token, account_id, &expires_at)
            .map_err(|e| AuthError::AuthenticationFailed {
                reason: format!("Failed to create session: {e}"),
            })?;

        Ok((session_token, expires_at))
    }

    fn context_for(account: &AccountData) -> Result<SessionContext, AuthError> {
        let role: Role =
            Role::parse(&account.role).map_err(|_| AuthError::AuthenticationFailed {
                reason: format!("Invalid role: {}", account.role),
            })?;
        Ok(SessionContext::new(
            UserId::new(account.account_id),
            role,
            account.email.clone(),
        ))
    }

    fn invalid_credentials() -> AuthError {
        AuthError::AuthenticationFailed {
            reason: String::from("Invalid email or password"),
        }
    }

    fn generate_session_token() -> String {
        let timestamp: i128 = OffsetDateTime::now_utc().unix_timestamp_nanos();
        format!(
            "session_{timestamp}_{:016x}{:016x}",
            rand::random::<u64>(),
            rand::random::<u64>()
        )
    }

    fn map_persistence_error(err: PersistenceError) -> AuthError {
        AuthError::AuthenticationFailed {
            reason: format!("Database error: {err}"),
        }
    }
}
