// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Spinbook marketplace.
//!
//! This crate stores accounts, sessions, profile documents, events, booking
//! requests and uploaded media in `SQLite` through Diesel, and implements
//! [`MarketplaceStore`] so the workflows in `spinbook` can run against it.
//!
//! ## Storage Notes
//!
//! - Profiles are stored as JSON documents keyed by account ID. The `role`
//!   column is kept beside the document so the DJ list is a simple filter.
//! - A partial unique index allows one pending or booked request per event
//!   and DJ. Declined requests do not count.
//! - Media bytes live in the database and are served from
//!   `{public_base_url}/media/{kind}/{owner_id}`.
//!
//! ## Testing
//!
//! [`Persistence::new_in_memory`] gives every caller its own shared-cache
//! in-memory database, migrated and with foreign keys enforced.

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
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use spinbook::{BookingFilter, MarketplaceStore, StoreError};
use spinbook_domain::{
    BookingRequest, BookingRequestId, BookingStatus, CandidateProfile, Event, EventId,
    EventUpdate, MediaKind, NewBookingRequest, NewEvent, Profile, ProfileUpdate, Role, UserId,
};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::OffsetDateTime;
use time::format_description::well_known::Iso8601;

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use data_models::{AccountData, MediaData, SessionData};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID so tests
/// never share a database.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Base URL used for media links until one is configured.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://127.0.0.1:3000";

/// Formats a UTC instant the way session expiries are stored.
///
/// # Errors
///
/// Returns an error if the instant cannot be formatted.
pub fn format_timestamp(instant: OffsetDateTime) -> Result<String, PersistenceError> {
    instant
        .format(&Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}

/// `SQLite`-backed store for the marketplace.
pub struct Persistence {
    conn: SqliteConnection,
    public_base_url: String,
    password_cost: u32,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:memdb_spinbook_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            public_base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
            password_cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Creates a new persistence adapter with a file-based database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError(String::from("Invalid database path"))
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::configure_file_database(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self {
            conn,
            public_base_url: String::from(DEFAULT_PUBLIC_BASE_URL),
            password_cost: bcrypt::DEFAULT_COST,
        })
    }

    /// Sets the base URL media links are built from. A trailing `/` is dropped.
    #[must_use]
    pub fn with_public_base_url(mut self, base_url: &str) -> Self {
        self.public_base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Sets the bcrypt work factor for new passwords. Tests lower it to the
    /// minimum of 4.
    #[must_use]
    pub const fn with_password_cost(mut self, cost: u32) -> Self {
        self.password_cost = cost;
        self
    }

    /// Returns the base URL media links are built from.
    #[must_use]
    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    /// Returns the public URL of an owner's media file.
    #[must_use]
    pub fn media_url(&self, owner: UserId, kind: MediaKind) -> String {
        format!("{}/media/{kind}/{owner}", self.public_base_url)
    }

    // ========================================================================
    // Accounts and sessions
    // ========================================================================

    /// Creates an account with an empty profile for its role.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Conflict` if the email is taken.
    pub fn create_account(
        &mut self,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<UserId, PersistenceError> {
        mutations::accounts::create_account(
            &mut self.conn,
            email,
            password,
            role,
            self.password_cost,
        )
    }

    /// Retrieves an account by email, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_account_by_email(
        &mut self,
        email: &str,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_email(&mut self.conn, email)
    }

    /// Retrieves an account by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_account_by_id(
        &mut self,
        account_id: UserId,
    ) -> Result<Option<AccountData>, PersistenceError> {
        queries::accounts::get_account_by_id(&mut self.conn, account_id.value())
    }

    /// Checks a password against an account's stored hash.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored hash is unreadable.
    pub fn verify_password(
        account: &AccountData,
        password: &str,
    ) -> Result<bool, PersistenceError> {
        queries::accounts::verify_password(password, &account.password_hash)
    }

    /// Records a successful sign-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_last_login(&mut self, account_id: UserId) -> Result<(), PersistenceError> {
        mutations::accounts::update_last_login(&mut self.conn, account_id.value())
    }

    /// Creates a session for an account.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_session(
        &mut self,
        session_token: &str,
        account_id: UserId,
        expires_at: &str,
    ) -> Result<i64, PersistenceError> {
        mutations::accounts::create_session(
            &mut self.conn,
            session_token,
            account_id.value(),
            expires_at,
        )
    }

    /// Retrieves a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_session_by_token(
        &mut self,
        session_token: &str,
    ) -> Result<Option<SessionData>, PersistenceError> {
        queries::accounts::get_session_by_token(&mut self.conn, session_token)
    }

    /// Bumps a session's last activity timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_session_activity(&mut self, session_id: i64) -> Result<(), PersistenceError> {
        mutations::accounts::update_session_activity(&mut self.conn, session_id)
    }

    /// Deletes a session by token.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_session(&mut self, session_token: &str) -> Result<(), PersistenceError> {
        mutations::accounts::delete_session(&mut self.conn, session_token)
    }

    /// Deletes every session that has expired.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_expired_sessions(&mut self) -> Result<usize, PersistenceError> {
        let now: String = format_timestamp(OffsetDateTime::now_utc())?;
        mutations::accounts::delete_expired_sessions(&mut self.conn, &now)
    }

    // ========================================================================
    // Media
    // ========================================================================

    /// Retrieves an uploaded media file.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_media(
        &mut self,
        owner: UserId,
        kind: MediaKind,
    ) -> Result<Option<MediaData>, PersistenceError> {
        queries::media::get_media(&mut self.conn, owner.value(), kind.as_str())
    }
}

impl MarketplaceStore for Persistence {
    fn get_profile(&mut self, id: UserId) -> Result<Option<Profile>, StoreError> {
        Ok(queries::profiles::get_profile(&mut self.conn, id.value())?)
    }

    fn put_profile(&mut self, id: UserId, update: &ProfileUpdate) -> Result<(), StoreError> {
        Ok(mutations::profiles::put_profile(
            &mut self.conn,
            id.value(),
            update,
        )?)
    }

    fn list_candidates(&mut self) -> Result<Vec<CandidateProfile>, StoreError> {
        Ok(queries::profiles::list_candidates(&mut self.conn)?)
    }

    fn list_booking_requests(
        &mut self,
        filter: BookingFilter,
    ) -> Result<Vec<BookingRequest>, StoreError> {
        Ok(queries::booking_requests::list_booking_requests(
            &mut self.conn,
            filter,
        )?)
    }

    fn get_booking_request(
        &mut self,
        id: BookingRequestId,
    ) -> Result<Option<BookingRequest>, StoreError> {
        Ok(queries::booking_requests::get_booking_request(
            &mut self.conn,
            id.value(),
        )?)
    }

    fn create_booking_request(
        &mut self,
        request: &NewBookingRequest,
    ) -> Result<BookingRequestId, StoreError> {
        Ok(mutations::booking_requests::create_booking_request(
            &mut self.conn,
            request,
        )?)
    }

    fn update_booking_request_status(
        &mut self,
        id: BookingRequestId,
        status: BookingStatus,
    ) -> Result<(), StoreError> {
        Ok(mutations::booking_requests::update_booking_request_status(
            &mut self.conn,
            id.value(),
            status,
        )?)
    }

    fn create_event(&mut self, event: &NewEvent) -> Result<EventId, StoreError> {
        Ok(mutations::events::create_event(&mut self.conn, event)?)
    }

    fn update_event(&mut self, id: EventId, update: &EventUpdate) -> Result<(), StoreError> {
        Ok(mutations::events::update_event(
            &mut self.conn,
            id.value(),
            update,
        )?)
    }

    fn get_event(&mut self, id: EventId) -> Result<Option<Event>, StoreError> {
        Ok(queries::events::get_event(&mut self.conn, id.value())?)
    }

    fn list_events_for_promoter(&mut self, promoter_id: UserId) -> Result<Vec<Event>, StoreError> {
        Ok(queries::events::list_events_for_promoter(
            &mut self.conn,
            promoter_id.value(),
        )?)
    }

    fn upload_file(
        &mut self,
        owner: UserId,
        kind: MediaKind,
        content_type: &str,
        bytes: &[u8],
    ) -> Result<String, StoreError> {
        mutations::media::upsert_media(
            &mut self.conn,
            owner.value(),
            kind.as_str(),
            content_type,
            bytes,
        )?;
        Ok(self.media_url(owner, kind))
    }
}
