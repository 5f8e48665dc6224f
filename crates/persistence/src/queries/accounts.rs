// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::{AccountData, SessionData};
use crate::diesel_schema::{accounts, sessions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for account rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = accounts)]
struct AccountRow {
    account_id: i64,
    email: String,
    password_hash: String,
    role: String,
    created_at: String,
    last_login_at: Option<String>,
}

impl From<AccountRow> for AccountData {
    fn from(row: AccountRow) -> Self {
        Self {
            account_id: row.account_id,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    account_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

/// Retrieves an account by email.
///
/// The email is lowercased before lookup, matching how it is stored.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if no account uses the email.
pub fn get_account_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> Result<Option<AccountData>, PersistenceError> {
    let normalized: String = email.trim().to_lowercase();
    debug!(email = %normalized, "Looking up account by email");

    Ok(accounts::table
        .filter(accounts::email.eq(&normalized))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?
        .map(AccountData::from))
}

/// Retrieves an account by ID.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the account is not found.
pub fn get_account_by_id(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<AccountData>, PersistenceError> {
    debug!(account_id, "Looking up account by ID");

    Ok(accounts::table
        .filter(accounts::account_id.eq(account_id))
        .select(AccountRow::as_select())
        .first(conn)
        .optional()?
        .map(AccountData::from))
}

/// Retrieves a session by token.
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the token is unknown.
pub fn get_session_by_token(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    debug!("Looking up session by token");

    let row: Option<SessionRow> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn)
        .optional()?;

    Ok(row.map(|row| SessionData {
        session_id: row.session_id,
        session_token: row.session_token,
        account_id: row.account_id,
        created_at: row.created_at,
        last_activity_at: row.last_activity_at,
        expires_at: row.expires_at,
    }))
}

/// Checks a plain-text password against a stored bcrypt hash.
///
/// # Errors
///
/// Returns an error if the hash cannot be read.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
