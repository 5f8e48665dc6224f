// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Account and session mutations.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use spinbook_domain::{Profile, Role, UserId};
use tracing::{debug, info};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::diesel_schema::{accounts, profiles, sessions};
use crate::error::PersistenceError;

/// Creates an account and its empty profile in one transaction.
///
/// The email is stored lowercased so lookups are case-insensitive.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `email` - The sign-in email
/// * `password` - The plain-text password (will be hashed)
/// * `role` - Which side of the marketplace the account is on
/// * `cost` - The bcrypt work factor
///
/// # Errors
///
/// Returns `PersistenceError::Conflict` if the email is already registered,
/// or another error if hashing or a write fails.
pub fn create_account(
    conn: &mut SqliteConnection,
    email: &str,
    password: &str,
    role: Role,
    cost: u32,
) -> Result<UserId, PersistenceError> {
    let normalized: String = email.trim().to_lowercase();
    info!(email = %normalized, %role, "Creating account");

    let password_hash: String = bcrypt::hash(password, cost)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let account_id: i64 = conn.transaction::<i64, PersistenceError, _>(|conn| {
        diesel::insert_into(accounts::table)
            .values((
                accounts::email.eq(&normalized),
                accounts::password_hash.eq(&password_hash),
                accounts::role.eq(role.as_str()),
            ))
            .execute(conn)
            .map_err(|e| match PersistenceError::from(e) {
                PersistenceError::Conflict(_) => {
                    PersistenceError::Conflict(format!("Email {normalized} is already registered"))
                }
                other => other,
            })?;

        let account_id: i64 = get_last_insert_rowid(conn)?;
        let profile: Profile = Profile::empty(UserId::new(account_id), &normalized, role);

        diesel::insert_into(profiles::table)
            .values((
                profiles::account_id.eq(account_id),
                profiles::role.eq(role.as_str()),
                profiles::document_json.eq(serde_json::to_string(&profile)?),
            ))
            .execute(conn)?;

        Ok(account_id)
    })?;

    info!(account_id, "Account created");
    Ok(UserId::new(account_id))
}

/// Records a successful sign-in.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<(), PersistenceError> {
    debug!(account_id, "Updating last_login_at");

    diesel::update(accounts::table)
        .filter(accounts::account_id.eq(account_id))
        .set(accounts::last_login_at.eq(sql::<Nullable<Text>>("CURRENT_TIMESTAMP")))
        .execute(conn)?;

    Ok(())
}

/// Creates a session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque token handed to the client
/// * `account_id` - The signed-in account
/// * `expires_at` - ISO 8601 expiry, UTC
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut SqliteConnection,
    session_token: &str,
    account_id: i64,
    expires_at: &str,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::account_id.eq(account_id),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    let session_id: i64 = get_last_insert_rowid(conn)?;
    debug!(session_id, account_id, expires_at, "Session created");
    Ok(session_id)
}

/// Bumps the last activity timestamp of a session.
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(
    conn: &mut SqliteConnection,
    session_id: i64,
) -> Result<(), PersistenceError> {
    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(sessions::last_activity_at.eq(sql::<Text>("CURRENT_TIMESTAMP")))
        .execute(conn)?;
    Ok(())
}

/// Deletes a session by token. Unknown tokens are ignored.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(
    conn: &mut SqliteConnection,
    session_token: &str,
) -> Result<(), PersistenceError> {
    let rows: usize = diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;
    debug!(rows, "Deleted session");
    Ok(())
}

/// Deletes every session whose expiry is earlier than `now`.
///
/// Both sides are ISO 8601 UTC strings in the same format, so text order
/// is time order.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(
    conn: &mut SqliteConnection,
    now: &str,
) -> Result<usize, PersistenceError> {
    let rows: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.lt(now))
        .execute(conn)?;

    debug!(rows, "Deleted expired sessions");
    Ok(rows)
}
