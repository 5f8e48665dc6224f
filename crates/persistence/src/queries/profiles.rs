// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Profile document queries.

use diesel::SqliteConnection;
use diesel::prelude::*;
use spinbook_domain::{CandidateProfile, Profile, Role, UserId};
use tracing::debug;

use crate::diesel_schema::profiles;
use crate::error::PersistenceError;

/// Parses a stored profile document and checks it belongs to `account_id`.
pub(crate) fn decode_profile(account_id: i64, document: &str) -> Result<Profile, PersistenceError> {
    let profile: Profile = serde_json::from_str(document).map_err(|e| {
        PersistenceError::CorruptRecord(format!("Profile {account_id} document is invalid: {e}"))
    })?;
    if profile.id() != UserId::new(account_id) {
        return Err(PersistenceError::CorruptRecord(format!(
            "Profile {account_id} document carries id {}",
            profile.id()
        )));
    }
    Ok(profile)
}

/// Retrieves the profile document for an account.
///
/// # Errors
///
/// Returns an error if the query fails or the stored document is invalid.
/// Returns `Ok(None)` if the account has no profile.
pub fn get_profile(
    conn: &mut SqliteConnection,
    account_id: i64,
) -> Result<Option<Profile>, PersistenceError> {
    debug!(account_id, "Loading profile");

    let document: Option<String> = profiles::table
        .filter(profiles::account_id.eq(account_id))
        .select(profiles::document_json)
        .first(conn)
        .optional()?;

    document
        .map(|doc| decode_profile(account_id, &doc))
        .transpose()
}

/// Lists every DJ profile ordered by account ID.
///
/// # Errors
///
/// Returns an error if the query fails or any stored document is invalid.
pub fn list_candidates(
    conn: &mut SqliteConnection,
) -> Result<Vec<CandidateProfile>, PersistenceError> {
    let rows: Vec<(i64, String)> = profiles::table
        .filter(profiles::role.eq(Role::Dj.as_str()))
        .order(profiles::account_id.asc())
        .select((profiles::account_id, profiles::document_json))
        .load(conn)?;

    debug!(count = rows.len(), "Loaded candidate profiles");

    rows.into_iter()
        .map(|(account_id, doc)| match decode_profile(account_id, &doc)? {
            Profile::Dj(candidate) => Ok(candidate),
            Profile::Promoter(_) => Err(PersistenceError::CorruptRecord(format!(
                "Profile {account_id} is indexed as a DJ but stores a promoter"
            ))),
        })
        .collect()
}
