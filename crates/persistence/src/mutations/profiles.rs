// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use spinbook_domain::{Profile, ProfileUpdate};
use tracing::info;

use crate::diesel_schema::profiles;
use crate::error::PersistenceError;
use crate::queries::profiles::get_profile;

/// Merges `update` into the stored profile document.
///
/// The read, merge and write run in one transaction so concurrent writers
/// on the same database cannot interleave between them.
///
/// # Errors
///
/// Returns `PersistenceError::NotFound` if the account has no profile and
/// `PersistenceError::InvalidUpdate` if the update sets a field the
/// profile's role does not have.
pub fn put_profile(
    conn: &mut SqliteConnection,
    account_id: i64,
    update: &ProfileUpdate,
) -> Result<(), PersistenceError> {
    conn.immediate_transaction::<(), PersistenceError, _>(|conn| {
        let mut profile: Profile = get_profile(conn, account_id)?
            .ok_or_else(|| PersistenceError::not_found("Profile", account_id))?;

        profile
            .apply_update(update.clone())
            .map_err(|e| PersistenceError::InvalidUpdate(e.to_string()))?;

        diesel::update(profiles::table)
            .filter(profiles::account_id.eq(account_id))
            .set((
                profiles::document_json.eq(serde_json::to_string(&profile)?),
                profiles::updated_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
            ))
            .execute(conn)?;
        Ok(())
    })?;

    info!(
        account_id,
        availability = update.availability.is_some(),
        "Profile updated"
    );
    Ok(())
}
