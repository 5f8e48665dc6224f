// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;

use crate::data_models::MediaData;
use crate::diesel_schema::media_files;
use crate::error::PersistenceError;

#[derive(Queryable, Selectable)]
#[diesel(table_name = media_files)]
struct MediaRow {
    owner_id: i64,
    kind: String,
    content_type: String,
    bytes: Vec<u8>,
    uploaded_at: String,
}

/// Retrieves the file an account uploaded for `kind`.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if nothing was uploaded.
pub fn get_media(
    conn: &mut SqliteConnection,
    owner_id: i64,
    kind: &str,
) -> Result<Option<MediaData>, PersistenceError> {
    debug!(owner_id, kind, "Loading media file");

    Ok(media_files::table
        .filter(media_files::owner_id.eq(owner_id))
        .filter(media_files::kind.eq(kind))
        .select(MediaRow::as_select())
        .first(conn)
        .optional()?
        .map(|row| MediaData {
            owner_id: row.owner_id,
            kind: row.kind,
            content_type: row.content_type,
            bytes: row.bytes,
            uploaded_at: row.uploaded_at,
        }))
}
