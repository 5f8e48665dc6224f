// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Text;
use diesel::upsert::excluded;
use num_traits::ToPrimitive;
use tracing::info;

use crate::diesel_schema::media_files;
use crate::error::PersistenceError;

/// Stores a file for `(owner_id, kind)`, replacing any earlier upload.
///
/// # Errors
///
/// Returns an error if the payload size does not fit a column or the
/// write fails.
pub fn upsert_media(
    conn: &mut SqliteConnection,
    owner_id: i64,
    kind: &str,
    content_type: &str,
    bytes: &[u8],
) -> Result<(), PersistenceError> {
    let size_bytes: i64 = bytes
        .len()
        .to_i64()
        .ok_or_else(|| PersistenceError::Other(String::from("Upload too large")))?;

    diesel::insert_into(media_files::table)
        .values((
            media_files::owner_id.eq(owner_id),
            media_files::kind.eq(kind),
            media_files::content_type.eq(content_type),
            media_files::size_bytes.eq(size_bytes),
            media_files::bytes.eq(bytes),
        ))
        .on_conflict((media_files::owner_id, media_files::kind))
        .do_update()
        .set((
            media_files::content_type.eq(excluded(media_files::content_type)),
            media_files::size_bytes.eq(excluded(media_files::size_bytes)),
            media_files::bytes.eq(excluded(media_files::bytes)),
            media_files::uploaded_at.eq(sql::<Text>("CURRENT_TIMESTAMP")),
        ))
        .execute(conn)?;

    info!(owner_id, kind, size_bytes, content_type, "Media stored");
    Ok(())
}
