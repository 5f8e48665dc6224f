// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::profile::load_candidate;
use crate::session::SessionContext;
use crate::store::MarketplaceStore;
use spinbook_domain::{
    AvailabilityEditor, AvailabilityRecord, CalendarDate, CandidateProfile, DayOfWeek,
    ProfileUpdate, Role,
};
use tracing::{debug, info};

/// One change a DJ makes in the availability editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityEdit {
    /// Flip the recurring value for a weekday.
    ToggleWeekday(DayOfWeek),
    /// Advance the override for one date.
    ToggleDate(CalendarDate),
}

/// Result of an availability edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityChange {
    /// The record after the edits.
    pub record: AvailabilityRecord,
    /// Whether the record was written to the profile.
    pub synced: bool,
}

/// Applies edits to the signed-in DJ's availability and writes the full
/// record back once, only if it ended up different from what was stored.
///
/// # Errors
///
/// Returns `CoreError::Forbidden` for non-DJ accounts, or a store error if
/// the read or the write fails.
pub fn edit_availability<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    edits: &[AvailabilityEdit],
) -> Result<AvailabilityChange, CoreError> {
    ctx.require_role(Role::Dj, "edit availability")?;
    let profile: CandidateProfile = load_candidate(store, ctx.user_id())?;

    let mut editor: AvailabilityEditor = AvailabilityEditor::new(profile.availability);
    for edit in edits {
        match *edit {
            AvailabilityEdit::ToggleWeekday(day) => {
                let available: bool = editor.toggle_weekday(day);
                debug!(%day, available, "Toggled weekday");
            }
            AvailabilityEdit::ToggleDate(date) => {
                let state: Option<bool> = editor.toggle_date(date);
                debug!(%date, ?state, "Toggled date override");
            }
        }
    }

    let user_id = ctx.user_id();
    let synced: bool = editor.sync_with(|record| {
        store.put_profile(user_id, &ProfileUpdate::availability(record.clone()))
    })?;
    if synced {
        info!(profile_id = %user_id, "Availability saved");
    } else {
        debug!(profile_id = %user_id, "Availability unchanged; skipping save");
    }

    Ok(AvailabilityChange {
        record: editor.record().clone(),
        synced,
    })
}
