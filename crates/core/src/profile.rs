// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::session::SessionContext;
use crate::store::MarketplaceStore;
use spinbook_domain::{
    CandidateProfile, Profile, ProfileUpdate, UserId, normalize_profile_update,
    validate_profile_complete,
};
use tracing::{debug, info};

/// Loads any account's profile.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the profile does not exist.
pub fn get_profile<S: MarketplaceStore>(
    store: &mut S,
    _ctx: &SessionContext,
    id: UserId,
) -> Result<Profile, CoreError> {
    debug!(profile_id = %id, "Loading profile");
    store
        .get_profile(id)?
        .ok_or_else(|| CoreError::not_found("Profile", id))
}

/// Loads the signed-in account's own profile.
///
/// # Errors
///
/// Returns `CoreError::NotFound` if the profile does not exist.
pub fn get_own_profile<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
) -> Result<Profile, CoreError> {
    get_profile(store, ctx, ctx.user_id())
}

/// Loads a DJ profile, failing if the account is missing or not a DJ.
pub(crate) fn load_candidate<S: MarketplaceStore>(
    store: &mut S,
    id: UserId,
) -> Result<CandidateProfile, CoreError> {
    match store.get_profile(id)? {
        Some(Profile::Dj(candidate)) => Ok(candidate),
        Some(Profile::Promoter(_)) | None => Err(CoreError::not_found("DJ", id)),
    }
}

/// Edits the signed-in account's profile.
///
/// The update is normalised first, then merged into a copy of the stored
/// profile; the merged profile must still have a name and a city. Only the
/// normalised fields are written.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if a field is invalid or does not
/// apply to the account's role, or a store error if the write fails.
pub fn update_profile<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    update: ProfileUpdate,
) -> Result<Profile, CoreError> {
    let update: ProfileUpdate = normalize_profile_update(update)?;
    let mut merged: Profile = get_own_profile(store, ctx)?;
    merged.apply_update(update.clone())?;
    validate_profile_complete(&merged)?;

    store.put_profile(ctx.user_id(), &update)?;
    info!(profile_id = %ctx.user_id(), role = %ctx.role(), "Profile updated");
    Ok(merged)
}
