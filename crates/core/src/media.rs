// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::session::SessionContext;
use crate::store::MarketplaceStore;
use spinbook_domain::{DomainError, MediaKind, ProfileUpdate};
use tracing::info;

/// Stores a file for the signed-in account and points the matching profile
/// field at it. Returns the public URL.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` for an empty upload, a kind that
/// does not belong to the account's role, or a content type the kind does
/// not accept. Otherwise returns a store error.
pub fn upload_media<S: MarketplaceStore>(
    store: &mut S,
    ctx: &SessionContext,
    kind: MediaKind,
    content_type: &str,
    bytes: &[u8],
) -> Result<String, CoreError> {
    if bytes.is_empty() {
        return Err(DomainError::EmptyUpload.into());
    }
    if kind.owner_role() != ctx.role() {
        return Err(DomainError::FieldNotApplicable {
            field: kind.as_str().to_string(),
            role: ctx.role().to_string(),
        }
        .into());
    }
    let content_type: String = kind.accept_content_type(content_type)?;

    let url: String = store.upload_file(ctx.user_id(), kind, &content_type, bytes)?;
    store.put_profile(ctx.user_id(), &ProfileUpdate::media(kind, url.clone()))?;
    info!(
        owner_id = %ctx.user_id(),
        %kind,
        %content_type,
        size = bytes.len(),
        "Media uploaded"
    );
    Ok(url)
}
