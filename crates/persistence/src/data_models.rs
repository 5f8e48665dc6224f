// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// A stored account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountData {
    pub account_id: i64,
    pub email: String,
    pub password_hash: String,
    /// `dj` or `promoter`.
    pub role: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// A stored sign-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub account_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    /// ISO 8601, UTC.
    pub expires_at: String,
}

/// An uploaded media file with its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaData {
    pub owner_id: i64,
    pub kind: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub uploaded_at: String,
}
