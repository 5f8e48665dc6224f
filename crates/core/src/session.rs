// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use spinbook_domain::{Role, UserId};

/// Identity of the signed-in account, passed to every workflow.
///
/// Acquired when a session token is validated; dropped at sign-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user_id: UserId,
    role: Role,
    email: String,
}

impl SessionContext {
    #[must_use]
    pub const fn new(user_id: UserId, role: Role, email: String) -> Self {
        Self {
            user_id,
            role,
            email,
        }
    }

    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Fails unless the account has `role`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Forbidden` naming `action`.
    pub fn require_role(&self, role: Role, action: &str) -> Result<(), CoreError> {
        if self.role == role {
            Ok(())
        } else {
            Err(CoreError::forbidden(
                action,
                &format!("requires the {role} role"),
            ))
        }
    }
}
