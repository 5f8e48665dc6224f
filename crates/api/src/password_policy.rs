// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sign-up password rules.

use thiserror::Error;

/// Why a sign-up password was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordPolicyError {
    /// The two password fields differ.
    #[error("The passwords entered do not match")]
    ConfirmationMismatch,

    /// Fewer characters than the policy requires.
    #[error("Password has {actual} characters; at least {required} are required")]
    TooShort { required: usize, actual: usize },

    /// The password is the account email or its local part.
    #[error("Password must not be the account email or its name part")]
    GuessableFromEmail,
}

/// Rules applied to a new account's password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self { min_length: 6 }
    }
}

impl PasswordPolicy {
    /// Checks a sign-up password.
    ///
    /// The confirmation is compared first, so a typo is reported as a
    /// mismatch rather than as a weak password.
    ///
    /// # Arguments
    ///
    /// * `password` - The chosen password
    /// * `confirmation` - The password typed a second time
    /// * `email` - The normalized account email
    ///
    /// # Errors
    ///
    /// Returns the first rule the password breaks.
    pub fn check(
        &self,
        password: &str,
        confirmation: &str,
        email: &str,
    ) -> Result<(), PasswordPolicyError> {
        if password != confirmation {
            return Err(PasswordPolicyError::ConfirmationMismatch);
        }

        let actual: usize = password.chars().count();
        if actual < self.min_length {
            return Err(PasswordPolicyError::TooShort {
                required: self.min_length,
                actual,
            });
        }

        let lowered: String = password.to_lowercase();
        let local_part: &str = email.split('@').next().unwrap_or(email);
        if lowered == email || lowered == local_part {
            return Err(PasswordPolicyError::GuessableFromEmail);
        }

        Ok(())
    }
}
