// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::password_policy::PasswordPolicyError;
use spinbook::{CoreError, StoreError};
use spinbook_domain::DomainError;
use spinbook_persistence::PersistenceError;
use tracing::error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
/// The server maps each variant to one HTTP status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Authentication failed.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// The signed-in account may not perform this action.
    Forbidden {
        /// The action that was attempted.
        action: String,
        /// Why it was refused.
        reason: String,
    },
    /// A marketplace rule was violated, or the write conflicts with
    /// existing data.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
    /// Password policy violation.
    PasswordPolicyViolation {
        /// A human-readable description of the policy violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::Forbidden { action, reason } => {
                write!(f, "Not permitted to {action}: {reason}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
            Self::PasswordPolicyViolation { message } => {
                write!(f, "Password policy violation: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Forbidden {
                action,
                reason: format!("requires the {required_role} role"),
            },
        }
    }
}

impl From<PasswordPolicyError> for ApiError {
    fn from(err: PasswordPolicyError) -> Self {
        Self::PasswordPolicyViolation {
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::NotFound { resource, id } => Self::ResourceNotFound {
                resource_type: resource,
                message: format!("{id} does not exist"),
            },
            PersistenceError::Conflict(message) => Self::DomainRuleViolation {
                rule: String::from("unique_record"),
                message,
            },
            other => {
                error!(error = %other, "Persistence error");
                Self::Internal {
                    message: other.to_string(),
                }
            }
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidDate { value, reason } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{value}' is not a valid date: {reason}"),
        },
        DomainError::InvalidWeekday(day) => ApiError::InvalidInput {
            field: String::from("day"),
            message: format!("'{day}' is not a day of the week"),
        },
        DomainError::InvalidCity(city) => ApiError::InvalidInput {
            field: String::from("cities"),
            message: format!("'{city}' must be written as \"City, State\""),
        },
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg,
        },
        DomainError::MissingCity => ApiError::InvalidInput {
            field: String::from("cities"),
            message: String::from("At least one city is required"),
        },
        DomainError::InvalidUrl { field, value } => ApiError::InvalidInput {
            message: format!("'{value}' is not a valid URL"),
            field,
        },
        DomainError::InvalidPhone(phone) => ApiError::InvalidInput {
            field: String::from("phone"),
            message: format!("'{phone}' is not a valid phone number"),
        },
        DomainError::InvalidEmail(email) => ApiError::InvalidInput {
            field: String::from("email"),
            message: format!("'{email}' is not a valid email address"),
        },
        DomainError::InvalidRole(role) => ApiError::InvalidInput {
            field: String::from("role"),
            message: format!("'{role}' is not a role. Must be 'dj' or 'promoter'"),
        },
        DomainError::InvalidMediaKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!(
                "'{kind}' is not a media kind. Must be 'profile_image', 'press_kit' or 'logo'"
            ),
        },
        DomainError::InvalidBookingStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a booking status"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("booking_status_transition"),
                message: format!("Cannot move a {from} request to {to}: {reason}"),
            }
        }
        DomainError::FieldNotApplicable { field, role } => ApiError::InvalidInput {
            message: format!("Not part of a {role} profile"),
            field,
        },
        DomainError::EventDateImmutable => ApiError::DomainRuleViolation {
            rule: String::from("event_date_immutable"),
            message: String::from("The date of an event cannot be changed"),
        },
        DomainError::EmptyUpload => ApiError::InvalidInput {
            field: String::from("file"),
            message: String::from("The uploaded file is empty"),
        },
        DomainError::UnsupportedContentType { kind, content_type } => ApiError::InvalidInput {
            field: String::from("content_type"),
            message: format!("Files of type '{content_type}' cannot be uploaded as {kind}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// A partial write is reported as an internal error. The status write it
/// carries has already been committed.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_error) => translate_domain_error(domain_error),
        CoreError::NotFound { resource, id }
        | CoreError::Store(StoreError::NotFound { resource, id }) => ApiError::ResourceNotFound {
            message: format!("{resource} {id} does not exist"),
            resource_type: resource,
        },
        CoreError::Forbidden { action, reason } => ApiError::Forbidden { action, reason },
        CoreError::DuplicateRequest { event_id, dj_id } => ApiError::DomainRuleViolation {
            rule: String::from("unique_active_request"),
            message: format!(
                "DJ {dj_id} already has a pending or booked request for event {event_id}"
            ),
        },
        CoreError::Store(StoreError::Conflict(message)) => ApiError::DomainRuleViolation {
            rule: String::from("unique_record"),
            message,
        },
        CoreError::Store(store_error) => ApiError::Internal {
            message: store_error.to_string(),
        },
        partial @ CoreError::PartialWrite { .. } => ApiError::Internal {
            message: partial.to_string(),
        },
    }
}
