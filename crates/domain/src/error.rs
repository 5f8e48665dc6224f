// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A calendar date string is not a valid `YYYY-MM-DD` date.
    InvalidDate {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// A weekday name is not one of the seven canonical English names.
    InvalidWeekday(String),
    /// A city is not in the canonical `"City, State"` form.
    InvalidCity(String),
    /// A display or organisation name is missing.
    InvalidName(String),
    /// At least one serviceable city is required.
    MissingCity,
    /// A link is not a well-formed URL.
    InvalidUrl {
        /// The field holding the link (e.g. `instagram`, `website`).
        field: String,
        /// The rejected value.
        value: String,
    },
    /// A phone number contains disallowed characters or is too short.
    InvalidPhone(String),
    /// An email address is empty or malformed.
    InvalidEmail(String),
    /// A role string is not recognised.
    InvalidRole(String),
    /// A media kind string is not recognised.
    InvalidMediaKind(String),
    /// A booking status string is not recognised.
    InvalidBookingStatus {
        /// The rejected status string.
        status: String,
    },
    /// A booking status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// A profile update carried fields that do not apply to the profile's role.
    FieldNotApplicable {
        /// The offending field.
        field: String,
        /// The role of the profile being updated.
        role: String,
    },
    /// An event date cannot be changed after creation.
    EventDateImmutable,
    /// An uploaded file has no content.
    EmptyUpload,
    /// An upload's MIME type is not accepted for its media kind.
    UnsupportedContentType {
        /// The media kind being uploaded.
        kind: String,
        /// The declared content type.
        content_type: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate { value, reason } => {
                write!(f, "Invalid date '{value}': {reason}")
            }
            Self::InvalidWeekday(name) => write!(f, "Invalid weekday: {name}"),
            Self::InvalidCity(city) => {
                write!(f, "Invalid city '{city}': expected \"City, State\"")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::MissingCity => write!(f, "At least one city is required"),
            Self::InvalidUrl { field, value } => {
                write!(f, "Invalid URL format for {field}: '{value}'")
            }
            Self::InvalidPhone(phone) => write!(f, "Phone number looks invalid: '{phone}'"),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: '{email}'"),
            Self::InvalidRole(role) => write!(f, "Invalid role: {role}"),
            Self::InvalidMediaKind(kind) => write!(f, "Invalid media kind: {kind}"),
            Self::InvalidBookingStatus { status } => {
                write!(f, "Invalid booking status: {status}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Cannot transition booking request from {from} to {to}: {reason}"
                )
            }
            Self::FieldNotApplicable { field, role } => {
                write!(f, "Field '{field}' does not apply to a {role} profile")
            }
            Self::EventDateImmutable => {
                write!(f, "Event date cannot be changed after creation")
            }
            Self::EmptyUpload => write!(f, "Uploaded file is empty"),
            Self::UnsupportedContentType { kind, content_type } => {
                write!(f, "Content type '{content_type}' is not accepted for {kind}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
