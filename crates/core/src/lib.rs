// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod availability;
mod booking;
mod command;
mod discovery;
mod error;
mod events;
mod media;
mod profile;
mod session;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::{Outcome, apply};
pub use availability::{AvailabilityChange, AvailabilityEdit, edit_availability};
pub use booking::{
    dj_board, event_board, reconcile_booked_dates, request_booking, respond_to_booking,
    sent_requests,
};
pub use command::Command;
pub use discovery::{DiscoveryQuery, search_candidates};
pub use error::CoreError;
pub use events::{EventDraft, create_event, get_event, list_my_events, update_event};
pub use media::upload_media;
pub use profile::{get_own_profile, get_profile, update_profile};
pub use session::SessionContext;
pub use store::{BookingFilter, MarketplaceStore, StoreError};
