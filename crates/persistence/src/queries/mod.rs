// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `accounts`: Accounts, sessions and password checks
//! - `profiles`: Profile documents and the DJ candidate list
//! - `events`: Events by ID and by promoter
//! - `booking_requests`: Booking requests by ID and by filter
//! - `media`: Uploaded media files

pub mod accounts;
pub mod booking_requests;
pub mod events;
pub mod media;
pub mod profiles;
