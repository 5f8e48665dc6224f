// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations for the persistence layer.
//!
//! ## Module Organization
//!
//! - `accounts`: Account creation, sign-in bookkeeping and sessions
//! - `profiles`: Partial merges into profile documents
//! - `events`: Event creation and edits
//! - `booking_requests`: Request creation and status writes
//! - `media`: Media uploads

pub mod accounts;
pub mod booking_requests;
pub mod events;
pub mod media;
pub mod profiles;
