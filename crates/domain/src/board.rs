// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Views over booking requests for the two sides of the marketplace.

use crate::booking::{BookingRequest, BookingStatus};
use crate::event::Event;
use serde::{Deserialize, Serialize};

/// Name shown for a request whose DJ profile no longer exists.
pub const UNKNOWN_DJ: &str = "Unknown DJ";

/// A request together with the event it is for, if that event still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub request: BookingRequest,
    pub event: Option<Event>,
}

/// A DJ's open and confirmed requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DjBoard {
    /// Awaiting an answer, soonest event first.
    pub pending: Vec<BoardEntry>,
    /// Accepted, soonest event first.
    pub upcoming: Vec<BoardEntry>,
}

/// Splits a DJ's requests into pending and upcoming lists.
///
/// Declined requests are dropped. Entries whose event is missing sort first;
/// ties keep their input order.
#[must_use]
pub fn build_dj_board(entries: Vec<BoardEntry>) -> DjBoard {
    let mut board: DjBoard = DjBoard::default();
    for entry in entries {
        match entry.request.status {
            BookingStatus::Pending => board.pending.push(entry),
            BookingStatus::Booked => board.upcoming.push(entry),
            BookingStatus::Declined => {}
        }
    }
    board
        .pending
        .sort_by_key(|e| e.event.as_ref().map(|ev| ev.date));
    board
        .upcoming
        .sort_by_key(|e| e.event.as_ref().map(|ev| ev.date));
    board
}

/// A request on a promoter's event board, labelled with the DJ's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBoardEntry {
    pub request: BookingRequest,
    pub dj_name: String,
}

/// Orders an event's requests Booked, then Pending, then Declined.
pub fn sort_event_board(entries: &mut [EventBoardEntry]) {
    entries.sort_by_key(|e| e.request.status.board_rank());
}
