// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! DJ availability: a recurring weekly pattern plus per-date overrides.
//!
//! Resolution order for a date is fixed:
//! 1. an override for that exact date, if present;
//! 2. otherwise the weekly value for the date's weekday;
//! 3. otherwise unavailable.

use crate::calendar::{CalendarDate, DayOfWeek};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A DJ's stated availability.
///
/// A weekly entry of `false` and an absent entry resolve the same way. A
/// toggled day keeps its key, so a profile saved as `{"Monday": false}`
/// returns to exactly that after two toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Weekday name to available flag. Absent means unavailable.
    #[serde(default)]
    pub weekly_pattern: BTreeMap<DayOfWeek, bool>,
    /// Calendar date to available flag. Absent means no override.
    #[serde(default)]
    pub date_overrides: BTreeMap<CalendarDate, bool>,
}

impl AvailabilityRecord {
    /// Creates an empty record: unavailable every day, no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the weekly value for a weekday, `false` when absent.
    #[must_use]
    pub fn weekly(&self, day: DayOfWeek) -> bool {
        self.weekly_pattern.get(&day).copied().unwrap_or(false)
    }

    /// Returns the override for a date, if one exists.
    #[must_use]
    pub fn override_for(&self, date: CalendarDate) -> Option<bool> {
        self.date_overrides.get(&date).copied()
    }

    /// Resolves whether the DJ is available on `date`.
    #[must_use]
    pub fn resolve(&self, date: CalendarDate) -> bool {
        self.override_for(date)
            .unwrap_or_else(|| self.weekly(date.weekday()))
    }

    /// Flips the weekly value for `day` and returns the new value.
    pub fn toggle_weekday(&mut self, day: DayOfWeek) -> bool {
        let available: bool = !self.weekly(day);
        self.weekly_pattern.insert(day, available);
        available
    }

    /// Advances the override for `date` through its three states and returns
    /// the override left in place.
    ///
    /// - no override: set to the opposite of what the date currently resolves to
    /// - override `true`: becomes `false`
    /// - override `false`: removed
    pub fn toggle_date(&mut self, date: CalendarDate) -> Option<bool> {
        let next: Option<bool> = match self.override_for(date) {
            None => Some(!self.resolve(date)),
            Some(true) => Some(false),
            Some(false) => None,
        };
        match next {
            Some(value) => {
                self.date_overrides.insert(date, value);
            }
            None => {
                self.date_overrides.remove(&date);
            }
        }
        next
    }

    /// Marks `date` as unavailable, replacing any existing override.
    pub fn block_date(&mut self, date: CalendarDate) {
        self.date_overrides.insert(date, false);
    }
}

/// Resolves availability of `record` on `date`.
#[must_use]
pub fn resolve(record: &AvailabilityRecord, date: CalendarDate) -> bool {
    record.resolve(date)
}

/// Working copy of an availability record paired with the last value written
/// to the owning profile.
#[derive(Debug, Clone)]
pub struct AvailabilityEditor {
    current: AvailabilityRecord,
    last_synced: AvailabilityRecord,
}

impl AvailabilityEditor {
    /// Starts editing a record that is already persisted.
    #[must_use]
    pub fn new(persisted: AvailabilityRecord) -> Self {
        Self {
            current: persisted.clone(),
            last_synced: persisted,
        }
    }

    /// Returns the working record.
    #[must_use]
    pub const fn record(&self) -> &AvailabilityRecord {
        &self.current
    }

    /// Returns true when the working record differs from the last synced value.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.current != self.last_synced
    }

    /// Flips a weekly value on the working record.
    pub fn toggle_weekday(&mut self, day: DayOfWeek) -> bool {
        self.current.toggle_weekday(day)
    }

    /// Cycles a date override on the working record.
    pub fn toggle_date(&mut self, date: CalendarDate) -> Option<bool> {
        self.current.toggle_date(date)
    }

    /// Writes the working record through `write` when it differs from the last
    /// synced value.
    ///
    /// Returns `Ok(true)` if `write` was called and succeeded, `Ok(false)` if
    /// nothing changed. On success the working record becomes the new
    /// baseline.
    ///
    /// # Errors
    ///
    /// Returns whatever `write` returns; the baseline is left unchanged so a
    /// later call retries the same payload.
    pub fn sync_with<F, E>(&mut self, write: F) -> Result<bool, E>
    where
        F: FnOnce(&AvailabilityRecord) -> Result<(), E>,
    {
        if !self.is_dirty() {
            return Ok(false);
        }
        write(&self.current)?;
        self.last_synced = self.current.clone();
        Ok(true)
    }
}
