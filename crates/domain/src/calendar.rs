// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar-local dates and weekday names.
//!
//! A [`CalendarDate`] is a plain `(year, month, day)` triple built from the
//! literal `YYYY-MM-DD` text. It never passes through a timestamp, so there
//! is no timezone in which it can drift to the neighbouring day.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use time::{Date, Month, Weekday};

/// The seven canonical English weekday names, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl DayOfWeek {
    /// All weekdays in calendar-grid order (Sunday first).
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the canonical English name of the weekday.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Parses a canonical weekday name. Matching is exact.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == s)
            .ok_or_else(|| DomainError::InvalidWeekday(s.to_string()))
    }

    const fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => Self::Sunday,
            Weekday::Monday => Self::Monday,
            Weekday::Tuesday => Self::Tuesday,
            Weekday::Wednesday => Self::Wednesday,
            Weekday::Thursday => Self::Thursday,
            Weekday::Friday => Self::Friday,
            Weekday::Saturday => Self::Saturday,
        }
    }
}

impl FromStr for DayOfWeek {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date with no time-of-day and no timezone.
///
/// Serialized as its `YYYY-MM-DD` key, which is also the key used for
/// availability overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);

impl CalendarDate {
    /// Parses a strict `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the text is not exactly ten
    /// characters of the form `YYYY-MM-DD`, or if the triple is not a real
    /// calendar date (e.g. `2023-02-29`).
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid = |reason: &str| DomainError::InvalidDate {
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let bytes: &[u8] = value.as_bytes();
        let well_formed: bool = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| {
                if i == 4 || i == 7 {
                    *b == b'-'
                } else {
                    b.is_ascii_digit()
                }
            });
        if !well_formed {
            return Err(invalid("expected YYYY-MM-DD"));
        }

        let year: i32 = value[0..4]
            .parse()
            .map_err(|_| invalid("year is not numeric"))?;
        let month: u8 = value[5..7]
            .parse()
            .map_err(|_| invalid("month is not numeric"))?;
        let day: u8 = value[8..10]
            .parse()
            .map_err(|_| invalid("day is not numeric"))?;

        Self::from_ymd(year, month, day).map_err(|e| match e {
            DomainError::InvalidDate { reason, .. } => invalid(&reason),
            other => other,
        })
    }

    /// Builds a date from its calendar fields.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDate` if the fields do not name a real date.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DomainError> {
        let invalid = |reason: String| DomainError::InvalidDate {
            value: format!("{year:04}-{month:02}-{day:02}"),
            reason,
        };
        let month: Month = Month::try_from(month).map_err(|e| invalid(e.to_string()))?;
        let date: Date =
            Date::from_calendar_date(year, month, day).map_err(|e| invalid(e.to_string()))?;
        Ok(Self(date))
    }

    /// Wraps an existing `time::Date`.
    #[must_use]
    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    /// Returns the underlying `time::Date`.
    #[must_use]
    pub const fn date(&self) -> Date {
        self.0
    }

    /// Returns the weekday of this date in the proleptic Gregorian calendar.
    #[must_use]
    pub const fn weekday(&self) -> DayOfWeek {
        DayOfWeek::from_weekday(self.0.weekday())
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip_keeps_key() {
        let date: CalendarDate = CalendarDate::parse("2024-06-07").unwrap();
        assert_eq!(date.to_string(), "2024-06-07");
    }

    #[test]
    fn test_weekday_of_known_dates() {
        assert_eq!(
            CalendarDate::parse("2024-06-07").unwrap().weekday(),
            DayOfWeek::Friday
        );
        assert_eq!(
            CalendarDate::parse("2024-06-08").unwrap().weekday(),
            DayOfWeek::Saturday
        );
        assert_eq!(
            CalendarDate::parse("2024-07-04").unwrap().weekday(),
            DayOfWeek::Thursday
        );
        // Leap day
        assert_eq!(
            CalendarDate::parse("2024-02-29").unwrap().weekday(),
            DayOfWeek::Thursday
        );
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        for bad in [
            "",
            "2024-6-07",
            "2024/06/07",
            "24-06-07",
            "2024-06-07T00:00:00Z",
            " 2024-06-07",
            "abcd-ef-gh",
        ] {
            assert!(
                matches!(
                    CalendarDate::parse(bad),
                    Err(DomainError::InvalidDate { .. })
                ),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(CalendarDate::parse("2023-02-29").is_err());
        assert!(CalendarDate::parse("2024-13-01").is_err());
        assert!(CalendarDate::parse("2024-04-31").is_err());
        assert!(CalendarDate::parse("2024-00-10").is_err());
    }

    #[test]
    fn test_from_ymd_pads_fields_in_display() {
        let date: CalendarDate = CalendarDate::from_ymd(2025, 1, 5).unwrap();
        assert_eq!(date.to_string(), "2025-01-05");
    }

    #[test]
    fn test_ordering_follows_calendar() {
        let earlier: CalendarDate = CalendarDate::parse("2024-12-31").unwrap();
        let later: CalendarDate = CalendarDate::parse("2025-01-01").unwrap();
        assert!(earlier < later);
    }

    #[test]
    fn test_weekday_names_parse_exactly() {
        assert_eq!("Friday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Friday);
        assert!("friday".parse::<DayOfWeek>().is_err());
        assert!("Fri".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_serde_uses_date_key() {
        let date: CalendarDate = CalendarDate::parse("2024-07-04").unwrap();
        let json: String = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-07-04\"");
        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<CalendarDate>("\"07/04/2024\"").is_err());
    }
}
