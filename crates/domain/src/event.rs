// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::CalendarDate;
use crate::error::DomainError;
use crate::types::{City, EventId, UserId};
use serde::{Deserialize, Serialize};

/// An event owned by a promoter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub promoter_id: UserId,
    pub name: String,
    pub date: CalendarDate,
    pub venue: String,
    pub city: Option<City>,
    pub description: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl Event {
    /// Applies an edit to this event.
    ///
    /// The date is fixed at creation. An update may repeat the current date
    /// but not change it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EventDateImmutable` if the update carries a
    /// different date, or `DomainError::InvalidName` if it blanks the name.
    pub fn apply_update(&mut self, update: EventUpdate) -> Result<(), DomainError> {
        if update.date.is_some_and(|d| d != self.date) {
            return Err(DomainError::EventDateImmutable);
        }
        if update.name.as_ref().is_some_and(|n| n.trim().is_empty()) {
            return Err(DomainError::InvalidName(String::from(
                "Event name cannot be empty",
            )));
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(venue) = update.venue {
            self.venue = venue;
        }
        if let Some(city) = update.city {
            self.city = city;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        Ok(())
    }
}

/// Fields of an event before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub promoter_id: UserId,
    pub name: String,
    pub date: CalendarDate,
    pub venue: String,
    pub city: Option<City>,
    pub description: String,
}

impl NewEvent {
    /// Checks the fields required to create an event.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidName` if the name is blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidName(String::from(
                "Event name cannot be empty",
            )));
        }
        Ok(())
    }
}

/// A partial event edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdate {
    pub name: Option<String>,
    /// Accepted only when equal to the stored date.
    pub date: Option<CalendarDate>,
    pub venue: Option<String>,
    /// `Some(None)` clears the city.
    pub city: Option<Option<City>>,
    pub description: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn event() -> Event {
        Event {
            id: EventId::new(1),
            promoter_id: UserId::new(10),
            name: String::from("Warehouse Night"),
            date: CalendarDate::parse("2024-07-04").unwrap(),
            venue: String::from("Dock 5"),
            city: Some(City::parse("Austin, TX").unwrap()),
            description: String::new(),
            created_at: String::from("2024-05-01T00:00:00Z"),
            updated_at: None,
        }
    }

    #[test]
    fn test_update_changes_everything_but_date() {
        let mut e: Event = event();
        e.apply_update(EventUpdate {
            name: Some(String::from("Rooftop")),
            venue: Some(String::from("Roof")),
            city: Some(Some(City::parse("Dallas, TX").unwrap())),
            description: Some(String::from("Sunset set")),
            date: Some(CalendarDate::parse("2024-07-04").unwrap()),
        })
        .unwrap();
        assert_eq!(e.name, "Rooftop");
        assert_eq!(e.venue, "Roof");
        assert_eq!(e.city.as_ref().map(City::as_str), Some("Dallas, TX"));
        assert_eq!(e.date.to_string(), "2024-07-04");
    }

    #[test]
    fn test_update_can_clear_city() {
        let mut e: Event = event();
        e.apply_update(EventUpdate::default()).unwrap();
        assert_eq!(e.city.as_ref().map(City::as_str), Some("Austin, TX"));

        e.apply_update(EventUpdate {
            city: Some(None),
            ..EventUpdate::default()
        })
        .unwrap();
        assert_eq!(e.city, None);
    }

    #[test]
    fn test_update_rejects_new_date() {
        let mut e: Event = event();
        let result = e.apply_update(EventUpdate {
            date: Some(CalendarDate::parse("2024-07-05").unwrap()),
            name: Some(String::from("Moved")),
            ..EventUpdate::default()
        });
        assert_eq!(result, Err(DomainError::EventDateImmutable));
        assert_eq!(e, event());
    }

    #[test]
    fn test_blank_names_rejected() {
        let mut e: Event = event();
        assert!(
            e.apply_update(EventUpdate {
                name: Some(String::from("  ")),
                ..EventUpdate::default()
            })
            .is_err()
        );

        let new_event: NewEvent = NewEvent {
            promoter_id: UserId::new(1),
            name: String::new(),
            date: CalendarDate::parse("2024-07-04").unwrap(),
            venue: String::new(),
            city: None,
            description: String::new(),
        };
        assert!(matches!(
            new_event.validate(),
            Err(DomainError::InvalidName(_))
        ));
    }
}
