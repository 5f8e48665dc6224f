// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability and discovery behaviour checked across many dates.

use crate::{
    AvailabilityRecord, CalendarDate, CandidateProfile, DayOfWeek, SearchCriteria, UserId,
    filter_candidates, resolve,
};

fn days_of_2024() -> Vec<CalendarDate> {
    let mut days: Vec<CalendarDate> = Vec::new();
    let mut date: time::Date = CalendarDate::parse("2024-01-01").unwrap().date();
    while date.year() == 2024 {
        days.push(CalendarDate::from_date(date));
        date = date.next_day().unwrap();
    }
    days
}

#[test]
fn test_override_always_wins() {
    let mut record: AvailabilityRecord = AvailabilityRecord::new();
    for day in DayOfWeek::ALL {
        record.toggle_weekday(day);
    }
    for (i, date) in days_of_2024().into_iter().enumerate() {
        let value: bool = i % 3 == 0;
        record.date_overrides.insert(date, value);
        assert_eq!(resolve(&record, date), value, "{date}");
    }
}

#[test]
fn test_weekly_value_used_without_override() {
    let mut record: AvailabilityRecord = AvailabilityRecord::new();
    record.toggle_weekday(DayOfWeek::Tuesday);
    record.toggle_weekday(DayOfWeek::Saturday);
    for date in days_of_2024() {
        let expected: bool = matches!(date.weekday(), DayOfWeek::Tuesday | DayOfWeek::Saturday);
        assert_eq!(resolve(&record, date), expected, "{date}");
    }
}

#[test]
fn test_three_date_toggles_return_to_no_override_on_unavailable_day() {
    let mut record: AvailabilityRecord = AvailabilityRecord::new();
    record.toggle_weekday(DayOfWeek::Friday);
    for date in days_of_2024() {
        if record.resolve(date) {
            continue;
        }
        assert_eq!(record.toggle_date(date), Some(true), "{date}");
        assert_eq!(record.toggle_date(date), Some(false), "{date}");
        assert_eq!(record.toggle_date(date), None, "{date}");
    }
    assert!(record.date_overrides.is_empty());
}

#[test]
fn test_two_date_toggles_clear_block_on_available_day() {
    let mut record: AvailabilityRecord = AvailabilityRecord::new();
    record.toggle_weekday(DayOfWeek::Friday);
    let fridays: Vec<CalendarDate> = days_of_2024()
        .into_iter()
        .filter(|date| date.weekday() == DayOfWeek::Friday)
        .collect();
    assert_eq!(fridays.len(), 52);
    for date in fridays {
        assert_eq!(record.toggle_date(date), Some(false), "{date}");
        assert!(!record.resolve(date));
        assert_eq!(record.toggle_date(date), None, "{date}");
        assert!(record.resolve(date));
    }
    assert!(record.date_overrides.is_empty());
}

#[test]
fn test_discovery_on_event_date() {
    let mut free: CandidateProfile = CandidateProfile::new(UserId::new(1), "a@example.com");
    free.availability.toggle_weekday(DayOfWeek::Friday);
    let mut blocked: CandidateProfile = free.clone();
    blocked.id = UserId::new(2);
    blocked
        .availability
        .block_date(CalendarDate::parse("2024-06-07").unwrap());

    let candidates: Vec<CandidateProfile> = vec![free, blocked];
    let criteria: SearchCriteria = SearchCriteria {
        date: Some(CalendarDate::parse("2024-06-07").unwrap()),
        ..SearchCriteria::default()
    };
    let found: Vec<i64> = filter_candidates(&candidates, &criteria)
        .iter()
        .map(|c| c.id.value())
        .collect();
    assert_eq!(found, vec![1]);
}
