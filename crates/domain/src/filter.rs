// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Candidate filtering for DJ discovery.
//!
//! Predicates combine with AND. Within the genre and city predicates any
//! single shared value is enough. An empty predicate matches everything.

use crate::calendar::CalendarDate;
use crate::profile::CandidateProfile;
use crate::types::{City, UserId};
use std::collections::HashSet;

/// What a promoter is looking for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Match if the DJ plays any of these genres.
    pub genres: Vec<String>,
    /// Match if the DJ serves any of these cities.
    pub cities: Vec<City>,
    /// Match if the DJ resolves as available on this date.
    pub date: Option<CalendarDate>,
    /// Case-insensitive fragment of the DJ's name.
    pub name_substring: String,
    /// DJs never returned regardless of the other predicates.
    pub exclude_ids: HashSet<UserId>,
}

impl SearchCriteria {
    /// Returns true if `candidate` satisfies every predicate.
    #[must_use]
    pub fn matches(&self, candidate: &CandidateProfile) -> bool {
        !self.exclude_ids.contains(&candidate.id)
            && self.matches_genre(candidate)
            && self.matches_city(candidate)
            && self.matches_date(candidate)
            && self.matches_name(candidate)
    }

    fn matches_genre(&self, candidate: &CandidateProfile) -> bool {
        self.genres.is_empty() || self.genres.iter().any(|g| candidate.genres.contains(g))
    }

    fn matches_city(&self, candidate: &CandidateProfile) -> bool {
        self.cities.is_empty() || self.cities.iter().any(|c| candidate.cities.contains(c))
    }

    fn matches_date(&self, candidate: &CandidateProfile) -> bool {
        self.date
            .is_none_or(|date| candidate.availability.resolve(date))
    }

    fn matches_name(&self, candidate: &CandidateProfile) -> bool {
        // Blank check trims; the containment check uses the text as typed.
        if self.name_substring.trim().is_empty() {
            return true;
        }
        candidate
            .name
            .to_lowercase()
            .contains(&self.name_substring.to_lowercase())
    }
}

/// Returns the candidates matching `criteria`, in input order.
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &'a [CandidateProfile],
    criteria: &SearchCriteria,
) -> Vec<&'a CandidateProfile> {
    candidates.iter().filter(|c| criteria.matches(c)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::calendar::DayOfWeek;

    fn dj(id: i64, name: &str, genres: &[&str], cities: &[&str]) -> CandidateProfile {
        let mut profile: CandidateProfile =
            CandidateProfile::new(UserId::new(id), &format!("dj{id}@example.com"));
        profile.name = name.to_string();
        profile.genres = genres.iter().map(|g| (*g).to_string()).collect();
        profile.cities = cities.iter().map(|c| City::parse(c).unwrap()).collect();
        profile
    }

    fn roster() -> Vec<CandidateProfile> {
        vec![
            dj(1, "Alpha", &["house"], &["Austin, TX"]),
            dj(2, "Bravo", &["techno"], &["Dallas, TX"]),
            dj(3, "Charlie", &["house", "disco"], &["Dallas, TX"]),
        ]
    }

    fn ids(result: &[&CandidateProfile]) -> Vec<i64> {
        result.iter().map(|c| c.id.value()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_input_in_order() {
        let all: Vec<CandidateProfile> = roster();
        let result = filter_candidates(&all, &SearchCriteria::default());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_genre_filter_keeps_order() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            genres: vec![String::from("house")],
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_genre_filter_is_or_within_criterion() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            genres: vec![String::from("techno"), String::from("disco")],
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![2, 3]);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            genres: vec![String::from("house")],
            cities: vec![City::parse("Dallas, TX").unwrap()],
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![3]);
    }

    #[test]
    fn test_excluded_ids_removed_even_when_matching() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            exclude_ids: [UserId::new(1), UserId::new(3)].into_iter().collect(),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![2]);
    }

    #[test]
    fn test_date_uses_availability_resolution() {
        let mut all: Vec<CandidateProfile> = roster();
        all[0].availability.toggle_weekday(DayOfWeek::Friday);
        all[1].availability.toggle_weekday(DayOfWeek::Friday);
        all[1]
            .availability
            .block_date(CalendarDate::parse("2024-06-07").unwrap());
        all[2]
            .availability
            .date_overrides
            .insert(CalendarDate::parse("2024-06-07").unwrap(), true);

        let criteria: SearchCriteria = SearchCriteria {
            date: Some(CalendarDate::parse("2024-06-07").unwrap()),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![1, 3]);
    }

    #[test]
    fn test_name_match_is_case_insensitive() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            name_substring: String::from("aRL"),
            ..SearchCriteria::default()
        };
        assert_eq!(ids(&filter_candidates(&all, &criteria)), vec![3]);
    }

    #[test]
    fn test_whitespace_name_matches_everyone() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            name_substring: String::from("   "),
            ..SearchCriteria::default()
        };
        assert_eq!(filter_candidates(&all, &criteria).len(), 3);
    }

    #[test]
    fn test_name_is_not_trimmed_for_containment() {
        let all: Vec<CandidateProfile> = roster();
        let criteria: SearchCriteria = SearchCriteria {
            name_substring: String::from(" alpha"),
            ..SearchCriteria::default()
        };
        assert!(filter_candidates(&all, &criteria).is_empty());
    }
}
