//! Suggestion engine
//!
//! Pure functions over the candidate list:
//! - [`filter`] picks the candidates matching the current input
//! - [`highlight`] splits a field into plain and emphasized segments around
//!   the first match
//!
//! Matching is case-insensitive and only kicks in once the input holds at
//! least [`MIN_QUERY_CHARS`] characters.

mod highlight;

use std::collections::HashSet;

use crate::config::DisplayConfig;
use crate::source::Person;

pub use highlight::{Highlighted, Segment, find_ignore_case, highlight};

/// Inputs shorter than this never produce suggestions
pub const MIN_QUERY_CHARS: usize = 2;

/// Knobs for [`filter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Cap on the number of suggestions shown
    pub max_visible: usize,

    /// Match usernames in addition to names
    pub match_username: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            max_visible: 5,
            match_username: true,
        }
    }
}

impl From<&DisplayConfig> for MatchOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            max_visible: config.max_suggestions,
            match_username: config.match_username,
        }
    }
}

/// Result of [`filter`]: every match, plus how many of them are shown
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    all: Vec<Person>,
    max_visible: usize,
}

impl Suggestions {
    /// Every matching candidate, name matches first
    pub fn all(&self) -> &[Person] {
        &self.all
    }

    /// The first `max_visible` matches
    pub fn visible(&self) -> &[Person] {
        &self.all[..self.all.len().min(self.max_visible)]
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}

/// Whether `input` is long enough to search with
pub fn is_searchable(input: &str) -> bool {
    input.chars().count() >= MIN_QUERY_CHARS
}

/// Compute the suggestions for `input`
///
/// Name matches come first, then username matches not already present (by
/// `id`), each group in candidate order.
pub fn filter(input: &str, candidates: &[Person], options: MatchOptions) -> Suggestions {
    if !is_searchable(input) {
        return Suggestions {
            all: Vec::new(),
            max_visible: options.max_visible,
        };
    }

    let mut seen = HashSet::new();
    let mut all: Vec<Person> = candidates
        .iter()
        .filter(|p| find_ignore_case(&p.name, input).is_some())
        .filter(|p| seen.insert(p.id))
        .cloned()
        .collect();

    if options.match_username {
        all.extend(
            candidates
                .iter()
                .filter(|p| find_ignore_case(&p.username, input).is_some())
                .filter(|p| seen.insert(p.id))
                .cloned(),
        );
    }

    Suggestions {
        all,
        max_visible: options.max_visible,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::person;

    fn candidates() -> Vec<Person> {
        vec![
            person(1, "Leanne Graham", "Bret"),
            person(2, "Ervin Howell", "Antonette"),
            person(3, "Clementine Bauch", "Samantha"),
            person(4, "Patricia Lebsack", "Karianne"),
            person(5, "Chelsey Dietrich", "Kamren"),
            person(6, "Mrs. Dennis Schulist", "Leopoldo_Corkery"),
            person(7, "Kurtis Weissnat", "Elwyn.Skiles"),
            person(8, "Nicholas Runolfsdottir V", "Maxime_Nienow"),
            person(9, "Glenna Reichert", "Delphine"),
            person(10, "Clementina DuBuque", "Moriah.Stanton"),
        ]
    }

    fn ids(people: &[Person]) -> Vec<u64> {
        people.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_short_input_matches_nothing() {
        let candidates = candidates();
        for input in ["", "e", "E", "é"] {
            let s = filter(input, &candidates, MatchOptions::default());
            assert!(s.is_empty(), "input {input:?} should not match");
            assert!(s.visible().is_empty());
        }
    }

    #[test]
    fn test_name_match_case_insensitive() {
        let s = filter("CLEM", &candidates(), MatchOptions::default());
        assert_eq!(ids(s.all()), vec![3, 10]);
    }

    #[test]
    fn test_username_matches_follow_name_matches() {
        // "an" only hits one name, then usernames Antonette/Samantha/Karianne/Moriah.Stanton
        let s = filter("an", &candidates(), MatchOptions::default());
        assert_eq!(ids(s.all()), vec![1, 2, 3, 4, 10]);

        let s = filter("en", &candidates(), MatchOptions::default());
        assert_eq!(ids(s.all()), vec![3, 6, 9, 10, 5, 8]);
    }

    #[test]
    fn test_dedup_by_id() {
        let candidates = vec![person(1, "Anna", "anna"), person(2, "Bob", "banana")];
        let s = filter("an", &candidates, MatchOptions::default());
        assert_eq!(ids(s.all()), vec![1, 2]);
    }

    #[test]
    fn test_name_only() {
        let options = MatchOptions {
            match_username: false,
            ..MatchOptions::default()
        };
        let s = filter("bret", &candidates(), options);
        assert!(s.is_empty());

        let s = filter("bret", &candidates(), MatchOptions::default());
        assert_eq!(ids(s.all()), vec![1]);
    }

    #[test]
    fn test_visible_is_capped_prefix() {
        let candidates = candidates();
        let s = filter("e", &candidates, MatchOptions::default());
        assert!(s.is_empty());

        let s = filter("en", &candidates, MatchOptions::default());
        assert_eq!(s.all().len(), 6);
        assert_eq!(s.visible().len(), 5);
        assert_eq!(s.visible(), &s.all()[..5]);

        let options = MatchOptions {
            max_visible: 2,
            match_username: true,
        };
        let s = filter("en", &candidates, options);
        assert_eq!(s.visible().len(), 2);
    }

    #[test]
    fn test_every_match_is_reported_and_correct() {
        let candidates = candidates();
        for input in ["an", "EN", "li", "ch", "st", "zz", "Na", "ri"] {
            let s = filter(input, &candidates, MatchOptions::default());
            for p in s.all() {
                assert!(
                    find_ignore_case(&p.name, input).is_some()
                        || find_ignore_case(&p.username, input).is_some()
                );
            }
            let expected = candidates
                .iter()
                .filter(|p| {
                    p.name.to_lowercase().contains(&input.to_lowercase())
                        || p.username.to_lowercase().contains(&input.to_lowercase())
                })
                .count();
            assert_eq!(s.all().len(), expected, "input {input:?}");
            assert_eq!(s.visible().len(), expected.min(5));
        }
    }

    #[test]
    fn test_enter_example() {
        let candidates = vec![person(1, "Ann", "a1"), person(2, "Andy", "a2")];
        let s = filter("An", &candidates, MatchOptions::default());
        assert_eq!(ids(s.all()), vec![1, 2]);
    }
}
