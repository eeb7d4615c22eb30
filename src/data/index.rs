//! Date indexing over entry collections.
//!
//! Keys are compared as exact strings; no calendar normalization is applied
//! to entries that were loaded from a backend.

use std::collections::{BTreeMap, BTreeSet};

use super::models::{FoodEntry, LiftEntry};

/// An entry keyed by a `YYYY-MM-DD` date string
pub trait Dated {
    fn date(&self) -> &str;
}

impl Dated for LiftEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Dated for FoodEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Entries recorded on `date`, in their original order
pub fn entries_on<'a, E: Dated>(entries: &'a [E], date: &str) -> Vec<&'a E> {
    entries.iter().filter(|e| e.date() == date).collect()
}

/// Every date that has at least one entry
pub fn distinct_dates<E: Dated>(entries: &[E]) -> BTreeSet<String> {
    entries.iter().map(|e| e.date().to_string()).collect()
}

/// Entries grouped per day, original order kept within each day
pub fn group_by_date<E: Dated>(entries: &[E]) -> BTreeMap<&str, Vec<&E>> {
    let mut days: BTreeMap<&str, Vec<&E>> = BTreeMap::new();
    for entry in entries {
        days.entry(entry.date()).or_default().push(entry);
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lift(id: &str, exercise: &str, date: &str) -> LiftEntry {
        LiftEntry {
            id: id.to_string(),
            exercise: exercise.to_string(),
            weight: 100.0,
            date: date.to_string(),
        }
    }

    fn sample() -> Vec<LiftEntry> {
        vec![
            lift("1", "Squat", "2024-01-02"),
            lift("2", "Bench", "2024-01-01"),
            lift("3", "Deadlift", "2024-01-02"),
            lift("4", "Squat", "2024-01-03"),
            lift("5", "Row", "2024-01-02"),
        ]
    }

    #[test]
    fn test_entries_on_keeps_order() {
        let lifts = sample();
        let ids: Vec<&str> = entries_on(&lifts, "2024-01-02")
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "3", "5"]);
    }

    #[test]
    fn test_entries_on_matches_exactly() {
        let lifts = sample();
        for date in ["2024-01-01", "2024-01-02", "2024-01-03", "2024-01-04"] {
            let expected: Vec<&LiftEntry> = lifts.iter().filter(|l| l.date == date).collect();
            assert_eq!(entries_on(&lifts, date), expected);
        }
        // No calendar normalization on lookups
        assert!(entries_on(&lifts, "2024-1-2").is_empty());
    }

    #[test]
    fn test_same_day_different_exercises() {
        let lifts = vec![
            lift("a", "Squat", "2024-05-05"),
            lift("b", "Bench", "2024-05-05"),
        ];
        let found = entries_on(&lifts, "2024-05-05");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].exercise, "Squat");
        assert_eq!(found[1].exercise, "Bench");
    }

    #[test]
    fn test_distinct_dates() {
        let lifts = sample();
        let dates = distinct_dates(&lifts);
        let expected: BTreeSet<String> = ["2024-01-01", "2024-01-02", "2024-01-03"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(dates, expected);
    }

    #[test]
    fn test_empty_set() {
        let lifts: Vec<LiftEntry> = Vec::new();
        assert!(distinct_dates(&lifts).is_empty());
        assert!(entries_on(&lifts, "2024-01-01").is_empty());
        assert!(group_by_date(&lifts).is_empty());
    }

    #[test]
    fn test_group_by_date_agrees_with_entries_on() {
        let lifts = sample();
        let groups = group_by_date(&lifts);
        assert_eq!(groups.len(), distinct_dates(&lifts).len());
        for (date, group) in &groups {
            assert_eq!(group, &entries_on(&lifts, date));
        }
        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, lifts.len());
    }

    #[test]
    fn test_queries_are_repeatable() {
        let lifts = sample();
        assert_eq!(entries_on(&lifts, "2024-01-02"), entries_on(&lifts, "2024-01-02"));
        assert_eq!(distinct_dates(&lifts), distinct_dates(&lifts));
        assert_eq!(lifts, sample());
    }
}
