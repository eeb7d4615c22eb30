//! Per-exercise weight series for the progress chart.

use super::models::LiftEntry;

/// A single chart point: (date, weight in kg)
pub type SeriesPoint = (String, f64);

/// Distinct exercise names in the order they first appear
pub fn exercises(lifts: &[LiftEntry]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for lift in lifts {
        if !names.iter().any(|n| n == &lift.exercise) {
            names.push(lift.exercise.clone());
        }
    }
    names
}

/// The exercise charted when the user has not picked one
pub fn default_exercise(lifts: &[LiftEntry]) -> Option<&str> {
    lifts.first().map(|l| l.exercise.as_str())
}

/// Weight over time for one exercise.
///
/// Sorted by the date string, which is chronological only for zero padded
/// `YYYY-MM-DD` dates. The sort is stable so same-day entries keep their
/// insertion order.
pub fn exercise_series(lifts: &[LiftEntry], exercise: &str) -> Vec<SeriesPoint> {
    let mut points: Vec<SeriesPoint> = lifts
        .iter()
        .filter(|l| l.exercise == exercise)
        .map(|l| (l.date.clone(), l.weight))
        .collect();
    points.sort_by(|a, b| a.0.cmp(&b.0));
    points
}
