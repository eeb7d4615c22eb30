//! Calorie totals.

use super::index::entries_on;
use super::models::FoodEntry;

/// Sum of stored calories
pub fn total_calories<'a, I>(foods: I) -> i64
where
    I: IntoIterator<Item = &'a FoodEntry>,
{
    foods.into_iter().map(|f| f.calories).sum()
}

/// Total calories logged on `date`
pub fn calories_on(foods: &[FoodEntry], date: &str) -> i64 {
    total_calories(entries_on(foods, date))
}
