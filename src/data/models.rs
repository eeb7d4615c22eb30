//! Data models for lift and food entries.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ValidationError;

/// Date format used for every entry key and on the wire
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date as an entry key (`YYYY-MM-DD`)
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// A recorded weightlifting set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftEntry {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub exercise: String,
    /// Weight in kilograms
    pub weight: f64,
    pub date: String,
}

/// A logged food item with its calories fixed at creation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodEntry {
    #[serde(deserialize_with = "opaque_id")]
    pub id: String,
    pub name: String,
    /// Amount in grams
    pub amount: f64,
    pub calories_per_100g: f64,
    pub calories: i64,
    pub date: String,
}

/// Validated lift awaiting an id from the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewLift {
    pub exercise: String,
    pub weight: f64,
    pub date: String,
}

impl NewLift {
    /// Validate raw form input
    pub fn parse(exercise: &str, weight: &str, date: &str) -> Result<Self, ValidationError> {
        let exercise = required("exercise", exercise)?;
        let weight = positive_number("weight", weight)?;
        let date = calendar_date(date)?;
        Ok(NewLift {
            exercise: exercise.to_string(),
            weight,
            date,
        })
    }

    pub fn with_id(self, id: String) -> LiftEntry {
        LiftEntry {
            id,
            exercise: self.exercise,
            weight: self.weight,
            date: self.date,
        }
    }
}

/// Validated food awaiting an id from the backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFood {
    pub name: String,
    pub amount: f64,
    pub calories_per_100g: f64,
    pub calories: i64,
    pub date: String,
}

impl NewFood {
    /// Validate raw form input and compute the stored calorie count
    pub fn parse(
        name: &str,
        amount: &str,
        calories_per_100g: &str,
        date: &str,
    ) -> Result<Self, ValidationError> {
        let name = required("name", name)?;
        let amount = positive_number("amount", amount)?;
        let calories_per_100g = positive_number("calories per 100g", calories_per_100g)?;
        let date = calendar_date(date)?;
        Ok(NewFood {
            name: name.to_string(),
            amount,
            calories_per_100g,
            calories: food_calories(amount, calories_per_100g),
            date,
        })
    }

    pub fn with_id(self, id: String) -> FoodEntry {
        FoodEntry {
            id,
            name: self.name,
            amount: self.amount,
            calories_per_100g: self.calories_per_100g,
            calories: self.calories,
            date: self.date,
        }
    }
}

/// Calories for `amount` grams of a food, rounded to the nearest integer
pub fn food_calories(amount: f64, calories_per_100g: f64) -> i64 {
    (amount * calories_per_100g / 100.0).round() as i64
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(trimmed)
}

fn positive_number(field: &'static str, value: &str) -> Result<f64, ValidationError> {
    let raw = required(field, value)?;
    let number: f64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: raw.to_string(),
    })?;
    if !number.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        });
    }
    if number <= 0.0 {
        return Err(ValidationError::NotPositive(field));
    }
    Ok(number)
}

/// Parse a calendar date and re-emit it zero padded
fn calendar_date(value: &str) -> Result<String, ValidationError> {
    let raw = required("date", value)?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(date_key)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// Accept ids serialized either as JSON strings or numbers
fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_calories_rounds() {
        assert_eq!(food_calories(200.0, 50.0), 100);
        assert_eq!(food_calories(100.0, 80.0), 80);
        assert_eq!(food_calories(33.0, 55.0), 18); // 18.15
        assert_eq!(food_calories(10.0, 5.0), 1); // 0.5 rounds up
    }

    #[test]
    fn test_new_lift_trims_and_pads_date() {
        let lift = NewLift::parse("  Squat ", "102.5", "2024-1-8").unwrap();
        assert_eq!(lift.exercise, "Squat");
        assert_eq!(lift.weight, 102.5);
        assert_eq!(lift.date, "2024-01-08");
    }

    #[test]
    fn test_new_lift_missing_fields() {
        assert_eq!(
            NewLift::parse("", "100", "2024-01-01"),
            Err(ValidationError::Missing("exercise"))
        );
        assert_eq!(
            NewLift::parse("Squat", "  ", "2024-01-01"),
            Err(ValidationError::Missing("weight"))
        );
        assert_eq!(
            NewLift::parse("Squat", "100", ""),
            Err(ValidationError::Missing("date"))
        );
    }

    #[test]
    fn test_new_lift_rejects_bad_numbers() {
        assert!(matches!(
            NewLift::parse("Squat", "heavy", "2024-01-01"),
            Err(ValidationError::NotANumber { field: "weight", .. })
        ));
        assert!(matches!(
            NewLift::parse("Squat", "inf", "2024-01-01"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert_eq!(
            NewLift::parse("Squat", "0", "2024-01-01"),
            Err(ValidationError::NotPositive("weight"))
        );
        assert_eq!(
            NewLift::parse("Squat", "-5", "2024-01-01"),
            Err(ValidationError::NotPositive("weight"))
        );
    }

    #[test]
    fn test_new_lift_rejects_impossible_date() {
        assert_eq!(
            NewLift::parse("Squat", "100", "2024-02-30"),
            Err(ValidationError::InvalidDate("2024-02-30".to_string()))
        );
    }

    #[test]
    fn test_new_food_stores_calories() {
        let food = NewFood::parse("Rice", "200", "50", "2024-01-01").unwrap();
        assert_eq!(food.calories, 100);
        let entry = food.with_id("7".to_string());
        assert_eq!(entry.id, "7");
        assert_eq!(entry.calories, 100);
    }

    #[test]
    fn test_food_entry_wire_format_is_camel_case() {
        let entry = NewFood::parse("Oats", "50", "380", "2024-03-02")
            .unwrap()
            .with_id("a1".to_string());
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["caloriesPer100g"], 380.0);
        assert_eq!(json["calories"], 190);
    }

    #[test]
    fn test_lift_entry_accepts_numeric_id() {
        let lift: LiftEntry = serde_json::from_str(
            r#"{"id": 42, "exercise": "Bench", "weight": 80, "date": "2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(lift.id, "42");
        assert_eq!(lift.weight, 80.0);
    }
}
