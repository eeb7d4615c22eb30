//! Local SQLite backend.
//!
//! Schema (created on open):
//! - `lifts`: id, exercise, weight, date
//! - `foods`: id, name, amount, calories_per_100g, calories, date

use std::path::Path;

use rusqlite::{params, Connection, Row};
use tracing::info;

use super::EntryBackend;
use crate::data::error::BackendError;
use crate::data::models::{FoodEntry, LiftEntry, NewFood, NewLift};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS lifts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    exercise TEXT NOT NULL,
    weight REAL NOT NULL,
    date TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS foods (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    amount REAL NOT NULL,
    calories_per_100g REAL NOT NULL,
    calories INTEGER NOT NULL,
    date TEXT NOT NULL
);
";

pub struct SqliteBackend {
    conn: Connection,
    label: String,
}

impl SqliteBackend {
    /// Open (or create) a database file
    pub fn open(path: &Path) -> Result<Self, BackendError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened entry database");
        Self::with_connection(conn, path.display().to_string())
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, BackendError> {
        Self::with_connection(Connection::open_in_memory()?, ":memory:".to_string())
    }

    fn with_connection(conn: Connection, label: String) -> Result<Self, BackendError> {
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteBackend { conn, label })
    }
}

fn lift_from_row(row: &Row) -> rusqlite::Result<LiftEntry> {
    let id: i64 = row.get(0)?;
    Ok(LiftEntry {
        id: id.to_string(),
        exercise: row.get(1)?,
        weight: row.get(2)?,
        date: row.get(3)?,
    })
}

fn food_from_row(row: &Row) -> rusqlite::Result<FoodEntry> {
    let id: i64 = row.get(0)?;
    Ok(FoodEntry {
        id: id.to_string(),
        name: row.get(1)?,
        amount: row.get(2)?,
        calories_per_100g: row.get(3)?,
        calories: row.get(4)?,
        date: row.get(5)?,
    })
}

impl EntryBackend for SqliteBackend {
    fn describe(&self) -> String {
        format!("sqlite:{}", self.label)
    }

    fn list_lifts(&self) -> Result<Vec<LiftEntry>, BackendError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, exercise, weight, date FROM lifts ORDER BY id")?;
        let lifts = stmt
            .query_map([], lift_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(lifts)
    }

    fn create_lift(&self, lift: &NewLift) -> Result<LiftEntry, BackendError> {
        self.conn.execute(
            "INSERT INTO lifts (exercise, weight, date) VALUES (?1, ?2, ?3)",
            params![lift.exercise, lift.weight, lift.date],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(lift.clone().with_id(id.to_string()))
    }

    fn list_foods(&self) -> Result<Vec<FoodEntry>, BackendError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, amount, calories_per_100g, calories, date FROM foods ORDER BY id",
        )?;
        let foods = stmt
            .query_map([], food_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(foods)
    }

    fn create_food(&self, food: &NewFood) -> Result<FoodEntry, BackendError> {
        self.conn.execute(
            "INSERT INTO foods (name, amount, calories_per_100g, calories, date)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                food.name,
                food.amount,
                food.calories_per_100g,
                food.calories,
                food.date
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(food.clone().with_id(id.to_string()))
    }
}
