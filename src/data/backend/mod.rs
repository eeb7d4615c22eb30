//! Backing stores for lift and food entries.
//!
//! The record store never assigns ids itself: every backend hands back the
//! created entry with its id, and only then is it appended to the session.

mod http;
mod memory;
mod sqlite;

pub use http::HttpBackend;
pub use memory::MemoryBackend;
pub use sqlite::SqliteBackend;

use super::error::BackendError;
use super::models::{FoodEntry, LiftEntry, NewFood, NewLift};

/// A store that can list and create entries
pub trait EntryBackend {
    /// Short human-readable description shown in the status bar
    fn describe(&self) -> String;

    fn list_lifts(&self) -> Result<Vec<LiftEntry>, BackendError>;

    fn create_lift(&self, lift: &NewLift) -> Result<LiftEntry, BackendError>;

    fn list_foods(&self) -> Result<Vec<FoodEntry>, BackendError>;

    fn create_food(&self, food: &NewFood) -> Result<FoodEntry, BackendError>;
}
