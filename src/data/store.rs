//! In-session record store for lifts and foods.

use tracing::{info, warn};

use super::backend::EntryBackend;
use super::error::StoreError;
use super::models::{FoodEntry, LiftEntry, NewFood, NewLift};

/// Append-only lift and food logs for the current session
pub struct RecordStore {
    backend: Box<dyn EntryBackend>,
    lifts: Vec<LiftEntry>,
    foods: Vec<FoodEntry>,
}

impl RecordStore {
    pub fn new(backend: Box<dyn EntryBackend>) -> Self {
        RecordStore {
            backend,
            lifts: Vec::new(),
            foods: Vec::new(),
        }
    }

    /// Replace both logs with the backend's contents.
    ///
    /// Nothing is replaced unless both lists load.
    pub fn load(&mut self) -> Result<(), StoreError> {
        let lifts = self.backend.list_lifts()?;
        let foods = self.backend.list_foods()?;
        info!(
            lifts = lifts.len(),
            foods = foods.len(),
            backend = %self.backend.describe(),
            "loaded entries"
        );
        self.lifts = lifts;
        self.foods = foods;
        Ok(())
    }

    pub fn lifts(&self) -> &[LiftEntry] {
        &self.lifts
    }

    pub fn foods(&self) -> &[FoodEntry] {
        &self.foods
    }

    pub fn backend_name(&self) -> String {
        self.backend.describe()
    }

    /// Validate form input, create the lift in the backend, then append it
    pub fn add_lift(
        &mut self,
        exercise: &str,
        weight: &str,
        date: &str,
    ) -> Result<LiftEntry, StoreError> {
        let lift = NewLift::parse(exercise, weight, date)?;
        let created = self.backend.create_lift(&lift).map_err(|e| {
            warn!(error = %e, exercise = %lift.exercise, "failed to create lift");
            e
        })?;
        info!(id = %created.id, exercise = %created.exercise, date = %created.date, "added lift");
        self.lifts.push(created.clone());
        Ok(created)
    }

    /// Validate form input, create the food in the backend, then append it
    pub fn add_food(
        &mut self,
        name: &str,
        amount: &str,
        calories_per_100g: &str,
        date: &str,
    ) -> Result<FoodEntry, StoreError> {
        let food = NewFood::parse(name, amount, calories_per_100g, date)?;
        let created = self.backend.create_food(&food).map_err(|e| {
            warn!(error = %e, name = %food.name, "failed to create food");
            e
        })?;
        info!(id = %created.id, calories = created.calories, date = %created.date, "added food");
        self.foods.push(created.clone());
        Ok(created)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::data::backend::MemoryBackend;
    use crate::data::error::{BackendError, ValidationError};

    /// Backend whose every call fails with a 503
    pub(crate) struct DownBackend;

    fn unavailable(method: &'static str) -> BackendError {
        BackendError::Status {
            method,
            url: "http://down/".to_string(),
            status: 503,
        }
    }

    impl EntryBackend for DownBackend {
        fn describe(&self) -> String {
            "down".to_string()
        }

        fn list_lifts(&self) -> Result<Vec<LiftEntry>, BackendError> {
            Err(unavailable("GET"))
        }

        fn create_lift(&self, _lift: &NewLift) -> Result<LiftEntry, BackendError> {
            Err(unavailable("POST"))
        }

        fn list_foods(&self) -> Result<Vec<FoodEntry>, BackendError> {
            Err(unavailable("GET"))
        }

        fn create_food(&self, _food: &NewFood) -> Result<FoodEntry, BackendError> {
            Err(unavailable("POST"))
        }
    }

    #[test]
    fn test_add_lift_appends_after_backend_confirms() {
        let mut store = RecordStore::new(Box::new(MemoryBackend::new()));
        let squat = store.add_lift("Squat", "100", "2024-01-01").unwrap();
        let bench = store.add_lift("Bench", "70", "2024-01-01").unwrap();
        assert_eq!(store.lifts().len(), 2);
        assert_eq!(store.lifts().first(), Some(&squat));
        assert_eq!(store.lifts().last(), Some(&bench));
        assert_eq!(store.lifts()[1].exercise, "Bench");
    }

    #[test]
    fn test_validation_error_leaves_log_untouched() {
        let mut store = RecordStore::new(Box::new(MemoryBackend::new()));
        let err = store.add_lift("", "100", "2024-01-01").unwrap_err();
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::Missing("exercise"))
        ));
        let err = store.add_food("Rice", "abc", "130", "2024-01-01").unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        assert!(store.lifts().is_empty());
        assert!(store.foods().is_empty());
    }

    #[test]
    fn test_communication_error_leaves_log_untouched() {
        let mut store = RecordStore::new(Box::new(DownBackend));
        let err = store.add_lift("Squat", "100", "2024-01-01").unwrap_err();
        assert!(matches!(err, StoreError::Communication(_)));
        let err = store.add_food("Rice", "100", "130", "2024-01-01").unwrap_err();
        assert!(matches!(err, StoreError::Communication(_)));
        assert!(store.lifts().is_empty());
        assert!(store.foods().is_empty());
    }

    #[test]
    fn test_load_replaces_logs() {
        let backend = MemoryBackend::new();
        backend
            .create_lift(&NewLift::parse("Squat", "100", "2024-01-01").unwrap())
            .unwrap();
        backend
            .create_food(&NewFood::parse("Rice", "200", "50", "2024-01-01").unwrap())
            .unwrap();

        let mut store = RecordStore::new(Box::new(backend));
        store.load().unwrap();
        assert_eq!(store.lifts().len(), 1);
        assert_eq!(store.foods().len(), 1);
        assert_eq!(store.foods()[0].calories, 100);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut store = RecordStore::new(Box::new(DownBackend));
        assert!(matches!(store.load(), Err(StoreError::Communication(_))));
        assert!(store.lifts().is_empty());
    }
}
