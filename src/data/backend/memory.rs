//! Session-only backend. Entries are lost when the program exits.

use std::cell::{Cell, RefCell};

use super::EntryBackend;
use crate::data::error::BackendError;
use crate::data::models::{FoodEntry, LiftEntry, NewFood, NewLift};

#[derive(Debug, Default)]
pub struct MemoryBackend {
    next_id: Cell<u64>,
    lifts: RefCell<Vec<LiftEntry>>,
    foods: RefCell<Vec<FoodEntry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&self) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id.to_string()
    }
}

impl EntryBackend for MemoryBackend {
    fn describe(&self) -> String {
        "session only".to_string()
    }

    fn list_lifts(&self) -> Result<Vec<LiftEntry>, BackendError> {
        Ok(self.lifts.borrow().clone())
    }

    fn create_lift(&self, lift: &NewLift) -> Result<LiftEntry, BackendError> {
        let entry = lift.clone().with_id(self.allocate_id());
        self.lifts.borrow_mut().push(entry.clone());
        Ok(entry)
    }

    fn list_foods(&self) -> Result<Vec<FoodEntry>, BackendError> {
        Ok(self.foods.borrow().clone())
    }

    fn create_food(&self, food: &NewFood) -> Result<FoodEntry, BackendError> {
        let entry = food.clone().with_id(self.allocate_id());
        self.foods.borrow_mut().push(entry.clone());
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_across_kinds() {
        let backend = MemoryBackend::new();
        let lift = NewLift::parse("Squat", "100", "2024-01-01").unwrap();
        let food = NewFood::parse("Rice", "100", "130", "2024-01-01").unwrap();
        let a = backend.create_lift(&lift).unwrap();
        let b = backend.create_food(&food).unwrap();
        let c = backend.create_lift(&lift).unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(a.id, c.id);
        assert_eq!(backend.list_lifts().unwrap().len(), 2);
        assert_eq!(backend.list_foods().unwrap().len(), 1);
    }
}
