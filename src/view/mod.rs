//! Per-screen view models.
//!
//! Each screen owns its form and selection state. Key presses are turned
//! into actions by the app; `update` applies an action and may return an
//! [`Effect`] for the app to run against the record store. The outcome is
//! fed back as another action (`Saved`), so the views never touch the
//! store themselves.

pub mod form;
mod home;
mod nutrition;
mod progress;

pub use home::{HomeAction, HomePane, HomeView};
pub use nutrition::{NutritionAction, NutritionView};
pub use progress::{ProgressAction, ProgressView};

/// Whether the initial load has finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    Failed(String),
}

/// Raw lift form contents to hand to the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiftDraft {
    pub exercise: String,
    pub weight: String,
    pub date: String,
}

/// Raw food form contents to hand to the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodDraft {
    pub name: String,
    pub amount: String,
    pub calories_per_100g: String,
    pub date: String,
}

/// Work requested by a view transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    SubmitLift(LiftDraft),
    SubmitFood(FoodDraft),
}
