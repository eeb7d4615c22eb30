//! Data layer: entry models, the record store and its backends, and the
//! pure date/series/calorie derivations used by the screens.

pub mod aggregate;
pub mod backend;
pub(crate) mod error;
pub mod index;
pub(crate) mod models;
pub mod series;
mod store;

pub use error::StoreError;
pub use models::{date_key, FoodEntry, LiftEntry, DATE_FORMAT};
pub use store::RecordStore;

#[cfg(test)]
pub(crate) use store::tests::DownBackend;
