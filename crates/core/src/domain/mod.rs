//! Persisted domain entities.
//!
//! A `None` id marks an object that has not been saved yet.

pub mod category;
pub mod ingredient;
pub mod notes;
pub mod recipe;
pub mod unit_of_measure;

pub use category::Category;
pub use ingredient::Ingredient;
pub use notes::Notes;
pub use recipe::{Difficulty, Recipe};
pub use unit_of_measure::UnitOfMeasure;
