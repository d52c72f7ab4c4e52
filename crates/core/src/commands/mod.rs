//! Form-shaped mirrors of the domain entities.
//!
//! Commands are what the HTTP layer binds submitted forms onto and what the
//! views render. They carry the validation constraints; entities do not.

pub mod category;
pub mod ingredient;
pub mod notes;
pub mod recipe;
pub mod unit_of_measure;

pub use category::CategoryCommand;
pub use ingredient::IngredientCommand;
pub use notes::NotesCommand;
pub use recipe::RecipeCommand;
pub use unit_of_measure::UnitOfMeasureCommand;
