//! Stateless mappers between entities and commands.
//!
//! Every pair has one converter per direction. Composite converters hold the
//! converters for their relations and delegate to them, so a recipe's notes,
//! ingredients and categories are rebuilt rather than shared.

mod category;
mod ingredient;
mod notes;
mod recipe;
mod unit_of_measure;

pub use category::{CategoryCommandToCategory, CategoryToCategoryCommand};
pub use ingredient::{IngredientCommandToIngredient, IngredientToIngredientCommand};
pub use notes::{NotesCommandToNotes, NotesToNotesCommand};
pub use recipe::{RecipeCommandToRecipe, RecipeToRecipeCommand};
pub use unit_of_measure::{UnitOfMeasureCommandToUnitOfMeasure, UnitOfMeasureToUnitOfMeasureCommand};

/// A pure mapping from `S` to `D`.
pub trait Converter<S, D> {
    fn convert(&self, source: &S) -> D;

    /// Absent in, absent out.
    fn convert_opt(&self, source: Option<&S>) -> Option<D> {
        source.map(|s| self.convert(s))
    }

    fn convert_all(&self, sources: &[S]) -> Vec<D> {
        sources.iter().map(|s| self.convert(s)).collect()
    }
}
