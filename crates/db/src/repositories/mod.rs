//! Repository layer.
//!
//! The HTTP layer depends on the [`RecipeRepository`] trait rather than the
//! Postgres implementation so services can be exercised against fakes.

pub mod recipe_repo;

pub use recipe_repo::{PgRecipeRepository, RecipeRepository};
