//! Service layer between the handlers and the repository.
//!
//! Services are traits so handlers can be tested against fakes; the
//! `*Impl` types are the production implementations over a
//! [`RecipeRepository`](recipes_db::repositories::RecipeRepository).

pub mod ingredient;
pub mod recipe;

pub use ingredient::{IngredientService, IngredientServiceImpl};
pub use recipe::{RecipeService, RecipeServiceImpl};
