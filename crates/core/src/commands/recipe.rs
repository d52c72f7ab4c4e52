use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::commands::{CategoryCommand, IngredientCommand, NotesCommand};
use crate::domain::Difficulty;
use crate::types::DbId;

/// The recipe form.
///
/// Field constraints are checked with [`Validate::validate`] before the
/// command is handed to the service layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct RecipeCommand {
    pub id: Option<DbId>,

    #[validate(length(min = 3, max = 255, message = "must be between 3 and 255 characters"))]
    pub description: String,

    #[validate(range(min = 1, message = "must be at least 1 minute"))]
    pub prep_time: Option<i32>,

    #[validate(range(min = 1, message = "must be at least 1 minute"))]
    pub cook_time: Option<i32>,

    #[validate(range(min = 1, max = 100, message = "must be between 1 and 100"))]
    pub servings: Option<i32>,

    pub source: Option<String>,

    #[validate(url(message = "must be a valid URL"))]
    pub url: Option<String>,

    #[validate(length(min = 1, message = "must not be blank"))]
    pub directions: String,

    pub difficulty: Difficulty,
    pub notes: Option<NotesCommand>,
    pub ingredients: Vec<IngredientCommand>,
    pub categories: Vec<CategoryCommand>,
}
