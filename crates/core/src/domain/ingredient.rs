use serde::{Deserialize, Serialize};

use crate::domain::UnitOfMeasure;
use crate::types::DbId;

/// A single ingredient line of a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Option<DbId>,
    pub description: String,
    pub amount: Option<f64>,
    pub uom: Option<UnitOfMeasure>,
    /// Owning recipe. `None` until the recipe itself has been saved.
    pub recipe_id: Option<DbId>,
}
