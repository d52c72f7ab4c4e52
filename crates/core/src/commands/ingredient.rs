use serde::{Deserialize, Serialize};

use crate::commands::UnitOfMeasureCommand;
use crate::types::DbId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IngredientCommand {
    pub id: Option<DbId>,
    pub recipe_id: Option<DbId>,
    pub description: String,
    pub amount: Option<f64>,
    pub uom: Option<UnitOfMeasureCommand>,
}
