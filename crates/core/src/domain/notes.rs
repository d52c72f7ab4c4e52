use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Free-form notes attached one-to-one to a recipe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notes {
    pub id: Option<DbId>,
    pub recipe_notes: String,
}
