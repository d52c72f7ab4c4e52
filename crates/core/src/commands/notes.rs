use serde::{Deserialize, Serialize};

use crate::types::DbId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NotesCommand {
    pub id: Option<DbId>,
    pub recipe_notes: String,
}
