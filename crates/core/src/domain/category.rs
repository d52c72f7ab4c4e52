use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A recipe category from the `category` reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<DbId>,
    pub description: String,
}
