use serde::{Deserialize, Serialize};

use crate::types::DbId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitOfMeasureCommand {
    pub id: Option<DbId>,
    pub description: String,
}
