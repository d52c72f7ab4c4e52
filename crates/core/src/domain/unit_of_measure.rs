use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// A unit of measure from the `unit_of_measure` reference table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: Option<DbId>,
    pub description: String,
}
