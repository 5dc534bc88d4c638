//! Grocery list model.

use super::{RecordId, ValidationError, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

/// Named container that items point at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryList {
    pub id: RecordId,
    pub name: String,
}

impl GroceryList {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(UNASSIGNED_ID, name)
    }

    pub fn with_id(id: RecordId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName("grocery list"));
        }
        Ok(())
    }
}
