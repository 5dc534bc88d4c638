//! Product model.

use super::{RecordId, ValidationError, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: RecordId,
    pub name: String,
}

impl Product {
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
            return Err(ValidationError::BlankName("product"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Product;
    use crate::model::ValidationError;

    #[test]
    fn validate_rejects_whitespace_name() {
        let err = Product::new("   ").validate().unwrap_err();
        assert_eq!(err, ValidationError::BlankName("product"));
        assert_eq!(err.to_string(), "product name cannot be blank");
    }
}
