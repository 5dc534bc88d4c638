//! Grocery list item model.
//!
//! # Invariants
//! - `grocery_list_id` and `product_id` reference existing rows (enforced by
//!   SQLite foreign keys, not here).
//! - `amount` is strictly positive.

use super::{RecordId, ValidationError, UNASSIGNED_ID};
use serde::{Deserialize, Serialize};

/// One (list, product, quantity) association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryListItem {
    pub id: RecordId,
    pub grocery_list_id: RecordId,
    pub product_id: RecordId,
    pub amount: i64,
}

impl GroceryListItem {
    /// Creates an unsaved item; the store assigns `id` on insert.
    pub fn new(grocery_list_id: RecordId, product_id: RecordId, amount: i64) -> Self {
        Self::with_id(UNASSIGNED_ID, grocery_list_id, product_id, amount)
    }

    /// Creates an item with a known identity, e.g. seed rows.
    pub const fn with_id(
        id: RecordId,
        grocery_list_id: RecordId,
        product_id: RecordId,
        amount: i64,
    ) -> Self {
        Self {
            id,
            grocery_list_id,
            product_id,
            amount,
        }
    }

    pub fn is_saved(&self) -> bool {
        self.id != UNASSIGNED_ID
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.amount <= 0 {
            return Err(ValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::GroceryListItem;
    use crate::model::ValidationError;

    #[test]
    fn new_item_is_unsaved() {
        let item = GroceryListItem::new(1, 2, 3);
        assert!(!item.is_saved());
        assert_eq!(item.amount, 3);
    }

    #[test]
    fn validate_rejects_zero_and_negative_amounts() {
        assert_eq!(
            GroceryListItem::new(1, 1, 0).validate(),
            Err(ValidationError::NonPositiveAmount(0))
        );
        assert_eq!(
            GroceryListItem::new(1, 1, -4).validate(),
            Err(ValidationError::NonPositiveAmount(-4))
        );
        assert!(GroceryListItem::new(1, 1, 1).validate().is_ok());
    }
}
