use grocery_core::{GroceryList, GroceryListItem, Product, UNASSIGNED_ID};

#[test]
fn item_serializes_with_snake_case_fields() {
    let item = GroceryListItem::with_id(7, 2, 4, 3);

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 7);
    assert_eq!(json["grocery_list_id"], 2);
    assert_eq!(json["product_id"], 4);
    assert_eq!(json["amount"], 3);

    let decoded: GroceryListItem = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn new_records_start_unassigned() {
    assert_eq!(GroceryListItem::new(1, 1, 1).id, UNASSIGNED_ID);
    assert_eq!(GroceryList::new("Weekly").id, UNASSIGNED_ID);
    assert_eq!(Product::new("Milk").id, UNASSIGNED_ID);
}

#[test]
fn blank_list_name_fails_validation() {
    assert!(GroceryList::new("\t").validate().is_err());
    assert!(GroceryList::new("Weekly").validate().is_ok());
}
