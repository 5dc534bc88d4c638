use grocery_core::{
    GroceryList, GroceryListRepository, GroceryService, ItemRepository, Product,
    ProductRepository, RepoError, SqliteFileHelper, ValidationError,
};
use tempfile::TempDir;

fn initialized_service() -> (TempDir, GroceryService<SqliteFileHelper>) {
    let dir = tempfile::tempdir().unwrap();
    let mut service = GroceryService::new(SqliteFileHelper::new(dir.path().join("grocery.db")));
    service.initialize().unwrap();
    (dir, service)
}

#[test]
fn deleting_a_list_cascades_to_its_items() {
    let (_dir, mut service) = initialized_service();
    let weekly = service.lists().get(1).unwrap().unwrap();

    let deleted = service.lists().delete(&weekly).unwrap();

    assert_eq!(deleted, Some(weekly));
    assert!(service.items().list_by_list_id(1).unwrap().is_empty());
    let remaining = service.items_mut().list_all().unwrap();
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|item| item.grocery_list_id == 2));
}

#[test]
fn deleting_a_product_cascades_to_items_in_every_list() {
    let (_dir, mut service) = initialized_service();
    let extra = service.add_to_list(2, 1, 3).unwrap();
    let milk = service.products().find_by_name("milk").unwrap().unwrap();
    assert_eq!(milk.id, 1);

    service.products().delete(&milk).unwrap().unwrap();

    assert_eq!(service.items().get(1).unwrap(), None);
    assert_eq!(service.items().get(extra.id).unwrap(), None);
    let remaining = service.items_mut().list_all().unwrap();
    assert_eq!(remaining.len(), 4);
    assert!(remaining.iter().all(|item| item.product_id != milk.id));
}

#[test]
fn lists_and_products_are_seeded_once() {
    let (_dir, mut service) = initialized_service();
    service.initialize().unwrap();

    let lists = service.lists_mut().list_all().unwrap();
    let products = service.products_mut().list_all().unwrap();

    assert_eq!(
        lists.iter().map(|list| list.name.as_str()).collect::<Vec<_>>(),
        ["Weekly shopping", "Weekend barbecue"]
    );
    assert_eq!(products.len(), 5);
    assert_eq!(service.products().mirror(), products.as_slice());
}

#[test]
fn list_crud_roundtrip() {
    let (_dir, mut service) = initialized_service();

    let added = service.lists().add(&GroceryList::new("Camping")).unwrap();
    assert_eq!(service.lists().get(added.id).unwrap(), Some(added.clone()));

    let renamed = GroceryList::with_id(added.id, "Camping trip");
    service.lists().update(&renamed).unwrap();
    assert_eq!(
        service.lists().get(added.id).unwrap().map(|list| list.name),
        Some("Camping trip".to_string())
    );

    assert_eq!(service.lists().delete(&renamed).unwrap(), Some(renamed.clone()));
    assert_eq!(service.lists().delete(&renamed).unwrap(), None);
    assert_eq!(service.lists_mut().list_all().unwrap().len(), 2);
}

#[test]
fn product_lookup_and_validation() {
    let (_dir, service) = initialized_service();

    let added = service.products().add(&Product::new("Oat milk")).unwrap();
    assert_eq!(
        service.products().find_by_name("  OAT MILK ").unwrap(),
        Some(added)
    );
    assert_eq!(service.products().find_by_name("Caviar").unwrap(), None);

    let err = service.products().add(&Product::new(" ")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::BlankName("product"))
    ));
}

#[test]
fn update_of_missing_product_returns_input() {
    let (_dir, service) = initialized_service();
    let ghost = Product::with_id(900, "Ghost pepper");

    assert_eq!(service.products().update(&ghost).unwrap(), ghost);
    assert_eq!(service.products().get(900).unwrap(), None);
}
