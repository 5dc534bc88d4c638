//! Grocery use-case service.
//!
//! # Responsibility
//! - Initialize every store in foreign-key order over one helper.
//! - Offer small conveniences on top of the store contracts.
//!
//! # Invariants
//! - Lists and products are initialized before items.
//! - Service APIs never bypass store validation/persistence contracts.

use crate::db::ConnectionHelper;
use crate::model::item::GroceryListItem;
use crate::model::RecordId;
use crate::repo::grocery_list_store::{GroceryListRepository, GroceryListStore};
use crate::repo::item_store::{ItemRepository, ItemStore};
use crate::repo::product_store::{ProductRepository, ProductStore};
use crate::repo::RepoResult;
use log::info;
use std::time::Instant;

/// Owns one store per table, all sharing clones of the same helper.
pub struct GroceryService<H: ConnectionHelper + Clone> {
    lists: GroceryListStore<H>,
    products: ProductStore<H>,
    items: ItemStore<H>,
}

impl<H: ConnectionHelper + Clone> GroceryService<H> {
    pub fn new(helper: H) -> Self {
        Self {
            lists: GroceryListStore::new(helper.clone()),
            products: ProductStore::new(helper.clone()),
            items: ItemStore::new(helper),
        }
    }

    /// Creates missing tables, inserts missing seed rows, loads mirrors.
    pub fn initialize(&mut self) -> RepoResult<()> {
        let started_at = Instant::now();
        self.lists.initialize()?;
        self.products.initialize()?;
        self.items.initialize()?;
        info!(
            "event=service_init module=service status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    /// Adds `amount` of a product to a list.
    ///
    /// Unknown list/product ids surface as a foreign-key storage error.
    pub fn add_to_list(
        &self,
        list_id: RecordId,
        product_id: RecordId,
        amount: i64,
    ) -> RepoResult<GroceryListItem> {
        self.items.add(&GroceryListItem::new(list_id, product_id, amount))
    }

    pub fn lists(&self) -> &GroceryListStore<H> {
        &self.lists
    }

    pub fn lists_mut(&mut self) -> &mut GroceryListStore<H> {
        &mut self.lists
    }

    pub fn products(&self) -> &ProductStore<H> {
        &self.products
    }

    pub fn products_mut(&mut self) -> &mut ProductStore<H> {
        &mut self.products
    }

    pub fn items(&self) -> &ItemStore<H> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut ItemStore<H> {
        &mut self.items
    }
}
