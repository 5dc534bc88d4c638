//! Core data access for the grocery app.
//! Stores over SQLite for grocery lists, products and list items.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, StoreConfig};
pub use db::{ConnectionHelper, DbError, DbResult, SqliteFileHelper};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::grocery_list::GroceryList;
pub use model::item::GroceryListItem;
pub use model::product::Product;
pub use model::{RecordId, ValidationError, UNASSIGNED_ID};
pub use repo::grocery_list_store::{GroceryListRepository, GroceryListStore};
pub use repo::item_store::{ItemRepository, ItemStore, SEED_ITEMS};
pub use repo::product_store::{ProductRepository, ProductStore};
pub use repo::{RepoError, RepoResult};
pub use service::grocery_service::GroceryService;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
