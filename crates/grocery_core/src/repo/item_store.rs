//! Grocery list item store.
//!
//! # Responsibility
//! - Own the `GroceryListItem` table: schema, seed rows and CRUD.
//! - Mirror the full table in memory for cheap listing.
//!
//! # Invariants
//! - `initialize()` is idempotent: DDL uses `IF NOT EXISTS`, seeds use
//!   `INSERT OR IGNORE` keyed by `Id`.
//! - Parent tables (`GroceryList`, `Product`) must exist before
//!   `initialize()`; deleting a parent cascades to its items.
//! - `add`/`update`/`delete` never touch the mirror.

use super::{query_all, RepoError, RepoResult};
use crate::db::ConnectionHelper;
use crate::model::item::GroceryListItem;
use crate::model::RecordId;
use log::{info, warn};
use rusqlite::{params, Connection, Row};

pub const ITEM_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS GroceryListItem (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    GroceryListId INTEGER NOT NULL REFERENCES GroceryList(Id) ON DELETE CASCADE,
    ProductId INTEGER NOT NULL REFERENCES Product(Id) ON DELETE CASCADE,
    Amount INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_grocery_list_item_list ON GroceryListItem(GroceryListId);";

/// Fixed rows present after every `initialize()`.
pub const SEED_ITEMS: [GroceryListItem; 5] = [
    GroceryListItem::with_id(1, 1, 1, 2),
    GroceryListItem::with_id(2, 1, 2, 1),
    GroceryListItem::with_id(3, 1, 3, 12),
    GroceryListItem::with_id(4, 2, 4, 8),
    GroceryListItem::with_id(5, 2, 5, 1),
];

const ITEM_SELECT_SQL: &str = "SELECT Id, GroceryListId, ProductId, Amount FROM GroceryListItem";

/// Repository interface for grocery list item operations.
pub trait ItemRepository {
    /// Creates the table, inserts missing seed rows and loads the mirror.
    fn initialize(&mut self) -> RepoResult<()>;
    /// Returns every item ordered by id and replaces the mirror with it.
    fn list_all(&mut self) -> RepoResult<Vec<GroceryListItem>>;
    /// Returns the items of one list. Unknown lists yield an empty vec.
    fn list_by_list_id(&self, list_id: RecordId) -> RepoResult<Vec<GroceryListItem>>;
    fn get(&self, id: RecordId) -> RepoResult<Option<GroceryListItem>>;
    /// Inserts `item` ignoring its id and returns it with the assigned id.
    fn add(&self, item: &GroceryListItem) -> RepoResult<GroceryListItem>;
    /// Overwrites the row matching `item.id`. Returns `item` even when no
    /// row matched.
    fn update(&self, item: &GroceryListItem) -> RepoResult<GroceryListItem>;
    /// Removes the row matching `item.id`; `None` when nothing was removed.
    fn delete(&self, item: &GroceryListItem) -> RepoResult<Option<GroceryListItem>>;
}

/// SQLite-backed item store over an injected connection helper.
pub struct ItemStore<H: ConnectionHelper> {
    helper: H,
    mirror: Vec<GroceryListItem>,
}

impl<H: ConnectionHelper> ItemStore<H> {
    pub fn new(helper: H) -> Self {
        Self {
            helper,
            mirror: Vec::new(),
        }
    }

    /// In-memory copy of the table as of the last `initialize()`/`list_all()`.
    pub fn mirror(&self) -> &[GroceryListItem] {
        &self.mirror
    }

    pub fn helper(&self) -> &H {
        &self.helper
    }

    fn seed(&self) -> RepoResult<usize> {
        let inserted = self.helper.with_transaction(|tx| {
            let mut stmt = tx.prepare(
                "INSERT OR IGNORE INTO GroceryListItem (Id, GroceryListId, ProductId, Amount)
                 VALUES (?1, ?2, ?3, ?4);",
            )?;
            let mut inserted = 0;
            for seed in &SEED_ITEMS {
                inserted += stmt.execute(params![
                    seed.id,
                    seed.grocery_list_id,
                    seed.product_id,
                    seed.amount,
                ])?;
            }
            Ok(inserted)
        })?;
        Ok(inserted)
    }
}

impl<H: ConnectionHelper> ItemRepository for ItemStore<H> {
    fn initialize(&mut self) -> RepoResult<()> {
        self.helper.create_table(ITEM_TABLE_DDL)?;
        let seeded = self.seed()?;
        let items = self.list_all()?;
        info!(
            "event=store_init module=repo store=item status=ok seeded={} rows={}",
            seeded,
            items.len()
        );
        Ok(())
    }

    fn list_all(&mut self) -> RepoResult<Vec<GroceryListItem>> {
        let conn = self.helper.open()?;
        let items = query_all(
            &conn,
            &format!("{ITEM_SELECT_SQL} ORDER BY Id ASC;"),
            [],
            parse_item_row,
        )?;
        self.helper.close(conn)?;

        self.mirror = items.clone();
        Ok(items)
    }

    fn list_by_list_id(&self, list_id: RecordId) -> RepoResult<Vec<GroceryListItem>> {
        let conn = self.helper.open()?;
        let items = query_all(
            &conn,
            &format!("{ITEM_SELECT_SQL} WHERE GroceryListId = ?1 ORDER BY Id ASC;"),
            [list_id],
            parse_item_row,
        )?;
        self.helper.close(conn)?;
        Ok(items)
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<GroceryListItem>> {
        let conn = self.helper.open()?;
        let item = fetch_item(&conn, id)?;
        self.helper.close(conn)?;
        Ok(item)
    }

    fn add(&self, item: &GroceryListItem) -> RepoResult<GroceryListItem> {
        item.validate()?;

        let conn = self.helper.open()?;
        conn.execute(
            "INSERT INTO GroceryListItem (GroceryListId, ProductId, Amount)
             VALUES (?1, ?2, ?3);",
            params![item.grocery_list_id, item.product_id, item.amount],
        )?;
        let id = conn.last_insert_rowid();
        self.helper.close(conn)?;

        Ok(GroceryListItem { id, ..item.clone() })
    }

    fn update(&self, item: &GroceryListItem) -> RepoResult<GroceryListItem> {
        item.validate()?;

        let conn = self.helper.open()?;
        let changed = conn.execute(
            "UPDATE GroceryListItem
             SET
                GroceryListId = ?1,
                ProductId = ?2,
                Amount = ?3
             WHERE Id = ?4;",
            params![item.grocery_list_id, item.product_id, item.amount, item.id],
        )?;
        self.helper.close(conn)?;

        if changed == 0 {
            warn!(
                "event=item_update module=repo status=noop id={} reason=row_missing",
                item.id
            );
        }

        Ok(item.clone())
    }

    fn delete(&self, item: &GroceryListItem) -> RepoResult<Option<GroceryListItem>> {
        let conn = self.helper.open()?;
        let changed = conn.execute("DELETE FROM GroceryListItem WHERE Id = ?1;", [item.id])?;
        self.helper.close(conn)?;

        if changed == 0 {
            return Ok(None);
        }

        Ok(Some(item.clone()))
    }
}

fn fetch_item(conn: &Connection, id: RecordId) -> RepoResult<Option<GroceryListItem>> {
    let mut stmt = conn.prepare(&format!("{ITEM_SELECT_SQL} WHERE Id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_item_row(row)?));
    }

    Ok(None)
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<GroceryListItem> {
    let item = GroceryListItem {
        id: row.get("Id")?,
        grocery_list_id: row.get("GroceryListId")?,
        product_id: row.get("ProductId")?,
        amount: row.get("Amount")?,
    };
    item.validate().map_err(|err| {
        RepoError::InvalidData(format!(
            "GroceryListItem row {} is invalid: {err}",
            item.id
        ))
    })?;
    Ok(item)
}
