//! Grocery list store.
//!
//! # Invariants
//! - Deleting a list cascades to its `GroceryListItem` rows.
//! - Seed rows are keyed by `Id` and only inserted when absent.

use super::{query_all, RepoError, RepoResult};
use crate::db::ConnectionHelper;
use crate::model::grocery_list::GroceryList;
use crate::model::RecordId;
use log::{info, warn};
use rusqlite::{params, Connection, Row};

pub const GROCERY_LIST_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS GroceryList (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL
);";

pub const SEED_LISTS: [(RecordId, &str); 2] = [
    (1, "Weekly shopping"),
    (2, "Weekend barbecue"),
];

const LIST_SELECT_SQL: &str = "SELECT Id, Name FROM GroceryList";

/// Repository interface for grocery list operations.
pub trait GroceryListRepository {
    fn initialize(&mut self) -> RepoResult<()>;
    fn list_all(&mut self) -> RepoResult<Vec<GroceryList>>;
    fn get(&self, id: RecordId) -> RepoResult<Option<GroceryList>>;
    fn add(&self, list: &GroceryList) -> RepoResult<GroceryList>;
    fn update(&self, list: &GroceryList) -> RepoResult<GroceryList>;
    /// Removes the list and, through the schema, all of its items.
    fn delete(&self, list: &GroceryList) -> RepoResult<Option<GroceryList>>;
}

pub struct GroceryListStore<H: ConnectionHelper> {
    helper: H,
    mirror: Vec<GroceryList>,
}

impl<H: ConnectionHelper> GroceryListStore<H> {
    pub fn new(helper: H) -> Self {
        Self {
            helper,
            mirror: Vec::new(),
        }
    }

    pub fn mirror(&self) -> &[GroceryList] {
        &self.mirror
    }
}

impl<H: ConnectionHelper> GroceryListRepository for GroceryListStore<H> {
    fn initialize(&mut self) -> RepoResult<()> {
        self.helper.create_table(GROCERY_LIST_TABLE_DDL)?;
        let seeded = self.helper.with_transaction(|tx| {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO GroceryList (Id, Name) VALUES (?1, ?2);")?;
            let mut inserted = 0;
            for (id, name) in SEED_LISTS {
                inserted += stmt.execute(params![id, name])?;
            }
            Ok(inserted)
        })?;
        let lists = self.list_all()?;
        info!(
            "event=store_init module=repo store=grocery_list status=ok seeded={} rows={}",
            seeded,
            lists.len()
        );
        Ok(())
    }

    fn list_all(&mut self) -> RepoResult<Vec<GroceryList>> {
        let conn = self.helper.open()?;
        let lists = query_all(
            &conn,
            &format!("{LIST_SELECT_SQL} ORDER BY Id ASC;"),
            [],
            parse_list_row,
        )?;
        self.helper.close(conn)?;

        self.mirror = lists.clone();
        Ok(lists)
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<GroceryList>> {
        let conn = self.helper.open()?;
        let list = fetch_list(&conn, id)?;
        self.helper.close(conn)?;
        Ok(list)
    }

    fn add(&self, list: &GroceryList) -> RepoResult<GroceryList> {
        list.validate()?;

        let conn = self.helper.open()?;
        conn.execute(
            "INSERT INTO GroceryList (Name) VALUES (?1);",
            [list.name.as_str()],
        )?;
        let id = conn.last_insert_rowid();
        self.helper.close(conn)?;

        Ok(GroceryList::with_id(id, list.name.as_str()))
    }

    fn update(&self, list: &GroceryList) -> RepoResult<GroceryList> {
        list.validate()?;

        let conn = self.helper.open()?;
        let changed = conn.execute(
            "UPDATE GroceryList SET Name = ?1 WHERE Id = ?2;",
            params![list.name.as_str(), list.id],
        )?;
        self.helper.close(conn)?;

        if changed == 0 {
            warn!(
                "event=grocery_list_update module=repo status=noop id={} reason=row_missing",
                list.id
            );
        }

        Ok(list.clone())
    }

    fn delete(&self, list: &GroceryList) -> RepoResult<Option<GroceryList>> {
        let conn = self.helper.open()?;
        let changed = conn.execute("DELETE FROM GroceryList WHERE Id = ?1;", [list.id])?;
        self.helper.close(conn)?;

        if changed == 0 {
            return Ok(None);
        }

        Ok(Some(list.clone()))
    }
}

fn fetch_list(conn: &Connection, id: RecordId) -> RepoResult<Option<GroceryList>> {
    let mut stmt = conn.prepare(&format!("{LIST_SELECT_SQL} WHERE Id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_list_row(row)?));
    }

    Ok(None)
}

fn parse_list_row(row: &Row<'_>) -> RepoResult<GroceryList> {
    let list = GroceryList {
        id: row.get("Id")?,
        name: row.get("Name")?,
    };
    list.validate().map_err(|err| {
        RepoError::InvalidData(format!("GroceryList row {} is invalid: {err}", list.id))
    })?;
    Ok(list)
}
