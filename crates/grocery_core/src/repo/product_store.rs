//! Product store.
//!
//! # Invariants
//! - Deleting a product cascades to every `GroceryListItem` referencing it.
//! - Name lookups are case-insensitive exact matches.

use super::{query_all, RepoError, RepoResult};
use crate::db::ConnectionHelper;
use crate::model::product::Product;
use crate::model::RecordId;
use log::{info, warn};
use rusqlite::{params, Connection, Row};

pub const PRODUCT_TABLE_DDL: &str = "CREATE TABLE IF NOT EXISTS Product (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    Name TEXT NOT NULL
);";

pub const SEED_PRODUCTS: [(RecordId, &str); 5] = [
    (1, "Milk"),
    (2, "Bread"),
    (3, "Eggs"),
    (4, "Sausages"),
    (5, "Charcoal"),
];

const PRODUCT_SELECT_SQL: &str = "SELECT Id, Name FROM Product";

/// Repository interface for product operations.
pub trait ProductRepository {
    fn initialize(&mut self) -> RepoResult<()>;
    fn list_all(&mut self) -> RepoResult<Vec<Product>>;
    fn get(&self, id: RecordId) -> RepoResult<Option<Product>>;
    /// Case-insensitive exact name match, lowest id first.
    fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>>;
    fn add(&self, product: &Product) -> RepoResult<Product>;
    fn update(&self, product: &Product) -> RepoResult<Product>;
    /// Removes the product and, through the schema, every item using it.
    fn delete(&self, product: &Product) -> RepoResult<Option<Product>>;
}

pub struct ProductStore<H: ConnectionHelper> {
    helper: H,
    mirror: Vec<Product>,
}

impl<H: ConnectionHelper> ProductStore<H> {
    pub fn new(helper: H) -> Self {
        Self {
            helper,
            mirror: Vec::new(),
        }
    }

    pub fn mirror(&self) -> &[Product] {
        &self.mirror
    }
}

impl<H: ConnectionHelper> ProductRepository for ProductStore<H> {
    fn initialize(&mut self) -> RepoResult<()> {
        self.helper.create_table(PRODUCT_TABLE_DDL)?;
        let seeded = self.helper.with_transaction(|tx| {
            let mut stmt =
                tx.prepare("INSERT OR IGNORE INTO Product (Id, Name) VALUES (?1, ?2);")?;
            let mut inserted = 0;
            for (id, name) in SEED_PRODUCTS {
                inserted += stmt.execute(params![id, name])?;
            }
            Ok(inserted)
        })?;
        let products = self.list_all()?;
        info!(
            "event=store_init module=repo store=product status=ok seeded={} rows={}",
            seeded,
            products.len()
        );
        Ok(())
    }

    fn list_all(&mut self) -> RepoResult<Vec<Product>> {
        let conn = self.helper.open()?;
        let products = query_all(
            &conn,
            &format!("{PRODUCT_SELECT_SQL} ORDER BY Id ASC;"),
            [],
            parse_product_row,
        )?;
        self.helper.close(conn)?;

        self.mirror = products.clone();
        Ok(products)
    }

    fn get(&self, id: RecordId) -> RepoResult<Option<Product>> {
        let conn = self.helper.open()?;
        let product = fetch_product(&conn, "Id = ?1", id)?;
        self.helper.close(conn)?;
        Ok(product)
    }

    fn find_by_name(&self, name: &str) -> RepoResult<Option<Product>> {
        let conn = self.helper.open()?;
        let product = fetch_product(&conn, "Name = ?1 COLLATE NOCASE", name.trim())?;
        self.helper.close(conn)?;
        Ok(product)
    }

    fn add(&self, product: &Product) -> RepoResult<Product> {
        product.validate()?;

        let conn = self.helper.open()?;
        conn.execute(
            "INSERT INTO Product (Name) VALUES (?1);",
            [product.name.as_str()],
        )?;
        let id = conn.last_insert_rowid();
        self.helper.close(conn)?;

        Ok(Product::with_id(id, product.name.as_str()))
    }

    fn update(&self, product: &Product) -> RepoResult<Product> {
        product.validate()?;

        let conn = self.helper.open()?;
        let changed = conn.execute(
            "UPDATE Product SET Name = ?1 WHERE Id = ?2;",
            params![product.name.as_str(), product.id],
        )?;
        self.helper.close(conn)?;

        if changed == 0 {
            warn!(
                "event=product_update module=repo status=noop id={} reason=row_missing",
                product.id
            );
        }

        Ok(product.clone())
    }

    fn delete(&self, product: &Product) -> RepoResult<Option<Product>> {
        let conn = self.helper.open()?;
        let changed = conn.execute("DELETE FROM Product WHERE Id = ?1;", [product.id])?;
        self.helper.close(conn)?;

        if changed == 0 {
            return Ok(None);
        }

        Ok(Some(product.clone()))
    }
}

fn fetch_product<P: rusqlite::ToSql>(
    conn: &Connection,
    predicate: &str,
    value: P,
) -> RepoResult<Option<Product>> {
    let mut stmt = conn.prepare(&format!(
        "{PRODUCT_SELECT_SQL} WHERE {predicate} ORDER BY Id ASC LIMIT 1;"
    ))?;
    let mut rows = stmt.query([value])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_product_row(row)?));
    }

    Ok(None)
}

fn parse_product_row(row: &Row<'_>) -> RepoResult<Product> {
    let product = Product {
        id: row.get("Id")?,
        name: row.get("Name")?,
    };
    product.validate().map_err(|err| {
        RepoError::InvalidData(format!("Product row {} is invalid: {err}", product.id))
    })?;
    Ok(product)
}
