//! Store layer: one SQLite-backed store per table.
//!
//! # Responsibility
//! - Own table DDL, seed rows and CRUD SQL for each record type.
//! - Keep an in-memory mirror of the full table per store.
//!
//! # Invariants
//! - Write paths call `validate()` before SQL mutations.
//! - "Not found" is `None`, never an error.
//! - The mirror is replaced wholesale on `initialize()` and `list_all()` only.

use crate::db::DbError;
use crate::model::ValidationError;
use rusqlite::{Connection, Params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grocery_list_store;
pub mod item_store;
pub mod product_store;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Runs `sql` and maps every row with `parse`.
pub(crate) fn query_all<T, P, F>(
    conn: &Connection,
    sql: &str,
    params: P,
    parse: F,
) -> RepoResult<Vec<T>>
where
    P: Params,
    F: Fn(&Row<'_>) -> RepoResult<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut records = Vec::new();

    while let Some(row) = rows.next()? {
        records.push(parse(row)?);
    }

    Ok(records)
}
