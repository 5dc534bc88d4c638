//! SQLite connection lifecycle shared by every store.
//!
//! # Responsibility
//! - Open, configure and close SQLite connections for grocery core.
//! - Offer the small execute helpers stores build on (DDL, transactions).
//!
//! # Invariants
//! - Every connection handed to a store has `foreign_keys=ON`.
//! - Connections are short-lived: one per store operation.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod helper;

pub use helper::{ConnectionHelper, SqliteFileHelper, DEFAULT_BUSY_TIMEOUT};

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    Io(std::io::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "database file i/o failed: {err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<std::io::Error> for DbError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
