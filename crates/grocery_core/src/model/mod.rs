//! Grocery domain records.
//!
//! # Responsibility
//! - Define the plain records persisted by the stores.
//! - Own write-path validation rules.
//!
//! # Invariants
//! - Identities are integers assigned by the database.
//! - Unsaved records carry `UNASSIGNED_ID`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod grocery_list;
pub mod item;
pub mod product;

/// Integer identity assigned by SQLite `AUTOINCREMENT`.
pub type RecordId = i64;

/// Placeholder identity for records that have not been inserted yet.
pub const UNASSIGNED_ID: RecordId = 0;

/// Validation failures raised before any SQL mutation runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NonPositiveAmount(i64),
    BlankName(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "amount must be a positive integer, got {amount}")
            }
            Self::BlankName(record) => write!(f, "{record} name cannot be blank"),
        }
    }
}

impl Error for ValidationError {}
