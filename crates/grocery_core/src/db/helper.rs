//! Connection helper contract and file-backed SQLite implementation.
//!
//! # Responsibility
//! - Open file SQLite connections and configure required pragmas.
//! - Run DDL batches and short write transactions on a fresh connection.
//!
//! # Invariants
//! - Returned connections have `foreign_keys=ON`.
//! - `with_transaction` commits only when the closure succeeds.

use super::DbResult;
use log::{debug, error};
use rusqlite::{Connection, Transaction};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection lifecycle collaborator injected into every store.
///
/// Implementors only need `open`; the execute helpers are built on top of it.
pub trait ConnectionHelper {
    /// Opens a new, fully configured connection.
    fn open(&self) -> DbResult<Connection>;

    /// Closes a connection and reports the close failure, if any.
    fn close(&self, conn: Connection) -> DbResult<()> {
        conn.close().map_err(|(_, err)| err.into())
    }

    /// Executes a DDL batch (usually `CREATE TABLE IF NOT EXISTS`).
    fn create_table(&self, ddl: &str) -> DbResult<()> {
        let conn = self.open()?;
        conn.execute_batch(ddl)?;
        self.close(conn)
    }

    /// Runs `f` inside one transaction on a fresh connection.
    ///
    /// # Side effects
    /// - Commits when `f` returns `Ok`; rolls back on drop otherwise.
    fn with_transaction<T, F>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&Transaction<'_>) -> DbResult<T>,
    {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;
        let value = f(&tx)?;
        tx.commit()?;
        self.close(conn)?;
        Ok(value)
    }
}

/// Opens a SQLite database file at a fixed path on every call.
#[derive(Debug, Clone)]
pub struct SqliteFileHelper {
    path: PathBuf,
    busy_timeout: Duration,
}

impl SqliteFileHelper {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConnectionHelper for SqliteFileHelper {
    /// # Side effects
    /// - Creates the parent directory of the database file when missing.
    /// - Emits `db_open` logging events with duration and status.
    fn open(&self) -> DbResult<Connection> {
        let started_at = Instant::now();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = match Connection::open(&self.path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=file duration_ms={} error_code=db_open_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        match configure_connection(&conn, self.busy_timeout) {
            Ok(()) => {
                debug!(
                    "event=db_open module=db status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(conn)
            }
            Err(err) => {
                error!(
                    "event=db_open module=db status=error mode=file duration_ms={} error_code=db_configure_failed error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn configure_connection(conn: &Connection, busy_timeout: Duration) -> DbResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(busy_timeout)?;
    Ok(())
}
