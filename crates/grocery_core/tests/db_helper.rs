use grocery_core::{ConnectionHelper, DbError, SqliteFileHelper};
use rusqlite::Connection;
use std::time::Duration;

fn table_exists(conn: &Connection, table_name: &str) -> bool {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    exists == 1
}

#[test]
fn open_enables_foreign_keys() {
    let dir = tempfile::tempdir().unwrap();
    let helper = SqliteFileHelper::new(dir.path().join("fk.db"));

    let conn = helper.open().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
    helper.close(conn).unwrap();
}

#[test]
fn open_creates_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("grocery.db");
    let helper = SqliteFileHelper::new(&path).with_busy_timeout(Duration::from_millis(100));

    helper.create_table("CREATE TABLE IF NOT EXISTS probe (id INTEGER);").unwrap();

    assert!(path.exists());
    assert_eq!(helper.path(), path.as_path());
}

#[test]
fn create_table_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let helper = SqliteFileHelper::new(dir.path().join("ddl.db"));
    let ddl = "CREATE TABLE IF NOT EXISTS probe (id INTEGER PRIMARY KEY);";

    helper.create_table(ddl).unwrap();
    helper.create_table(ddl).unwrap();

    assert!(table_exists(&helper.open().unwrap(), "probe"));
}

#[test]
fn with_transaction_commits_on_success() {
    let dir = tempfile::tempdir().unwrap();
    let helper = SqliteFileHelper::new(dir.path().join("tx.db"));
    helper
        .create_table("CREATE TABLE probe (id INTEGER PRIMARY KEY);")
        .unwrap();

    let inserted = helper
        .with_transaction(|tx| {
            let mut inserted = 0;
            for id in 1..=3 {
                inserted += tx.execute("INSERT INTO probe (id) VALUES (?1);", [id])?;
            }
            Ok(inserted)
        })
        .unwrap();

    assert_eq!(inserted, 3);
    let count: i64 = helper
        .open()
        .unwrap()
        .query_row("SELECT COUNT(*) FROM probe;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 3);
}

#[test]
fn with_transaction_rolls_back_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let helper = SqliteFileHelper::new(dir.path().join("rollback.db"));
    helper
        .create_table("CREATE TABLE probe (id INTEGER PRIMARY KEY);")
        .unwrap();

    let result: Result<(), DbError> = helper.with_transaction(|tx| {
        tx.execute("INSERT INTO probe (id) VALUES (1);", [])?;
        tx.execute("INSERT INTO probe (id) VALUES (1);", [])?;
        Ok(())
    });

    assert!(matches!(result, Err(DbError::Sqlite(_))));
    let count: i64 = helper
        .open()
        .unwrap()
        .query_row("SELECT COUNT(*) FROM probe;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}
