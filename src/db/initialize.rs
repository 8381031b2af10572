use crate::errors::AppResult;
use rusqlite::{Connection, OptionalExtension};

/// Create the `products` table if it does not exist yet.
///
/// `price` is declared TEXT: with NUMERIC affinity SQLite would turn "2.50"
/// into a REAL and lose exactness. `creation_time` is filled by the engine;
/// the application never writes it.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS products (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            producer        TEXT NOT NULL,
            price           TEXT NOT NULL,
            expiration_date TEXT NOT NULL,
            creation_time   TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `products` table exists.
pub fn products_table_exists(conn: &Connection) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='products'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}
