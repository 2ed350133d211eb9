// src/db/storage.rs
use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Fetch a whole stored document by key.
pub fn read_document(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row(
        "select value from storage where key = ?",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .map_err(|e| ServerError::DbError(format!("read {key} failed: {e}")))
}

/// Replace the document stored under `key`.
pub fn write_document(
    conn: &Connection,
    key: &str,
    value: &str,
    now: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into storage (key, value, updated_at)
        values (?1, ?2, ?3)
        on conflict(key) do update set
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
        params![key, value, now],
    )
    .map_err(|e| ServerError::DbError(format!("write {key} failed: {e}")))?;
    Ok(())
}
