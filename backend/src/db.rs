//! SQLite access: connection opening and idempotent schema setup.
//!
//! Handlers open a connection per request against the configured database
//! file; there is no pool and no shared in-process state, so concurrent
//! requests synchronize only through SQLite itself.

use rusqlite::Connection;
use std::path::Path;

pub fn open(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    // Writers from concurrent requests otherwise trip SQLITE_BUSY immediately.
    conn.busy_timeout(std::time::Duration::from_secs(5))?;
    Ok(conn)
}

/// Creates the tables if they do not exist yet. Called once at startup.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS lessons (
            id       TEXT PRIMARY KEY,
            semester TEXT NOT NULL,
            subject  TEXT NOT NULL,
            title    TEXT NOT NULL,
            url      TEXT NOT NULL,
            ord      INTEGER NOT NULL
         );
         CREATE INDEX IF NOT EXISTS idx_lessons_partition
             ON lessons (semester, subject, ord);
         CREATE TABLE IF NOT EXISTS users (
            id            TEXT PRIMARY KEY,
            username      TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            salt          TEXT NOT NULL,
            role          TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS sessions (
            token      TEXT PRIMARY KEY,
            username   TEXT NOT NULL,
            role       TEXT NOT NULL,
            created_at INTEGER NOT NULL
         );",
    )
}
