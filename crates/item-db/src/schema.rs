//! Database schema definitions.

use rusqlite::Connection;

use crate::DbError;

pub fn run_migrations(conn: &Connection) -> Result<(), DbError> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// One row per QL range of an item; a (lowid, highid) pair can span
/// several ranges.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    lowid INTEGER NOT NULL,
    highid INTEGER NOT NULL,
    lowql INTEGER NOT NULL,
    highql INTEGER NOT NULL,
    name TEXT NOT NULL,
    PRIMARY KEY (lowid, highid, lowql, highql)
);

CREATE INDEX IF NOT EXISTS idx_items_lowid ON items(lowid);
CREATE INDEX IF NOT EXISTS idx_items_highid ON items(highid);
CREATE INDEX IF NOT EXISTS idx_items_name ON items(name);
"#;
