//! SQL DDL for initializing the quotes storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (ids are never reused)
/// - `text` NOT NULL UNIQUE, the authority for duplicate detection
/// - `author` nullable, indexed for exact-match filtering
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    text TEXT NOT NULL UNIQUE,
    author TEXT NULL
);

CREATE INDEX IF NOT EXISTS idx_quotes_author ON quotes(author);
"#;
