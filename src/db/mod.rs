//! Database module: row model, schema and the sqlite storage-access object.
//!
//! Layout:
//! - `models.rs`: Rust struct mirroring a `quotes` row and its wire conversion
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: pool owner (`QuotesStorage`) and per-request `QuoteSession`

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::DbQuote;
pub use schema::SQLITE_INIT;
pub use sqlite::{QuoteSession, QuotesStorage, SqlitePool};
