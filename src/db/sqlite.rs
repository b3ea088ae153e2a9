use crate::db::models::DbQuote;
use crate::db::schema::SQLITE_INIT;
use crate::error::InspireError;
use crate::types::NewQuote;
use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Connection, Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, warn};

pub type SqlitePool = Pool<Sqlite>;

/// Storage-access object: owns the pool and hands out one session per request.
#[derive(Clone)]
pub struct QuotesStorage {
    pool: SqlitePool,
}

impl QuotesStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating the file if missing) and bootstrap the schema.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, InspireError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = pool_options(database_url, max_connections)
            .connect_with(connect_opts)
            .await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), InspireError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Check out a connection for one unit of work.
    /// It goes back to the pool when the session is dropped.
    pub async fn session(&self) -> Result<QuoteSession, InspireError> {
        let conn = self.pool.acquire().await?;
        Ok(QuoteSession { conn })
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

fn pool_size(database_url: &str, requested: u32) -> u32 {
    if is_in_memory(database_url) {
        1
    } else {
        requested.max(1)
    }
}

/// An in-memory database lives only as long as a connection to it, so that
/// pool keeps exactly one connection open for its whole lifetime.
fn pool_options(database_url: &str, max_connections: u32) -> SqlitePoolOptions {
    let opts = SqlitePoolOptions::new().max_connections(pool_size(database_url, max_connections));
    if is_in_memory(database_url) {
        opts.min_connections(1).idle_timeout(None).max_lifetime(None)
    } else {
        opts
    }
}

/// One request's private handle on storage.
pub struct QuoteSession {
    conn: PoolConnection<Sqlite>,
}

impl QuoteSession {
    /// Quotes in id order, optionally restricted to an exact author.
    pub async fn list(
        &mut self,
        author: Option<&str>,
        skip: i64,
        limit: i64,
    ) -> Result<Vec<DbQuote>, InspireError> {
        let rows = sqlx::query_as::<_, DbQuote>(
            r#"SELECT id, text, author FROM quotes
               WHERE (?1 IS NULL OR author = ?1)
               ORDER BY id
               LIMIT ?2 OFFSET ?3"#,
        )
        .bind(author)
        .bind(limit)
        .bind(skip)
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(rows)
    }

    pub async fn count(&mut self, author: Option<&str>) -> Result<i64, InspireError> {
        let rec: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM quotes WHERE (?1 IS NULL OR author = ?1)")
                .bind(author)
                .fetch_one(&mut *self.conn)
                .await?;
        Ok(rec.0)
    }

    /// The quote at `offset` under the same ordering as [`QuoteSession::list`].
    pub async fn nth(
        &mut self,
        author: Option<&str>,
        offset: i64,
    ) -> Result<Option<DbQuote>, InspireError> {
        let mut rows = self.list(author, offset, 1).await?;
        Ok(rows.pop())
    }

    pub async fn find_by_text(&mut self, text: &str) -> Result<Option<DbQuote>, InspireError> {
        let row = sqlx::query_as::<_, DbQuote>(
            "SELECT id, text, author FROM quotes WHERE text = ? LIMIT 1",
        )
        .bind(text)
        .fetch_optional(&mut *self.conn)
        .await?;
        Ok(row)
    }

    pub async fn get_by_id(&mut self, id: i64) -> Result<DbQuote, InspireError> {
        let row =
            sqlx::query_as::<_, DbQuote>("SELECT id, text, author FROM quotes WHERE id = ?")
                .bind(id)
                .fetch_one(&mut *self.conn)
                .await?;
        Ok(row)
    }

    /// Insert inside a transaction, then re-read the committed row.
    ///
    /// A unique-constraint hit surfaces as [`InspireError::Duplicate`]; any
    /// failure rolls the transaction back first.
    pub async fn insert(&mut self, quote: &NewQuote) -> Result<DbQuote, InspireError> {
        let mut tx = self.conn.begin().await?;

        let inserted = sqlx::query("INSERT INTO quotes (text, author) VALUES (?, ?)")
            .bind(quote.text())
            .bind(quote.author())
            .execute(&mut *tx)
            .await;

        let id = match inserted {
            Ok(done) => done.last_insert_rowid(),
            Err(e) => {
                if let Err(rb) = tx.rollback().await {
                    warn!(error = %rb, "rollback after failed insert also failed");
                }
                return Err(e.into());
            }
        };

        // A failed commit leaves nothing behind; sqlite rolls the transaction back.
        tx.commit().await?;
        debug!(id, "quote row committed");

        self.get_by_id(id).await
    }
}
