use crate::db::sqlite::QuotesStorage;
use crate::error::InspireError;
use crate::types::{NewQuote, QuoteRead};
use rand::Rng;
use tracing::{debug, info};

/// Quote operations over one storage session per call.
#[derive(Clone)]
pub struct QuoteOps {
    storage: QuotesStorage,
    max_limit: u32,
}

impl QuoteOps {
    pub fn new(storage: QuotesStorage, max_limit: u32) -> Self {
        Self { storage, max_limit }
    }

    /// Page through quotes in id order. Never fails on an empty result.
    pub async fn list(
        &self,
        author: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<QuoteRead>, InspireError> {
        let author = author_filter(author);
        let limit = limit.min(u64::from(self.max_limit));
        let mut session = self.storage.session().await?;
        let rows = session
            .list(author, saturating_i64(skip), saturating_i64(limit))
            .await?;
        debug!(?author, skip, limit, returned = rows.len(), "listed quotes");
        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Pick one matching quote uniformly at random.
    pub async fn random(&self, author: Option<&str>) -> Result<QuoteRead, InspireError> {
        let author = author_filter(author);
        let mut session = self.storage.session().await?;

        let count = session.count(author).await?;
        if count == 0 {
            debug!(?author, "no quotes to pick from");
            return Err(InspireError::NotFound);
        }

        let offset = rand::thread_rng().gen_range(0..count);
        session
            .nth(author, offset)
            .await?
            .map(Into::into)
            .ok_or(InspireError::NotFound)
    }

    /// Store a validated quote, rejecting text that already exists.
    pub async fn create(&self, quote: NewQuote) -> Result<QuoteRead, InspireError> {
        let mut session = self.storage.session().await?;

        if session.find_by_text(quote.text()).await?.is_some() {
            debug!("rejecting quote with existing text");
            return Err(InspireError::Duplicate);
        }

        // The unique constraint still catches a concurrent create of the same text.
        let created: QuoteRead = session.insert(&quote).await?.into();
        info!(id = created.id, quote = %created.short_text(50), "quote created");
        Ok(created)
    }
}

/// sqlite binds OFFSET/LIMIT as i64.
fn saturating_i64(n: u64) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// An absent or empty author means "no filter".
fn author_filter(author: Option<&str>) -> Option<&str> {
    author.filter(|a| !a.is_empty())
}
