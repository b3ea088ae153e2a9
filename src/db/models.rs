use crate::types::QuoteRead;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DbQuote {
    pub id: i64,
    pub text: String,
    pub author: Option<String>,
}

impl From<DbQuote> for QuoteRead {
    fn from(d: DbQuote) -> Self {
        QuoteRead {
            id: d.id,
            text: d.text,
            author: d.author,
        }
    }
}
