use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use serde::Deserialize;

use crate::error::InspireError;
use crate::types::{NewQuote, QuoteCreate, ValidationError};

const DEFAULT_SKIP: u64 = 0;
const DEFAULT_LIMIT: u64 = 10;

/// JSON body parsed into [`QuoteCreate`] and validated into a [`NewQuote`].
/// Rejects before the handler runs, so storage is never touched on bad input.
pub struct ValidQuote(pub NewQuote);

impl<S> FromRequest<S> for ValidQuote
where
    S: Send + Sync,
{
    type Rejection = InspireError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<QuoteCreate>::from_request(req, state)
            .await
            .map_err(|rejection| ValidationError::new("body", rejection.body_text()))?;
        Ok(Self(NewQuote::try_from(raw)?))
    }
}

#[derive(Debug, Default, Deserialize)]
struct ListQuery {
    skip: Option<u64>,
    limit: Option<u64>,
    author: Option<String>,
}

/// `GET /quotes/` query: `skip` (default 0), `limit` (default 10), `author`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListParams {
    pub skip: u64,
    pub limit: u64,
    pub author: Option<String>,
}

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = InspireError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(q) = Query::<ListQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::new("query", rejection.body_text()))?;
        Ok(Self {
            skip: q.skip.unwrap_or(DEFAULT_SKIP),
            limit: q.limit.unwrap_or(DEFAULT_LIMIT),
            author: q.author,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
struct RandomQuery {
    author: Option<String>,
}

/// `GET /quotes/random` query: optional `author`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomParams {
    pub author: Option<String>,
}

impl<S> FromRequestParts<S> for RandomParams
where
    S: Send + Sync,
{
    type Rejection = InspireError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(q) = Query::<RandomQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ValidationError::new("query", rejection.body_text()))?;
        Ok(Self { author: q.author })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;

    async fn list_params(uri: &str) -> Result<ListParams, InspireError> {
        let (mut parts, _) = HttpRequest::builder()
            .uri(uri)
            .body(())
            .unwrap()
            .into_parts();
        ListParams::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn list_defaults() {
        let params = list_params("/quotes/").await.unwrap();
        assert_eq!(
            params,
            ListParams {
                skip: 0,
                limit: 10,
                author: None
            }
        );
    }

    #[tokio::test]
    async fn list_reads_all_fields() {
        let params = list_params("/quotes/?skip=3&limit=0&author=Seneca")
            .await
            .unwrap();
        assert_eq!(params.skip, 3);
        assert_eq!(params.limit, 0);
        assert_eq!(params.author.as_deref(), Some("Seneca"));
    }

    #[tokio::test]
    async fn list_accepts_values_beyond_u32() {
        let params = list_params("/quotes/?skip=4294967296&limit=18446744073709551615")
            .await
            .unwrap();
        assert_eq!(params.skip, 4_294_967_296);
        assert_eq!(params.limit, u64::MAX);
    }

    #[tokio::test]
    async fn negative_skip_is_a_validation_error() {
        let err = list_params("/quotes/?skip=-1").await.unwrap_err();
        assert!(matches!(err, InspireError::Validation(ref v) if v.field == "query"));
    }

    #[tokio::test]
    async fn missing_text_is_a_validation_error() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/quotes/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"author":"Nobody"}"#))
            .unwrap();
        let err = match ValidQuote::from_request(req, &()).await {
            Ok(_) => panic!("payload without text must be rejected"),
            Err(e) => e,
        };
        assert!(matches!(err, InspireError::Validation(ref v) if v.field == "body"));
    }

    #[tokio::test]
    async fn body_is_trimmed_and_validated() {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/quotes/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"text":"  Dream big  "}"#))
            .unwrap();
        let ValidQuote(quote) = match ValidQuote::from_request(req, &()).await {
            Ok(v) => v,
            Err(e) => panic!("valid payload rejected: {e}"),
        };
        assert_eq!(quote.text(), "Dream big");
        assert_eq!(quote.author(), None);
    }
}
