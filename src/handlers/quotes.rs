use axum::{Json, extract::State, http::StatusCode};

use crate::error::ApiErrorResponse;
use crate::middleware::quote_request::{ListParams, RandomParams, ValidQuote};
use crate::types::{QuoteCreate, QuoteRead};
use crate::{InspireError, router::InspireState};

/// GET /quotes/ -> quotes in id order, paged by `skip`/`limit`, filtered by `author`.
#[utoipa::path(
    get,
    path = "/quotes/",
    tag = "Quotes",
    params(
        ("skip" = Option<u64>, Query, description = "Number of quotes to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum number of quotes to return (default 10)"),
        ("author" = Option<String>, Query, description = "Filter by author"),
    ),
    responses(
        (status = 200, description = "Quotes in id order", body = [QuoteRead]),
        (status = 400, description = "Malformed query string", body = ApiErrorResponse),
    )
)]
pub async fn list_quotes_handler(
    State(state): State<InspireState>,
    params: ListParams,
) -> Result<Json<Vec<QuoteRead>>, InspireError> {
    let quotes = state
        .ops
        .list(params.author.as_deref(), params.skip, params.limit)
        .await?;
    Ok(Json(quotes))
}

/// GET /quotes/random -> one matching quote, 404 when none match.
#[utoipa::path(
    get,
    path = "/quotes/random",
    tag = "Quotes",
    params(
        ("author" = Option<String>, Query, description = "Filter by author"),
    ),
    responses(
        (status = 200, description = "A randomly chosen quote", body = QuoteRead),
        (status = 404, description = "No quotes found", body = ApiErrorResponse),
    )
)]
pub async fn random_quote_handler(
    State(state): State<InspireState>,
    params: RandomParams,
) -> Result<Json<QuoteRead>, InspireError> {
    let quote = state.ops.random(params.author.as_deref()).await?;
    Ok(Json(quote))
}

/// POST /quotes/ -> 201 with the stored quote, 400 on invalid or duplicate text.
#[utoipa::path(
    post,
    path = "/quotes/",
    tag = "Quotes",
    request_body = QuoteCreate,
    responses(
        (status = 201, description = "Quote created", body = QuoteRead),
        (status = 400, description = "Invalid input or quote already exists", body = ApiErrorResponse),
        (status = 500, description = "Database error occurred", body = ApiErrorResponse),
    )
)]
pub async fn create_quote_handler(
    State(state): State<InspireState>,
    ValidQuote(quote): ValidQuote,
) -> Result<(StatusCode, Json<QuoteRead>), InspireError> {
    let created = state.ops.create(quote).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
