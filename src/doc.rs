//! OpenAPI description of the HTTP surface, served with Swagger UI.

use utoipa::OpenApi;

use crate::error::{ApiErrorBody, ApiErrorResponse};
use crate::handlers::{quotes, root};
use crate::types::{QuoteCreate, QuoteRead};

pub const DOCS_PATH: &str = "/docs";
pub const OPENAPI_PATH: &str = "/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inspire API",
        description = "A simple API for inspirational quotes."
    ),
    paths(
        root::root_handler,
        quotes::list_quotes_handler,
        quotes::random_quote_handler,
        quotes::create_quote_handler,
    ),
    components(schemas(QuoteCreate, QuoteRead, ApiErrorResponse, ApiErrorBody, root::RootInfo)),
    tags((name = "Quotes", description = "Motivational quotes"))
)]
pub struct ApiDoc;
