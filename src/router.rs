use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::{ApiDoc, DOCS_PATH, OPENAPI_PATH};
use crate::handlers::quotes::{create_quote_handler, list_quotes_handler, random_quote_handler};
use crate::handlers::root::root_handler;
use crate::service::quote_ops::QuoteOps;

#[derive(Clone)]
pub struct InspireState {
    pub ops: QuoteOps,
}

impl InspireState {
    pub fn new(ops: QuoteOps) -> Self {
        Self { ops }
    }
}

pub fn inspire_router(state: InspireState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route(
            "/quotes/",
            get(list_quotes_handler).post(create_quote_handler),
        )
        .route(
            "/quotes",
            get(list_quotes_handler).post(create_quote_handler),
        )
        .route("/quotes/random", get(random_quote_handler))
        .merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
