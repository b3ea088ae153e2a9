use axum::Json;
use rand::seq::SliceRandom;
use serde::Serialize;
use utoipa::ToSchema;

use crate::doc::DOCS_PATH;

const WELCOME_MESSAGES: [&str; 3] = [
    "Welcome to Inspire API — fuel your mind with motivation! 🚀",
    "Your daily dose of inspiration starts here ✨",
    "Dream big. Code harder. Inspire always 💪",
];

#[derive(Debug, Serialize, ToSchema)]
pub struct RootInfo {
    pub message: String,
    /// Interactive API documentation.
    pub docs_url: String,
}

/// GET / -> service banner with a rotating welcome message.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Welcome message", body = RootInfo))
)]
pub async fn root_handler() -> Json<RootInfo> {
    let message = WELCOME_MESSAGES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(WELCOME_MESSAGES[0]);
    Json(RootInfo {
        message: message.to_string(),
        docs_url: DOCS_PATH.to_string(),
    })
}
