use crate::bot_response::{ApiError, BotResponse};
use crate::query_payload::QueryPayload;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use finance_bot::QueryService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

pub const GREETING: &str = "Hello from Koyeb - you reached the main page!";

#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<QueryService>,
}

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_root))
        .route("/query", post(handle_query))
        .fallback(handle_not_found)
        .layer(cors)
        .with_state(state)
}

async fn handle_root() -> Json<BotResponse> {
    Json(BotResponse::text(GREETING))
}

async fn handle_not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

pub async fn handle_query(
    State(state): State<AppState>,
    Json(payload): Json<QueryPayload>,
) -> Result<Json<BotResponse>, ApiError> {
    if payload.should_ignore() {
        log::info!("Ignoring message (bot: {})", payload.bot);
        return Ok(Json(BotResponse::ignored()));
    }

    log::info!(
        "Received message from {}",
        payload.user_name.as_deref().unwrap_or("anonymous")
    );

    let answer = state
        .query_service
        .answer(&payload.text, payload.user_name.as_deref())
        .await?;

    Ok(Json(BotResponse::text(answer)))
}
