mod bot_response;
mod handlers;
mod query_payload;

use finance_bot::{Config, QueryService};
use handlers::AppState;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let addr = config.socket_addr()?;

    let state = AppState {
        query_service: Arc::new(QueryService::from_config(&config)),
    };
    log::info!(
        "Using Gemini model {} with search engine {}",
        config.gemini.model,
        config.search.engine_id
    );

    let app = handlers::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
    }
}
