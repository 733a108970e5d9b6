mod api;
mod config;
mod metrics;
mod municipality;
mod pages;
mod state;

use axum::{
    http::StatusCode,
    routing::{get, get_service},
    Router,
};
use config::Config;
use state::AppState;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = Config::load()?;
    let state = Arc::new(AppState::from_config(&cfg)?);
    let app = router(state, &cfg.static_dir());

    let port = config::resolve_port(std::env::var("PORT").ok())?;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(%addr, "Starting nc-fttx-portal");

    let server = axum::Server::bind(&addr).serve(app.into_make_service());

    let graceful = server.with_graceful_shutdown(shutdown_signal());
    graceful.await?;
    Ok(())
}

fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    let static_files = get_service(ServeDir::new(static_dir)).handle_error(
        |err: std::io::Error| async move {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("static file error: {}", err),
            )
        },
    );

    Router::new()
        .route("/", get(pages::index_handler))
        .route("/health", get(api::health_handler))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/api/municipalities", get(api::municipalities_handler))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
