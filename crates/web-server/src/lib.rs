use axum::{
    routing::{delete, get, post},
    Router,
};
use catalog::RollCatalog;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing;

pub mod error;
pub mod handlers;

/// The shared application state that all handlers can access.
pub struct AppState {
    pub catalog: RollCatalog,
}

/// Builds the application router around a catalog.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/rolls", post(handlers::add_roll).get(handlers::list_rolls))
        .route("/rolls/stats", get(handlers::get_stats))
        .route("/rolls/:id", delete(handlers::remove_roll))
        .with_state(state)
        .layer(cors)
        // This middleware will automatically log information about every incoming request.
        .layer(TraceLayer::new_for_http())
}

/// Serves the roll API on `addr` until the process is stopped.
///
/// Tracing must already be initialised by the caller.
pub async fn run_server(addr: SocketAddr, catalog: RollCatalog) -> anyhow::Result<()> {
    let app = router(Arc::new(AppState { catalog }));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
