use super::{app_state::AppState, handlers::*};
use axum::{
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    routing::{get, post},
    Router,
};

use std::sync::Arc;

use tower_http::{cors::CorsLayer, services::ServeDir};

async fn handle_404() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let router = Router::new()
        .route("/api/status", get(status_handler))
        .route("/api/algorithms", get(algorithm_list_handler))
        .route("/api/algorithm/run", post(algorithm_run_handler));

    let service_404 = handle_404.into_service();
    router
        // graph snapshots are tiny; anything bigger is not a legal request
        .layer(DefaultBodyLimit::max(1usize << 20))
        .layer(CorsLayer::permissive())
        .fallback_service(
            ServeDir::new("assets")
                .precompressed_gzip()
                .not_found_service(service_404),
        )
        .with_state(app_state)
}
