//! Router assembly for the HTTP API.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    create_seller, delete_seller, get_seller, health_check, list_sellers, update_seller,
};
use crate::state::AppState;

/// Builds the full application router with `/api/v1` routes and the
/// tracing/CORS layers applied.
pub fn app_router(state: AppState) -> Router {
    // The collection endpoints are registered with and without the trailing
    // slash; axum treats the two paths as distinct.
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/sellers", post(create_seller).get(list_sellers))
        .route("/sellers/", post(create_seller).get(list_sellers))
        .route(
            "/sellers/{id}",
            get(get_seller).put(update_seller).delete(delete_seller),
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
