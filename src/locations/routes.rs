use super::handlers;
use axum::{routing::get, Router};

/// Creates the locations router
pub fn locations_routes() -> Router {
    Router::new()
        .route("/api/locations/cities", get(handlers::list_cities))
        .route("/api/locations/cities/:city", get(handlers::check_city))
}
