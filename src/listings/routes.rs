use super::handlers;
use axum::{routing::post, Router};

/// Creates the listings router
pub fn listings_routes() -> Router {
    Router::new().route("/api/listings/validate", post(handlers::validate_listing))
}
