use super::handlers;
use axum::{routing::post, Router};

/// Creates the bookings router with validation and quoting routes
pub fn bookings_routes() -> Router {
    Router::new()
        .route("/api/bookings/validate", post(handlers::validate_booking))
        .route("/api/bookings/quote", post(handlers::quote_booking))
}
