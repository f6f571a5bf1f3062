use super::handlers;
use axum::{routing::get, Router};

/// Creates the payments router
pub fn payments_routes() -> Router {
    Router::new()
        .route("/api/payments/methods", get(handlers::list_payment_methods))
        .route(
            "/api/payments/methods/:code",
            get(handlers::get_payment_method),
        )
}
