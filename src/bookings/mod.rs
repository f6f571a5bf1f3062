// src/bookings/mod.rs

pub mod handlers;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod validators;


// Re-export commonly used items
pub use routes::bookings_routes;
