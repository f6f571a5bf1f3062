// src/payments/mod.rs

pub mod format;
pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::payments_routes;
