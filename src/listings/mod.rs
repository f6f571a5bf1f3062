//! # Listings Module
//!
//! Validation for car-owner listing submissions: field lengths, daily
//! price bounds, the availability window, and attached image metadata.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod validators;

#[cfg(test)]
mod tests;

pub use routes::listings_routes;
