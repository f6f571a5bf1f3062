// src/locations/mod.rs

pub mod cities;
pub mod handlers;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::locations_routes;
