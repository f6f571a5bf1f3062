use super::cities::{validate_uae_city, UAE_CITIES};
use axum::{extract::Path, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CityCheckResponse {
    pub city: String,
    pub valid: bool,
}

/// GET /api/locations/cities - The supported city allow-list
pub async fn list_cities() -> impl IntoResponse {
    Json(UAE_CITIES.as_slice())
}

/// GET /api/locations/cities/:city - Check one city against the list
pub async fn check_city(Path(city): Path<String>) -> impl IntoResponse {
    let valid = validate_uae_city(&city);
    Json(CityCheckResponse { city, valid })
}
