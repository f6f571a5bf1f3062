use serde::Deserialize;

/// Declared metadata for an image attached to a listing. The upload
/// itself is handled elsewhere; validation runs on what the client
/// declares about each file.
#[derive(Debug, Clone, Deserialize)]
pub struct ListingImage {
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
}

/// A car-owner's listing submission. String fields default to empty so
/// a bare `{}` payload validates as an all-fields-missing form rather
/// than failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct CreateListingRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price_per_day: Option<String>,
    #[serde(default)]
    pub available_from: Option<String>,
    #[serde(default)]
    pub available_to: Option<String>,
    #[serde(default)]
    pub images: Vec<ListingImage>,
}
