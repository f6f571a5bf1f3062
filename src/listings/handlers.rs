use super::models::CreateListingRequest;
use super::validators::ListingValidator;
use crate::common::Validator;
use axum::{response::IntoResponse, Json};
use tracing::debug;

/// POST /api/listings/validate - Validate a car listing submission
///
/// Always responds 200 with the validation result; field errors are
/// the caller's to surface.
pub async fn validate_listing(Json(request): Json<CreateListingRequest>) -> impl IntoResponse {
    let result = ListingValidator.validate(&request);
    debug!(
        is_valid = result.is_valid,
        image_count = request.images.len(),
        "Listing validated"
    );
    Json(result)
}
