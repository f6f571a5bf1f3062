use super::models::{BookingQuoteRequest, ValidateBookingRequest};
use super::pricing::calculate_booking_cost;
use super::validators::BookingValidator;
use crate::common::{ApiError, ValidationResult, Validator};
use axum::{response::IntoResponse, Json};
use tracing::debug;

/// POST /api/bookings/validate - Validate a booking submission
///
/// Always responds 200 with the validation result; surfacing the field
/// errors is the caller's job.
pub async fn validate_booking(
    Json(request): Json<ValidateBookingRequest>,
) -> impl IntoResponse {
    let result = BookingValidator.validate(&request);
    debug!(is_valid = result.is_valid, "Booking validated");
    Json(result)
}

/// POST /api/bookings/quote - Quote the cost of a rental window
pub async fn quote_booking(
    Json(request): Json<BookingQuoteRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !request.daily_rate.is_finite() || request.daily_rate < 0.0 {
        let mut result = ValidationResult::new();
        result.add_error("daily_rate", "Daily rate must be a non-negative number");
        return Err(result.into());
    }

    let cost = calculate_booking_cost(
        request.start_date.as_deref(),
        request.end_date.as_deref(),
        request.daily_rate,
    );
    Ok(Json(cost))
}
