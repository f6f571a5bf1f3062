// src/bookings/validators.rs

use super::models::*;
use crate::common::{ValidationResult, Validator};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;

// ============================================================================
// Booking Validators
// ============================================================================

pub struct BookingValidator;

impl Validator<ValidateBookingRequest> for BookingValidator {
    fn validate(&self, data: &ValidateBookingRequest) -> ValidationResult {
        let today = Local::now().date_naive();
        validate_booking(data, today)
    }
}

/// Date comparisons are date-only: `today` has no time component, so a
/// booking starting later the same day is accepted.
fn validate_booking(data: &ValidateBookingRequest, today: NaiveDate) -> ValidationResult {
    let mut result = ValidationResult::new();

    // Validate rental dates
    let start = parse_form_date(&data.form.start_date);
    let end = parse_form_date(&data.form.end_date);

    match start {
        FormDate::Missing => result.add_error("start_date", "Start date is required"),
        FormDate::Invalid => result.add_error("start_date", "Start date is not a valid date"),
        FormDate::Parsed(_) => {}
    }
    match end {
        FormDate::Missing => result.add_error("end_date", "End date is required"),
        FormDate::Invalid => result.add_error("end_date", "End date is not a valid date"),
        FormDate::Parsed(_) => {}
    }

    if let (FormDate::Parsed(start), FormDate::Parsed(end)) = (start, end) {
        if start < today {
            result.add_error("start_date", "Start date cannot be in the past");
        }
        if start >= end {
            result.add_error("end_date", "End date must be after start date");
        }

        // The requested window must lie inside the car's availability
        if let Some(car) = &data.car {
            if start < car.availability_from || end > car.availability_to {
                result.add_error(
                    "date_range",
                    &format!(
                        "Car is only available from {} to {}",
                        car.availability_from.format("%d/%m/%Y"),
                        car.availability_to.format("%d/%m/%Y")
                    ),
                );
            }
        }
    }

    // Validate locations
    if is_blank(&data.form.pickup_location) {
        result.add_error("pickup_location", "Pickup location is required");
    }
    if is_blank(&data.form.return_location) {
        result.add_error("return_location", "Return location is required");
    }

    // Validate payment method
    let valid_methods = HashSet::from(["Card", "Cash"]);
    match data.form.payment_method.as_deref() {
        None | Some("") => result.add_error("payment_method", "Payment method is required"),
        Some(method) if !valid_methods.contains(method) => {
            result.add_error("payment_method", "Invalid payment method")
        }
        Some(_) => {}
    }

    result
}

// ============================================================================
// Helper Functions
// ============================================================================

#[derive(Clone, Copy)]
enum FormDate {
    Missing,
    Invalid,
    Parsed(NaiveDate),
}

fn parse_form_date(value: &Option<String>) -> FormDate {
    match value.as_deref().map(str::trim) {
        None | Some("") => FormDate::Missing,
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => FormDate::Parsed(date),
            Err(_) => FormDate::Invalid,
        },
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

#[cfg(test)]
pub(super) fn validate_booking_on(
    data: &ValidateBookingRequest,
    today: NaiveDate,
) -> ValidationResult {
    validate_booking(data, today)
}
