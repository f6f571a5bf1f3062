use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A car's availability window, supplied by the caller alongside the
/// booking form. Read-only to the validator.
#[derive(Debug, Clone, Deserialize)]
pub struct CarAvailability {
    pub availability_from: NaiveDate,
    pub availability_to: NaiveDate,
}

/// A renter's booking submission. Form fields arrive as raw strings so
/// missing and malformed values surface as field errors, never as
/// deserialization failures.
#[derive(Debug, Default, Deserialize)]
pub struct BookingForm {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub return_location: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateBookingRequest {
    #[serde(flatten)]
    pub form: BookingForm,
    #[serde(default)]
    pub car: Option<CarAvailability>,
}

#[derive(Debug, Deserialize)]
pub struct BookingQuoteRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub daily_rate: f64,
}

/// Rental duration and total cost in AED. The total is left unrounded;
/// rounding to fils is the caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookingCost {
    pub days: i64,
    pub total_cost: f64,
}

impl BookingCost {
    pub fn zero() -> Self {
        Self {
            days: 0,
            total_cost: 0.0,
        }
    }
}
