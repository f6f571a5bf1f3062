// src/bookings/pricing.rs
//! Rental cost calculation.

use super::models::BookingCost;
use chrono::{NaiveDate, NaiveDateTime};

const DAY_MS: i64 = 86_400_000;

/// Computes the rental duration and total cost from a daily rate.
///
/// Mirrors the booking form contract: a missing date or a zero rate
/// yields a zero quote, and unparseable dates do too. The function
/// never fails.
///
/// The day count is `ceil(|end - start| / 24h)`. Taking the absolute
/// value means a reversed date order still produces a positive day
/// count; the booking validator is where reversed dates get rejected.
pub fn calculate_booking_cost(
    start_date: Option<&str>,
    end_date: Option<&str>,
    daily_rate: f64,
) -> BookingCost {
    let (start, end) = match (parse_date_time(start_date), parse_date_time(end_date)) {
        (Some(start), Some(end)) if daily_rate != 0.0 => (start, end),
        _ => return BookingCost::zero(),
    };

    let span_ms = (end - start).num_milliseconds().abs();
    let days = div_ceil(span_ms, DAY_MS);
    if days <= 0 {
        return BookingCost::zero();
    }

    BookingCost {
        days,
        total_cost: days as f64 * daily_rate,
    }
}

/// Accepts the form's plain date format plus an ISO date-time, since
/// quotes may be requested with pickup times attached.
fn parse_date_time(value: Option<&str>) -> Option<NaiveDateTime> {
    let raw = value.map(str::trim).filter(|s| !s.is_empty())?;
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").ok()
}

fn div_ceil(numerator: i64, denominator: i64) -> i64 {
    (numerator + denominator - 1) / denominator
}
