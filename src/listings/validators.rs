// src/listings/validators.rs

use super::models::{CreateListingRequest, ListingImage};
use crate::common::{ValidationResult, Validator};
use chrono::NaiveDate;
use std::collections::HashSet;

pub const MAX_PRICE_PER_DAY: f64 = 10_000.0;
pub const MAX_AVAILABILITY_DAYS: i64 = 365;
pub const MAX_IMAGES: usize = 10;
pub const MAX_IMAGE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

// ============================================================================
// Listing Validators
// ============================================================================

pub struct ListingValidator;

impl Validator<CreateListingRequest> for ListingValidator {
    fn validate(&self, data: &CreateListingRequest) -> ValidationResult {
        let mut result = ValidationResult::new();

        // Validate title
        if data.title.trim().is_empty() {
            result.add_error("title", "Title is required");
        } else if data.title.trim().len() < 3 {
            result.add_error("title", "Title must be at least 3 characters");
        }

        // Validate description
        if data.description.trim().is_empty() {
            result.add_error("description", "Description is required");
        } else if data.description.trim().len() < 10 {
            result.add_error("description", "Description must be at least 10 characters");
        }

        // Validate city
        if data.city.trim().is_empty() {
            result.add_error("city", "City is required");
        } else if data.city.trim().len() < 2 {
            result.add_error("city", "City must be at least 2 characters");
        }

        // Validate price. Two sequential checks on the same field: the
        // ceiling check replaces the parse error if both were to apply.
        let price = data
            .price_per_day
            .as_deref()
            .unwrap_or("")
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite() && *p > 0.0);
        if price.is_none() {
            result.add_error("price_per_day", "Price must be a valid positive number");
        }
        if let Some(price) = price {
            if price > MAX_PRICE_PER_DAY {
                result.add_error("price_per_day", "Price cannot exceed 10000 AED per day");
            }
        }

        // Validate availability window
        let from = match data.available_from.as_deref().map(str::trim) {
            None | Some("") => {
                result.add_error("available_from", "Availability start date is required");
                None
            }
            Some(raw) => parse_listing_date(raw, "available_from", &mut result),
        };
        let to = match data.available_to.as_deref().map(str::trim) {
            None | Some("") => {
                result.add_error("available_to", "Availability end date is required");
                None
            }
            Some(raw) => parse_listing_date(raw, "available_to", &mut result),
        };
        if let (Some(from), Some(to)) = (from, to) {
            if from >= to {
                result.add_error(
                    "available_to",
                    "Availability end date must be after the start date",
                );
            } else if (to - from).num_days() > MAX_AVAILABILITY_DAYS {
                result.add_error(
                    "available_to",
                    "Availability range cannot exceed 365 days",
                );
            }
        }

        // Validate images
        validate_images(&data.images, &mut result);

        result
    }
}

/// Image checks are fail-fast in list order: the first offending image
/// produces the single `images` error.
fn validate_images(images: &[ListingImage], result: &mut ValidationResult) {
    if images.is_empty() {
        result.add_error("images", "At least one image is required");
        return;
    }
    if images.len() > MAX_IMAGES {
        result.add_error("images", "Maximum 10 images allowed");
        return;
    }

    let allowed_types = HashSet::from(["image/jpeg", "image/jpg", "image/png", "image/webp"]);
    for (index, image) in images.iter().enumerate() {
        if !allowed_types.contains(image.mime_type.as_str()) {
            result.add_error(
                "images",
                &format!(
                    "Image {}: only jpeg, jpg, png and webp files are allowed",
                    index + 1
                ),
            );
            return;
        }
        if image.size_bytes > MAX_IMAGE_SIZE_BYTES {
            result.add_error(
                "images",
                &format!("Image {}: file size cannot exceed 5 MB", index + 1),
            );
            return;
        }
    }
}

fn parse_listing_date(raw: &str, field: &str, result: &mut ValidationResult) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            result.add_error(field, "Date must be in YYYY-MM-DD format");
            None
        }
    }
}
