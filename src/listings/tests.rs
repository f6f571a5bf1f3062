//! Tests for listings module
//!
//! These tests verify listing field validation, price bounds, the
//! availability window rules, and image metadata checks.

#[cfg(test)]
mod tests {
    use crate::common::Validator;
    use crate::listings::models::*;
    use crate::listings::validators::*;

    fn image(mime_type: &str, size_bytes: u64) -> ListingImage {
        ListingImage {
            file_name: "car.jpg".to_string(),
            mime_type: mime_type.to_string(),
            size_bytes,
        }
    }

    fn valid_request() -> CreateListingRequest {
        CreateListingRequest {
            title: "Nissan Patrol 2022".to_string(),
            description: "Full-option V8, perfect for desert trips".to_string(),
            city: "Dubai".to_string(),
            price_per_day: Some("450".to_string()),
            available_from: Some("2024-06-01".to_string()),
            available_to: Some("2024-09-01".to_string()),
            images: vec![image("image/jpeg", 2 * 1024 * 1024)],
        }
    }

    #[test]
    fn test_listing_validator_valid_data() {
        let result = ListingValidator.validate(&valid_request());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_listing_validator_empty_form() {
        let request = CreateListingRequest::default();
        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        for field in [
            "title",
            "description",
            "city",
            "price_per_day",
            "available_from",
            "available_to",
            "images",
        ] {
            assert!(
                result.errors.iter().any(|e| e.field == field),
                "expected an error for {field}"
            );
        }
    }

    #[test]
    fn test_listing_validator_short_fields() {
        let mut request = valid_request();
        request.title = "GT".to_string();
        request.description = "Fast car".to_string();
        request.city = "X".to_string();

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "title" && e.message.contains("3 characters")));
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "description" && e.message.contains("10 characters")));
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "city" && e.message.contains("2 characters")));
    }

    #[test]
    fn test_listing_validator_price_not_a_number() {
        let mut request = valid_request();
        request.price_per_day = Some("cheap".to_string());

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "price_per_day" && e.message.contains("valid positive")));
    }

    #[test]
    fn test_listing_validator_price_above_ceiling() {
        let mut request = valid_request();
        request.price_per_day = Some("10000.50".to_string());

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "price_per_day" && e.message.contains("10000")));
    }

    #[test]
    fn test_listing_validator_price_at_ceiling_is_allowed() {
        let mut request = valid_request();
        request.price_per_day = Some("10000".to_string());

        let result = ListingValidator.validate(&request);
        assert!(result.is_valid);
    }

    #[test]
    fn test_listing_validator_availability_reversed() {
        let mut request = valid_request();
        request.available_from = Some("2024-09-01".to_string());
        request.available_to = Some("2024-06-01".to_string());

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "available_to" && e.message.contains("after")));
    }

    #[test]
    fn test_listing_validator_availability_span_too_long() {
        let mut request = valid_request();
        request.available_from = Some("2024-01-01".to_string());
        request.available_to = Some("2025-06-01".to_string());

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "available_to" && e.message.contains("365")));
    }

    #[test]
    fn test_listing_validator_availability_exactly_one_year() {
        let mut request = valid_request();
        request.available_from = Some("2024-01-01".to_string());
        request.available_to = Some("2024-12-31".to_string());

        let result = ListingValidator.validate(&request);
        assert!(result.is_valid);
    }

    #[test]
    fn test_listing_validator_no_images() {
        let mut request = valid_request();
        request.images = Vec::new();

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "images" && e.message.contains("At least one")));
    }

    #[test]
    fn test_listing_validator_too_many_images() {
        let mut request = valid_request();
        request.images = (0..11).map(|_| image("image/png", 1024)).collect();

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "images" && e.message.contains("10")));
    }

    #[test]
    fn test_listing_validator_oversized_image_names_position() {
        let mut request = valid_request();
        request.images = vec![
            image("image/jpeg", 1024),
            image("image/png", MAX_IMAGE_SIZE_BYTES + 1),
        ];

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "images"
                && e.message.contains("Image 2")
                && e.message.contains("5 MB")));
    }

    #[test]
    fn test_listing_validator_image_at_size_limit_is_allowed() {
        let mut request = valid_request();
        request.images = vec![image("image/webp", MAX_IMAGE_SIZE_BYTES)];

        let result = ListingValidator.validate(&request);
        assert!(result.is_valid);
    }

    #[test]
    fn test_listing_validator_unsupported_image_type_fail_fast() {
        // Only the first offending image is reported
        let mut request = valid_request();
        request.images = vec![
            image("application/pdf", 1024),
            image("image/gif", MAX_IMAGE_SIZE_BYTES + 1),
        ];

        let result = ListingValidator.validate(&request);
        assert!(!result.is_valid);
        let errors: Vec<_> = result.errors.iter().filter(|e| e.field == "images").collect();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Image 1"));
    }
}
