//! Tests for locations module

#[cfg(test)]
mod tests {
    use crate::locations::cities::{validate_uae_city, UAE_CITIES};

    #[test]
    fn test_known_cities_accepted() {
        assert!(validate_uae_city("Dubai"));
        assert!(validate_uae_city("Abu Dhabi"));
        assert!(validate_uae_city("Ras Al Khaimah"));
        assert!(validate_uae_city("Jumeirah Beach Residence"));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert!(!validate_uae_city("dubai"));
        assert!(!validate_uae_city("DUBAI"));
    }

    #[test]
    fn test_no_whitespace_normalization() {
        assert!(!validate_uae_city(" Dubai"));
        assert!(!validate_uae_city("Dubai "));
    }

    #[test]
    fn test_unknown_city_rejected() {
        assert!(!validate_uae_city("Riyadh"));
        assert!(!validate_uae_city(""));
    }

    #[test]
    fn test_list_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for city in UAE_CITIES {
            assert!(seen.insert(city), "duplicate entry: {city}");
        }
    }
}
