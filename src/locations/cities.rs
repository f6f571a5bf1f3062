// src/locations/cities.rs
//! UAE city and district allow-list for pickup, return and listing
//! locations.

/// Supported cities and districts. Membership is an exact,
/// case-sensitive match: the frontend submits values picked from this
/// list verbatim, so `"dubai"` or `" Dubai"` are rejected rather than
/// normalized.
pub const UAE_CITIES: [&str; 49] = [
    // Emirate capitals and towns
    "Abu Dhabi",
    "Dubai",
    "Sharjah",
    "Ajman",
    "Umm Al Quwain",
    "Ras Al Khaimah",
    "Fujairah",
    "Al Ain",
    "Khor Fakkan",
    "Kalba",
    "Dibba Al-Fujairah",
    "Dibba Al-Hisn",
    "Madinat Zayed",
    "Ruwais",
    "Liwa Oasis",
    // Abu Dhabi districts
    "Khalifa City",
    "Mohammed Bin Zayed City",
    "Mussafah",
    "Al Reem Island",
    "Yas Island",
    "Saadiyat Island",
    // Dubai districts
    "Deira",
    "Bur Dubai",
    "Jumeirah",
    "Palm Jumeirah",
    "Dubai Marina",
    "Jumeirah Beach Residence",
    "Jumeirah Lakes Towers",
    "Downtown Dubai",
    "Business Bay",
    "Al Barsha",
    "Al Quoz",
    "Al Karama",
    "Al Satwa",
    "Mirdif",
    "Al Nahda",
    "Al Qusais",
    "Jebel Ali",
    "Dubai Silicon Oasis",
    "International City",
    "Discovery Gardens",
    "Dubai Sports City",
    "Motor City",
    "Arabian Ranches",
    "Al Warqa",
    "Umm Suqeim",
    // Sharjah districts
    "Al Majaz",
    "Al Khan",
    "Muwaileh",
];

pub fn validate_uae_city(city: &str) -> bool {
    UAE_CITIES.contains(&city)
}
