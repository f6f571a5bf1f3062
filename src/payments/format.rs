// src/payments/format.rs
//! Display formatting for payment method codes.

/// Codes the marketplace knows how to display, in listing order.
pub const KNOWN_METHOD_CODES: [&str; 7] = [
    "credit_card",
    "debit_card",
    "card",
    "cash_on_delivery",
    "cash",
    "bank_transfer",
    "paypal",
];

/// Maps a payment method code to its display label. Total over any
/// input: unknown codes get a literal "Unknown" label.
pub fn format_payment_method(code: &str) -> &'static str {
    match code {
        "credit_card" => "Credit Card",
        "debit_card" => "Debit Card",
        "card" => "Card",
        "cash_on_delivery" => "Cash on Delivery",
        "cash" => "Cash on Meet",
        "bank_transfer" => "Bank Transfer",
        "paypal" => "PayPal",
        _ => "Unknown",
    }
}

/// Representative glyph for a payment method. Unrecognized or empty
/// codes fall back to the generic card glyph.
pub fn payment_method_icon(code: &str) -> &'static str {
    match code {
        "cash_on_delivery" | "cash" => "💵",
        "bank_transfer" => "🏦",
        "paypal" => "🅿️",
        _ => "💳",
    }
}
