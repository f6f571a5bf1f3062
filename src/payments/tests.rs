//! Tests for payments module

#[cfg(test)]
mod tests {
    use crate::payments::format::*;

    #[test]
    fn test_format_known_methods() {
        assert_eq!(format_payment_method("credit_card"), "Credit Card");
        assert_eq!(format_payment_method("debit_card"), "Debit Card");
        assert_eq!(format_payment_method("card"), "Card");
        assert_eq!(format_payment_method("cash_on_delivery"), "Cash on Delivery");
        assert_eq!(format_payment_method("cash"), "Cash on Meet");
        assert_eq!(format_payment_method("bank_transfer"), "Bank Transfer");
        assert_eq!(format_payment_method("paypal"), "PayPal");
    }

    #[test]
    fn test_format_unknown_method() {
        assert_eq!(format_payment_method("unknown_code"), "Unknown");
        assert_eq!(format_payment_method(""), "Unknown");
    }

    #[test]
    fn test_icon_cash_methods() {
        assert_eq!(payment_method_icon("cash"), "💵");
        assert_eq!(payment_method_icon("cash_on_delivery"), "💵");
    }

    #[test]
    fn test_icon_defaults_to_card_glyph() {
        assert_eq!(payment_method_icon("card"), "💳");
        assert_eq!(payment_method_icon("unknown_code"), "💳");
        assert_eq!(payment_method_icon(""), "💳");
    }

    #[test]
    fn test_every_known_code_has_a_label() {
        for code in KNOWN_METHOD_CODES {
            assert_ne!(format_payment_method(code), "Unknown", "{code}");
        }
    }
}
