use super::format::{format_payment_method, payment_method_icon, KNOWN_METHOD_CODES};
use super::models::PaymentMethodInfo;
use crate::common::ApiError;
use axum::{extract::Path, response::IntoResponse, Json};

/// GET /api/payments/methods - List all known payment methods
pub async fn list_payment_methods() -> impl IntoResponse {
    let methods: Vec<PaymentMethodInfo> = KNOWN_METHOD_CODES
        .iter()
        .map(|code| PaymentMethodInfo {
            code: code.to_string(),
            label: format_payment_method(code),
            icon: payment_method_icon(code),
        })
        .collect();
    Json(methods)
}

/// GET /api/payments/methods/:code - Look up one payment method
pub async fn get_payment_method(
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if !KNOWN_METHOD_CODES.contains(&code.as_str()) {
        return Err(ApiError::NotFound(format!(
            "Unknown payment method: {}",
            code
        )));
    }

    Ok(Json(PaymentMethodInfo {
        label: format_payment_method(&code),
        icon: payment_method_icon(&code),
        code,
    }))
}
