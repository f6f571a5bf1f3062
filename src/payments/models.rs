use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PaymentMethodInfo {
    pub code: String,
    pub label: &'static str,
    pub icon: &'static str,
}
