// Common validation types and traits

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Records an error for a field. A field carries at most one message:
    /// a later check for the same field replaces the earlier message, so
    /// callers always surface the last one recorded.
    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        if let Some(existing) = self.errors.iter_mut().find(|e| e.field == field) {
            existing.message = message.to_string();
        } else {
            self.errors.push(ValidationError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
