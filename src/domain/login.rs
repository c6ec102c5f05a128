use secrecy::Secret;
use serde_json::Value;

use super::validation::{text, Fields, RequestValidator, ValidationError};

/// Credentials submitted by the login form, once both fields are known to be filled in.
#[derive(Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: Secret<String>,
}

impl LoginRequest {
    pub fn parse(fields: &Fields, validator: &RequestValidator) -> Result<Self, ValidationError> {
        validator.validate(fields).into_result()?;

        Ok(Self {
            username: field_text(fields, "username"),
            password: Secret::new(field_text(fields, "password")),
        })
    }
}

/// Arrays and objects that passed validation are kept as their JSON encoding.
fn field_text(fields: &Fields, field: &str) -> String {
    text(fields, field)
        .or_else(|| fields.get(field).map(Value::to_string))
        .unwrap_or_default()
}
