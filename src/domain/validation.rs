use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Raw request input, as handed over by the transport layer.
pub type Fields = serde_json::Map<String, Value>;

/// Field-level error messages, keyed by field name in the order the fields were checked.
///
/// Only the validator builds one of these, and it never builds an empty one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("The given data was invalid.")]
pub struct ValidationError {
    errors: Vec<(String, Vec<String>)>,
}

impl ValidationError {
    fn new() -> Self {
        Self { errors: Vec::new() }
    }

    fn add(&mut self, field: &str, message: String) {
        match self.errors.iter_mut().find(|(name, _)| name == field) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((field.to_owned(), vec![message])),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|(name, _)| name.as_str())
    }

    /// Every message, in report order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors
            .iter()
            .flat_map(|(_, messages)| messages.iter().map(String::as_str))
    }

    fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Serialize for ValidationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, messages) in &self.errors {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(ValidationError),
}

impl ValidationResult {
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(e) => Err(e),
        }
    }
}

/// Checks that a fixed set of fields is present and non-empty.
#[derive(Debug, Clone, Default)]
pub struct RequestValidator {
    required: Vec<&'static str>,
}

impl RequestValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields are checked, and reported, in the order they are declared.
    pub fn required(mut self, field: &'static str) -> Self {
        if !self.required.contains(&field) {
            self.required.push(field);
        }
        self
    }

    /// Rules shared by the form submission and the login endpoint.
    pub fn login() -> Self {
        Self::new().required("username").required("password")
    }

    pub fn validate(&self, fields: &Fields) -> ValidationResult {
        let mut error = ValidationError::new();

        for &field in &self.required {
            if !is_filled(fields.get(field)) {
                error.add(field, required_message(field));
            }
        }

        if error.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(error)
        }
    }
}

/// Strings must be non-blank, arrays and objects non-empty.
fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(items)) => !items.is_empty(),
        Some(Value::Object(entries)) => !entries.is_empty(),
        Some(Value::Number(_)) | Some(Value::Bool(_)) => true,
    }
}

/// Text form of a field, if it has one.
///
/// Nulls, arrays and objects have none.
pub fn text(fields: &Fields, field: &str) -> Option<String> {
    match fields.get(field)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn required_message(field: &str) -> String {
    format!("The {} field is required.", field.replace('_', " "))
}
