//! src/domain/contact/name.rs
use super::field::trimmed_len;
use super::ValidationError;
use serde_json::Value;

const MIN_LENGTH: usize = 2;

#[derive(Debug, Clone)]
pub struct Name(String);

impl Name {
    /// The original string is kept; trimming only applies to the length check.
    pub fn parse(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) if trimmed_len(&s) >= MIN_LENGTH => Ok(Self(s)),
            _ => Err(ValidationError::NameTooShort),
        }
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
