//! src/domain/contact/message.rs
use super::field::trimmed_len;
use super::ValidationError;
use serde_json::Value;

const MIN_LENGTH: usize = 10;

#[derive(Debug, Clone)]
pub struct Message(String);

impl Message {
    pub fn parse(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) if trimmed_len(&s) >= MIN_LENGTH => Ok(Self(s)),
            _ => Err(ValidationError::MessageTooShort),
        }
    }
}

impl AsRef<str> for Message {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
