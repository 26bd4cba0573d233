//! src/domain/contact/email.rs
use super::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// `local@domain.tld`, where no part contains whitespace or another `@`.
///
/// Purely syntactic: it says nothing about deliverability.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

#[derive(Debug, Clone)]
pub struct Email(String);

impl Email {
    pub fn parse(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::String(s) if EMAIL_REGEX.is_match(&s) => Ok(Self(s)),
            _ => Err(ValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
