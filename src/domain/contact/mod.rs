//! src/domain/contact/mod.rs
mod field;

mod name;
pub use name::Name;

mod email;
pub use email::Email;

mod message;
pub use message::Message;

use serde_json::Value;

/// Reasons a submission is turned away before any mail is sent.
///
/// The `Display` text is what the visitor gets to see.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingField,
    #[error("Name must be at least 2 characters.")]
    NameTooShort,
    #[error("Invalid email address.")]
    InvalidEmail,
    #[error("Message must be at least 10 characters.")]
    MessageTooShort,
}

/// Raw contact form fields, exactly as the visitor sent them.
#[derive(Debug, Default)]
pub struct ContactSubmission {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub message: Option<Value>,
}

impl ContactSubmission {
    /// Anything that is not a JSON object is treated as an empty form.
    ///
    /// A key repeated in the object keeps its last value.
    pub fn from_json(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => Self {
                name: fields.remove("name"),
                email: fields.remove("email"),
                message: fields.remove("message"),
            },
            _ => Self::default(),
        }
    }
}

/// A submission that passed every check.
///
/// Only `TryFrom<ContactSubmission>` builds one.
#[derive(Debug, Clone)]
pub struct ValidatedContact {
    name: Name,
    email: Email,
    message: Message,
}

impl ValidatedContact {
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    pub fn email(&self) -> &str {
        self.email.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_ref()
    }
}

impl TryFrom<ContactSubmission> for ValidatedContact {
    type Error = ValidationError;

    /// Checks run in a fixed order and stop at the first failure.
    fn try_from(submission: ContactSubmission) -> Result<Self, Self::Error> {
        let (name, email, message) = match (submission.name, submission.email, submission.message)
        {
            (Some(name), Some(email), Some(message))
                if field::is_present(&name)
                    && field::is_present(&email)
                    && field::is_present(&message) =>
            {
                (name, email, message)
            }
            _ => return Err(ValidationError::MissingField),
        };

        Ok(Self {
            name: Name::parse(name)?,
            email: Email::parse(email)?,
            message: Message::parse(message)?,
        })
    }
}
