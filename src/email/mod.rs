//! src/email/mod.rs
mod smtp;
pub use smtp::{DispatchOutcome, MailError, SmtpMailer};
