//! src/email/smtp/message.rs
use super::MailError;
use crate::domain::ValidatedContact;
use lettre::message::{Mailbox, MultiPart};
use lettre::Message;

/// The notification the site owner receives for one contact form submission.
///
/// Submitted values go into the HTML part as they are, without escaping.
pub struct ContactEmail<'a> {
    contact: &'a ValidatedContact,
}

impl<'a> ContactEmail<'a> {
    pub fn new(contact: &'a ValidatedContact) -> Self {
        Self { contact }
    }

    pub fn subject(&self) -> String {
        format!(
            "New message from {} <{}>",
            self.contact.name(),
            self.contact.email()
        )
    }

    pub fn text_content(&self) -> String {
        self.contact.message().to_owned()
    }

    pub fn html_content(&self) -> String {
        format!(
            "<p>You have a new message from your portfolio contact form:</p>\n\
             <p><strong>Name:</strong> {}</p>\n\
             <p><strong>Email:</strong> {}</p>\n\
             <p><strong>Message:</strong><br/>{}</p>",
            self.contact.name(),
            self.contact.email(),
            self.contact.message().replace('\n', "<br/>")
        )
    }

    pub fn build(&self, sender: Mailbox, receiver: Mailbox) -> Result<Message, MailError> {
        Message::builder()
            .from(sender)
            .to(receiver)
            .subject(self.subject())
            .multipart(MultiPart::alternative_plain_html(
                self.text_content(),
                self.html_content(),
            ))
            .map_err(MailError::Compose)
    }
}
