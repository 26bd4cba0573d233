//! src/email/smtp/mod.rs
use crate::configuration::EmailSettings;
use crate::domain::ValidatedContact;
use lettre::address::AddressError;
use lettre::message::Mailbox;
use lettre::{Address, AsyncTransport};

mod message;
use message::ContactEmail;

mod transport;

#[derive(thiserror::Error, Debug)]
pub enum MailError {
    #[error("{0:?} is not a valid mailbox address")]
    InvalidAddress(String, #[source] AddressError),
    #[error("Failed to set up the SMTP transport")]
    Transport(#[source] lettre::transport::smtp::Error),
    #[error("Failed to compose the email")]
    Compose(#[source] lettre::error::Error),
    #[error("The SMTP server did not accept the email")]
    Send(#[source] lettre::transport::smtp::Error),
}

/// Result of the single delivery attempt made for a submission.
#[must_use]
#[derive(Debug)]
pub enum DispatchOutcome {
    Sent,
    Failed(MailError),
}

/// Relays contact form submissions to the site owner over SMTP.
///
/// Addresses are parsed once here; a new transport is built for every send.
#[derive(Debug)]
pub struct SmtpMailer {
    settings: EmailSettings,
    sender: Mailbox,
    receiver: Mailbox,
}

impl TryFrom<EmailSettings> for SmtpMailer {
    type Error = MailError;

    fn try_from(settings: EmailSettings) -> Result<Self, Self::Error> {
        let sender = Mailbox::new(
            Some(settings.sender_name.clone()),
            parse_address(&settings.username)?,
        );
        let receiver = Mailbox::new(None, parse_address(&settings.receiver)?);

        Ok(Self {
            settings,
            sender,
            receiver,
        })
    }
}

impl SmtpMailer {
    /// Makes exactly one delivery attempt. No retries.
    #[tracing::instrument(
        name = "Dispatching contact email",
        skip(self, contact),
        fields(smtp_host = %self.settings.host, smtp_port = self.settings.port)
    )]
    pub async fn dispatch(&self, contact: &ValidatedContact) -> DispatchOutcome {
        match self.send(contact).await {
            Ok(()) => {
                tracing::info!("Contact email accepted by the SMTP server");
                DispatchOutcome::Sent
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send contact email"
                );
                DispatchOutcome::Failed(e)
            }
        }
    }

    async fn send(&self, contact: &ValidatedContact) -> Result<(), MailError> {
        let message =
            ContactEmail::new(contact).build(self.sender.clone(), self.receiver.clone())?;
        let transport = transport::build(&self.settings)?;

        transport.send(message).await.map_err(MailError::Send)?;
        Ok(())
    }
}

fn parse_address(s: &str) -> Result<Address, MailError> {
    s.parse::<Address>()
        .map_err(|e| MailError::InvalidAddress(s.to_owned(), e))
}
