//! src/email/smtp/transport.rs
use super::MailError;
use crate::configuration::{EmailSettings, TlsMode};
use lettre::transport::smtp::authentication::Credentials;
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, Tokio1Executor};
use secrecy::ExposeSecret;

pub type Transport = AsyncSmtpTransport<Tokio1Executor>;

/// Transport for a single send.
///
/// lettre connects inside `send` and, with the `pool` feature off, disconnects
/// when the send is done.
pub fn build(settings: &EmailSettings) -> Result<Transport, MailError> {
    let tls = match settings.tls {
        TlsMode::None => Tls::None,
        TlsMode::Opportunistic => Tls::Opportunistic(tls_parameters(&settings.host)?),
        TlsMode::Required => Tls::Required(tls_parameters(&settings.host)?),
        TlsMode::Wrapper => Tls::Wrapper(tls_parameters(&settings.host)?),
    };

    let credentials = Credentials::new(
        settings.username.clone(),
        settings.password.expose_secret().clone(),
    );

    let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        .port(settings.port)
        .tls(tls)
        .credentials(credentials)
        .timeout(Some(settings.timeout()))
        .build();

    Ok(transport)
}

fn tls_parameters(host: &str) -> Result<TlsParameters, MailError> {
    TlsParameters::new(host.to_owned()).map_err(MailError::Transport)
}
