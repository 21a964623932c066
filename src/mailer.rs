// Outbound email delivery
// Sends the account verification code over SMTP; delivery failure is never
// fatal to the caller

use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use thiserror::Error;

/// Errors raised while building or sending an email
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("mailer is not configured")]
    NotConfigured,
    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

/// Handle for sending account emails
///
/// Constructed once at startup and cloned into the auth service. When the
/// SMTP environment variables are absent the mailer is disabled: sends fail
/// with `NotConfigured`, which callers log and ignore.
#[derive(Clone)]
pub struct Mailer {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
}

impl Mailer {
    /// Build a mailer from SMTP_HOST / EMAIL_USER / EMAIL_PASSWORD
    ///
    /// Returns a disabled mailer when the variables are not set, so the API
    /// can run (and be tested) without an SMTP server.
    pub fn from_env() -> Result<Self, MailerError> {
        let (Ok(host), Ok(user), Ok(password)) = (
            std::env::var("SMTP_HOST"),
            std::env::var("EMAIL_USER"),
            std::env::var("EMAIL_PASSWORD"),
        ) else {
            tracing::warn!("SMTP not configured; verification emails will not be sent");
            return Ok(Self::disabled());
        };

        let from: Mailbox = format!("SwiftCare <{}>", user).parse()?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&host)?
            .credentials(Credentials::new(user, password))
            .build();

        Ok(Self {
            transport: Some(transport),
            from: Some(from),
        })
    }

    /// A mailer that drops every message; used in tests and when SMTP is
    /// not configured
    pub fn disabled() -> Self {
        Self {
            transport: None,
            from: None,
        }
    }

    /// Send the 6-digit verification code to a freshly registered user
    pub async fn send_verification_email(
        &self,
        to: &str,
        first_name: &str,
        code: &str,
    ) -> Result<(), MailerError> {
        let (Some(transport), Some(from)) = (&self.transport, &self.from) else {
            return Err(MailerError::NotConfigured);
        };

        let text = format!(
            "Hello {first_name},\n\nYour SwiftCare verification code is {code}.\n\n\
             Enter it to activate your account.\n"
        );
        let html = format!(
            "<p>Hello {first_name},</p>\
             <p>Your SwiftCare verification code is <strong>{code}</strong>.</p>\
             <p>Enter it to activate your account.</p>"
        );

        let email = Message::builder()
            .from(from.clone())
            .to(to.parse()?)
            .subject("Verify your SwiftCare account")
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html),
                    ),
            )?;

        transport.send(email).await?;
        tracing::info!("Verification email sent to {}", to);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disabled_mailer_reports_not_configured() {
        let mailer = Mailer::disabled();
        let result = mailer
            .send_verification_email("jane@x.com", "Jane", "042137")
            .await;
        assert!(matches!(result, Err(MailerError::NotConfigured)));
    }
}
