//! SMTP delivery via lettre

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::PoolConfig;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Notifier, NotifyError, OutboundEmail};
use crate::core::config::MailConfig;

/// Pooled SMTP connections kept open between sends
const POOL_MAX_SIZE: u32 = 5;

pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpNotifier {
    /// Build the transport. No connection is made until the first send or [`Self::verify`].
    pub fn new(config: &MailConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| NotifyError::Address(format!("from '{}': {e}", config.from)))?;

        let builder = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        }
        .map_err(|e| NotifyError::Transport(e.to_string()))?
        .port(config.port)
        .pool_config(PoolConfig::new().max_size(POOL_MAX_SIZE));

        let builder = if config.user.is_empty() {
            builder
        } else {
            builder.credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
        };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Open a connection and run the SMTP handshake
    pub async fn verify(&self) -> Result<(), NotifyError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(NotifyError::Transport("server did not accept the connection".into())),
            Err(e) => Err(NotifyError::Transport(e.to_string())),
        }
    }

    fn build_message(&self, email: OutboundEmail) -> Result<Message, NotifyError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| NotifyError::Address(format!("to '{}': {e}", email.to)))?;

        let html = SinglePart::html(email.html_body);
        let body = match email.inline_image {
            Some(image) => {
                let content_type = ContentType::parse(&image.content_type)
                    .map_err(|e| NotifyError::Build(e.to_string()))?;
                MultiPart::related()
                    .singlepart(html)
                    .singlepart(Attachment::new_inline(image.content_id).body(image.bytes, content_type))
            }
            None => MultiPart::alternative().singlepart(html),
        };

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .multipart(body)
            .map_err(|e| NotifyError::Build(e.to_string()))
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, email: OutboundEmail) -> Result<(), NotifyError> {
        let to = email.to.clone();
        let message = self.build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        tracing::info!(to = %to, "Confirmation email sent");
        Ok(())
    }
}
