use async_trait::async_trait;
use resend_rs::types::CreateEmailBaseOptions;
use resend_rs::Resend;

use crate::config::mail::MailConfig;

/// Transactional-email dispatch. One plain-text message per call, best
/// effort, no retries. The sender identity and recipient belong to the
/// implementation, not the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send_text(&self, subject: &str, body: &str) -> anyhow::Result<()>;
}

/// Resend-backed mailer, constructed once at startup from the configured
/// credential and shared across requests.
pub struct ResendMailer {
    client: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    pub fn new(config: &MailConfig) -> Self {
        ResendMailer {
            client: Resend::new(&config.api_key),
            from: config.from.clone(),
            to: config.to.clone(),
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_text(&self, subject: &str, body: &str) -> anyhow::Result<()> {
        let email = CreateEmailBaseOptions::new(&self.from, [self.to.as_str()], subject)
            .with_text(body);
        self.client.emails.send(email).await?;
        Ok(())
    }
}
