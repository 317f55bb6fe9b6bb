use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::account::application::ports::outgoing::TokenProvider;
use crate::email::application::ports::outgoing::{
    AccountEmailNotificationError, AccountEmailNotifier, EmailSender,
};

pub const CONFIRMATION_SUBJECT: &str = "Account verification";

/// Mails account-confirmation links.
#[derive(Clone)]
pub struct AccountEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
    confirmation_url: String,
}

impl fmt::Debug for AccountEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("confirmation_url", &self.confirmation_url)
            .finish()
    }
}

impl AccountEmailService {
    pub fn new(
        sender: Arc<dyn EmailSender + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
        confirmation_url: &str,
    ) -> Self {
        Self {
            sender,
            tokens,
            confirmation_url: confirmation_url.trim_end_matches('/').to_string(),
        }
    }

    fn confirmation_link(&self, token: &str) -> String {
        format!("{}?token={}", self.confirmation_url, token)
    }

    fn render_body(username: &str, link: &str) -> String {
        format!(
            "<html><body>\
             <p>Hi {username},</p>\
             <p>Thanks for joining. Please confirm your email address to start posting.</p>\
             <p><a href=\"{link}\">Confirm my account</a></p>\
             <p>If the button does not work, copy this link into your browser:<br>{link}</p>\
             </body></html>"
        )
    }
}

#[async_trait]
impl AccountEmailNotifier for AccountEmailService {
    async fn send_confirmation_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<(), AccountEmailNotificationError> {
        let token = self
            .tokens
            .generate_confirmation_token(username)
            .map_err(|e| AccountEmailNotificationError::TokenGenerationFailed(e.to_string()))?;

        let body = Self::render_body(username, &self.confirmation_link(&token));

        self.sender
            .send_email(email, CONFIRMATION_SUBJECT, &body)
            .await
            .map_err(|e| AccountEmailNotificationError::EmailSendingFailed(e.to_string()))?;

        tracing::info!(username = %username, "Confirmation email sent");
        Ok(())
    }
}
