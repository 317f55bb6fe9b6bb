#[derive(Debug, thiserror::Error)]
pub enum AccountEmailNotificationError {
    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),

    #[error("Email sending failed: {0}")]
    EmailSendingFailed(String),
}

#[async_trait::async_trait]
pub trait AccountEmailNotifier: Send + Sync {
    async fn send_confirmation_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<(), AccountEmailNotificationError>;
}
