use std::sync::Arc;

use crate::account::application::ports::incoming::use_cases::{
    SignUpCommand, SignUpError, SignUpUseCase,
};
use crate::account::application::ports::outgoing::AccountSummary;
use crate::email::application::ports::outgoing::AccountEmailNotifier;

// ============================================================================
// Account Registration (Orchestration Layer)
// ============================================================================

#[derive(Clone)]
pub struct AccountRegistrationOrchestrator {
    sign_up_use_case: Arc<dyn SignUpUseCase + Send + Sync>,
    email_notifier: Arc<dyn AccountEmailNotifier + Send + Sync>,
}

impl AccountRegistrationOrchestrator {
    pub fn new(
        sign_up_use_case: Arc<dyn SignUpUseCase + Send + Sync>,
        email_notifier: Arc<dyn AccountEmailNotifier + Send + Sync>,
    ) -> Self {
        Self {
            sign_up_use_case,
            email_notifier,
        }
    }

    /// Creates the account, then mails the confirmation link.
    ///
    /// The mail is sent inline, once. A failed send is logged and the
    /// account stays created.
    pub async fn register(&self, command: SignUpCommand) -> Result<AccountSummary, SignUpError> {
        let account = self.sign_up_use_case.execute(command).await?;

        if let Err(e) = self
            .email_notifier
            .send_confirmation_email(&account.username, &account.email)
            .await
        {
            tracing::error!(
                username = %account.username,
                error = %e,
                "Failed to send confirmation email"
            );
        }

        Ok(account)
    }
}
