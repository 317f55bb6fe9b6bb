use async_trait::async_trait;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{
    message::header::ContentType, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::application::ports::outgoing::{EmailSendError, EmailSender};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), EmailSendError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), EmailSendError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| EmailSendError::Transport(e.to_string()))
    }
}

pub struct SmtpEmailSender {
    mailer: Box<dyn Mailer>,
    from_email: String,
}

impl SmtpEmailSender {
    pub fn new_with_mailer(mailer: Box<dyn Mailer>, from_email: &str) -> Self {
        Self {
            mailer,
            from_email: from_email.to_string(),
        }
    }

    /// TLS relay with credentials.
    pub fn new(
        smtp_server: &str,
        smtp_username: &str,
        smtp_password: &str,
        from_email: &str,
    ) -> Result<Self, EmailSendError> {
        let creds = Credentials::new(smtp_username.to_string(), smtp_password.to_string());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| EmailSendError::Transport(e.to_string()))?
            .credentials(creds)
            .build();

        Ok(Self::new_with_mailer(Box::new(transport), from_email))
    }

    /// Plain SMTP, no TLS or auth (Mailpit, MailHog).
    pub fn new_local(host: &str, port: u16, from_email: &str) -> Self {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host)
            .port(port)
            .build();

        Self::new_with_mailer(Box::new(transport), from_email)
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailSendError> {
        let from = self
            .from_email
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("from: {}", e)))?;
        let to = to
            .parse()
            .map_err(|e| EmailSendError::InvalidAddress(format!("to: {}", e)))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| EmailSendError::InvalidMessage(e.to_string()))?;

        self.mailer.send(email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingMailer {
        sent: Arc<Mutex<Vec<Message>>>,
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: Message) -> Result<(), EmailSendError> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    struct DummyMailer;

    #[async_trait]
    impl Mailer for DummyMailer {
        async fn send(&self, _: Message) -> Result<(), EmailSendError> {
            panic!("Should not reach mailer");
        }
    }

    #[tokio::test]
    async fn sends_html_message() {
        let mailer = RecordingMailer::default();
        let sender =
            SmtpEmailSender::new_with_mailer(Box::new(mailer.clone()), "noreply@example.com");

        sender
            .send_email("ana@example.com", "Account verification", "<p>Hi</p>")
            .await
            .unwrap();

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let raw = String::from_utf8(sent[0].formatted()).unwrap();
        assert!(raw.contains("Subject: Account verification"));
        assert!(raw.contains("text/html"));
    }

    #[tokio::test]
    async fn invalid_from_address_is_rejected() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(DummyMailer), "invalid-from-email");

        let result = sender
            .send_email("ana@example.com", "Subject", "<p>Test</p>")
            .await;

        assert!(matches!(result, Err(EmailSendError::InvalidAddress(msg)) if msg.starts_with("from")));
    }

    #[tokio::test]
    async fn invalid_to_address_is_rejected() {
        let sender = SmtpEmailSender::new_with_mailer(Box::new(DummyMailer), "noreply@example.com");

        let result = sender.send_email("not-an-email", "Subject", "<p>Test</p>").await;

        assert!(matches!(result, Err(EmailSendError::InvalidAddress(msg)) if msg.starts_with("to")));
    }

    #[tokio::test]
    async fn unreachable_relay_is_a_transport_error() {
        let sender = SmtpEmailSender::new(
            "smtp.this-will-fail.invalid",
            "user",
            "pass",
            "from@example.com",
        )
        .unwrap();

        let result = sender
            .send_email("to@example.com", "Subject", "<p>Body</p>")
            .await;

        assert!(matches!(result, Err(EmailSendError::Transport(_))));
    }
}
