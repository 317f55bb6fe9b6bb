pub mod account_email_notifier;
pub mod email_sender;

pub use account_email_notifier::{AccountEmailNotificationError, AccountEmailNotifier};
pub use email_sender::{EmailSendError, EmailSender};
