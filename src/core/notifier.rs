use crate::core::{MailTransport, Notification};
use crate::utils::error::NotificationError;

pub struct Notifier<T: MailTransport> {
    transport: T,
}

impl<T: MailTransport> Notifier<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        check_message(notification)?;
        tracing::debug!(
            "Sending notification to {} ({} byte body)",
            notification.recipient,
            notification.body.len()
        );
        self.transport.deliver(notification).await
    }
}

/// Recipient and subject end up as separate argv entries; these checks stop
/// them from being read as options or splitting mail headers.
pub fn check_message(notification: &Notification) -> Result<(), NotificationError> {
    let invalid = |field: &str, reason: &str| NotificationError::InvalidMessage {
        field: field.to_string(),
        reason: reason.to_string(),
    };

    let recipient = notification.recipient.as_str();
    if recipient.is_empty() {
        return Err(invalid("recipient", "must not be empty"));
    }
    if recipient.starts_with('-') {
        return Err(invalid("recipient", "must not start with '-'"));
    }
    if recipient.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(invalid("recipient", "must not contain whitespace or control characters"));
    }
    if notification.subject.contains(['\r', '\n']) {
        return Err(invalid("subject", "must not contain line breaks"));
    }
    Ok(())
}
