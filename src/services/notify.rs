use async_trait::async_trait;

use crate::store::Message;

/// Outbound notification fired when a contact message arrives. Delivery is
/// best-effort: implementations swallow their own failures, and the sender
/// never learns whether notification happened.
#[async_trait]
pub trait MessageNotifier: Send + Sync {
    async fn notify(&self, message: &Message);
}

/// Records the event in the log. Stands in for an email sender in
/// deployments that have not wired one up.
pub struct LogNotifier;

#[async_trait]
impl MessageNotifier for LogNotifier {
    async fn notify(&self, message: &Message) {
        tracing::info!(
            from = %message.email,
            subject = message.subject.as_deref().unwrap_or("(none)"),
            "contact message received"
        );
    }
}
