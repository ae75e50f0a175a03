pub mod telegram;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::error::BotError;

/// A destination that plain-text notifications can be delivered to.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn deliver(&self, text: &str) -> Result<(), BotError>;
}

/// Deliver a message, logging the outcome. Delivery failures are never
/// propagated: a broken chat must not stop the poll loop.
pub async fn send_message(notifier: &dyn Notifier, message: &str) {
    match notifier.deliver(message).await {
        Ok(()) => debug!("Message '{}' sent to chat", message),
        Err(e) => error!("{}", e),
    }
}
