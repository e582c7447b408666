//! Notification channel implementations.

pub mod webhook;

use async_trait::async_trait;

use crate::error::DeliverError;

/// Trait for notification channels.
#[async_trait]
pub trait NotifyChannel: Send + Sync {
    /// Get the name of this channel.
    fn name(&self) -> &'static str;

    /// Deliver a rendered message to this channel, exactly once.
    async fn deliver(&self, message: &str) -> Result<(), DeliverError>;
}
