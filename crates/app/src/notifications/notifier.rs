//! Notifier seam.

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::notifications::payload::OrderNotification;

/// Errors that can occur when delivering a notification.
#[derive(Debug, Error)]
pub enum NotificationError {
    /// An HTTP transport or serialization error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The email service answered with a non-2xx status.
    #[error("unexpected response from email service: {0}")]
    UnexpectedResponse(String),
}

#[automock]
#[async_trait]
pub trait OrderNotifier: Send + Sync {
    /// Announce a placed order.
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError>;
}

/// Notifier used when no email service is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOrderNotifier;

#[async_trait]
impl OrderNotifier for NoopOrderNotifier {
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError> {
        tracing::debug!(
            order_number = %notification.order_number,
            "email service not configured; skipping order notification"
        );

        Ok(())
    }
}
