//! Fire-and-forget dispatch.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{Instrument, info_span};

use crate::notifications::{notifier::OrderNotifier, payload::OrderNotification};

/// Hands notifications to a detached task so the request path never waits on
/// the email service.
#[derive(Clone)]
pub struct NotificationDispatcher {
    notifier: Arc<dyn OrderNotifier>,
}

impl std::fmt::Debug for NotificationDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationDispatcher").finish_non_exhaustive()
    }
}

impl NotificationDispatcher {
    #[must_use]
    pub fn new(notifier: Arc<dyn OrderNotifier>) -> Self {
        Self { notifier }
    }

    /// Spawn delivery on the current Tokio runtime and return immediately.
    ///
    /// Failures are logged at `warn` and dropped. Callers normally discard the
    /// handle.
    pub fn dispatch(&self, notification: OrderNotification) -> JoinHandle<()> {
        let notifier = Arc::clone(&self.notifier);
        let span = info_span!(
            "notifications.dispatch",
            order_number = %notification.order_number
        );

        tokio::spawn(
            async move {
                if let Err(error) = notifier.notify(notification).await {
                    tracing::warn!(error = %error, "order notification failed");
                }
            }
            .instrument(span),
        )
    }
}
