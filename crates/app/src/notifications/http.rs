//! Email service client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::notifications::{
    notifier::{NotificationError, OrderNotifier},
    payload::OrderNotification,
};

/// Configuration for the email service.
#[derive(Debug, Clone)]
pub struct HttpNotifierConfig {
    /// Base URL, e.g. `"http://localhost:8001"`.
    pub endpoint: String,

    /// Upper bound on each request.
    pub timeout: Duration,
}

/// Posts order notifications to the email service.
#[derive(Debug, Clone)]
pub struct HttpOrderNotifier {
    config: HttpNotifierConfig,
    http: Client,
}

impl HttpOrderNotifier {
    /// Create a notifier from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: HttpNotifierConfig) -> Result<Self, NotificationError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    async fn post(&self, path: &str, body: &OrderNotification) -> Result<(), NotificationError> {
        let url = format!("{}/{path}", self.config.endpoint.trim_end_matches('/'));

        let response = self.http.post(&url).json(body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(NotificationError::UnexpectedResponse(format!(
                "{path} failed with status {status}: {text}"
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl OrderNotifier for HttpOrderNotifier {
    /// Sends the customer confirmation (when there is an email) and then the
    /// admin notification. The admin call is made even if the confirmation
    /// fails; the first error is returned.
    async fn notify(&self, notification: OrderNotification) -> Result<(), NotificationError> {
        let confirmation = if notification.has_customer_email() {
            self.post("send-order-confirmation", &notification).await
        } else {
            Ok(())
        };

        let admin = self.post("send-admin-notification", &notification).await;

        confirmation.and(admin)
    }
}
