//! Notifications Config

use std::time::Duration;

use clap::Args;

use stayshop_app::notifications::HttpNotifierConfig;

/// Email collaborator settings. Leaving the URL unset disables order
/// notifications.
#[derive(Debug, Args)]
pub struct NotificationsConfig {
    /// Base URL of the email service
    #[arg(long, env = "EMAIL_SERVICE_URL")]
    pub email_service_url: Option<String>,

    /// Per-request timeout for the email service, in seconds
    #[arg(long, env = "EMAIL_SERVICE_TIMEOUT_SECONDS", default_value_t = 3)]
    pub email_service_timeout_seconds: u64,
}

impl NotificationsConfig {
    #[must_use]
    pub fn notifier_config(&self) -> Option<HttpNotifierConfig> {
        let endpoint = self.email_service_url.as_deref()?.trim();

        if endpoint.is_empty() {
            return None;
        }

        Some(HttpNotifierConfig {
            endpoint: endpoint.to_string(),
            timeout: Duration::from_secs(self.email_service_timeout_seconds),
        })
    }
}
