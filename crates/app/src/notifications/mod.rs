//! Order Notifications
//!
//! After checkout commits, the order is announced to an external email
//! service. Delivery is at-most-once: nothing is retried and failures never
//! reach the caller.

mod dispatcher;
mod http;
mod notifier;
mod payload;

pub use dispatcher::NotificationDispatcher;
pub use http::{HttpNotifierConfig, HttpOrderNotifier};
pub use notifier::{MockOrderNotifier, NoopOrderNotifier, NotificationError, OrderNotifier};
pub use payload::{NotificationItem, OrderNotification};
