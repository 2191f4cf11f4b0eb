//! # Bridge Pattern
//!
//! Two independent dimensions joined by composition instead of inheritance.
//!
//! An alert is a combination of *how urgent* it is ([`Notification`]) and *how it
//! is delivered* ([`MsgSender`]). Each side varies on its own: a server-level
//! notification can go out by telephone today and by e-mail tomorrow without either
//! type changing, because the notification only holds "some sender".
//!
//! ```rust
//! use pattern_recipe::bridge::{Notification, ServerNotification, TelephoneMsgSender};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let sender = TelephoneMsgSender::new(vec!["555-0100".to_string()]);
//! let notification = ServerNotification::new(sender);
//! notification.notify("disk almost full").await;
//! # }
//! ```

use async_trait::async_trait;
use tracing::{debug, info};

/// Implementor side: a delivery channel.
#[async_trait]
pub trait MsgSender: Send + Sync {
    async fn send(&self, message: &str);
}

/// Delivers each message to every number on its list.
#[derive(Debug, Clone, Default)]
pub struct TelephoneMsgSender {
    telephones: Vec<String>,
}

impl TelephoneMsgSender {
    pub fn new(telephones: Vec<String>) -> Self {
        Self { telephones }
    }

    pub fn telephones(&self) -> &[String] {
        &self.telephones
    }
}

#[async_trait]
impl MsgSender for TelephoneMsgSender {
    async fn send(&self, message: &str) {
        for telephone in &self.telephones {
            // Delivery is a stub; the dial-out would happen here.
            debug!(%telephone, message, "Send");
        }
    }
}

/// Abstraction side: an alert level that delegates delivery to a [`MsgSender`].
#[async_trait]
pub trait Notification: Send + Sync {
    async fn notify(&self, msg: &str);
}

/// Server-level notification.
#[derive(Debug, Clone)]
pub struct ServerNotification<S: MsgSender> {
    sender: S,
}

impl<S: MsgSender> ServerNotification<S> {
    pub fn new(sender: S) -> Self {
        Self { sender }
    }

    pub fn sender(&self) -> &S {
        &self.sender
    }
}

#[async_trait]
impl<S: MsgSender> Notification for ServerNotification<S> {
    async fn notify(&self, msg: &str) {
        info!(msg, "Server notification");
        self.sender.send(msg).await;
    }
}
