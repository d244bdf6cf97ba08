//! Scoped subscription
//!
//! `Subscription` ties a subscriber to the broker for as long as the value
//! lives. Opening one subscribes; dropping it unsubscribes, which also closes
//! the mailbox. Because release happens in `Drop`, every way a connection can
//! end (stream finished, client gone, server shutting down, panic unwinding)
//! runs exactly one unsubscribe.

use std::sync::Arc;

use tracing::debug;

use crate::broker::Broker;
use crate::client::Subscriber;

#[derive(Debug)]
pub struct Subscription {
    broker: Arc<Broker>,
    topic: String,
    subscriber: Subscriber,
}

impl Subscription {
    /// Create a fresh subscriber and attach it to `topic`.
    pub fn open(broker: Arc<Broker>, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        let subscriber = broker.new_subscriber();
        broker.subscribe(&topic, &subscriber);
        Self {
            broker,
            topic,
            subscriber,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn subscriber(&self) -> &Subscriber {
        &self.subscriber
    }

    /// Wait for the next notification; `None` once the mailbox is closed.
    pub async fn recv(&self) -> Option<String> {
        self.subscriber.recv().await
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.broker.unsubscribe(&self.topic, &self.subscriber);
        debug!(topic = %self.topic, subscriber = %self.subscriber.id, "subscription released");
    }
}
