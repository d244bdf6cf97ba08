//! Broker engine
//!
//! The in-memory notification broker responsible for:
//! - keeping the registry of topics and their subscribers
//! - fanning a published message out to every subscriber of a topic
//! - closing a subscriber's mailbox when it is unsubscribed
//!
//! Concurrency and usage notes:
//! - The registry sits behind a reader/writer lock owned by the broker, so the
//!   broker itself is shared as a plain `Arc<Broker>`.
//! - `publish` takes the read lock: publishes never exclude each other.
//!   `subscribe` and `unsubscribe` take the write lock.
//! - A subscriber belongs to at most one topic. A handle that is already
//!   attached elsewhere, or whose mailbox is closed, is not registered again.
//! - Nothing here waits on I/O. Delivery is a non-blocking enqueue into each
//!   subscriber's mailbox; a full mailbox loses that one message.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::broker::mailbox::{DEFAULT_CAPACITY, Enqueue};
use crate::broker::topic::Topic;
use crate::client::{Subscriber, SubscriberId};

#[derive(Debug)]
pub struct Broker {
    registry: RwLock<Registry>,
    mailbox_capacity: usize,
}

/// Topic entries plus the reverse index from subscriber to its topic.
#[derive(Debug, Default)]
struct Registry {
    topics: HashMap<String, Topic>,
    memberships: HashMap<SubscriberId, String>,
}

impl Default for Broker {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl Broker {
    /// Create an empty broker whose subscribers buffer up to
    /// `mailbox_capacity` undelivered messages each.
    pub fn new(mailbox_capacity: usize) -> Self {
        Self {
            registry: RwLock::new(Registry::default()),
            mailbox_capacity,
        }
    }

    pub fn mailbox_capacity(&self) -> usize {
        self.mailbox_capacity
    }

    /// Build a subscriber with this broker's mailbox capacity. It receives
    /// nothing until passed to [`Broker::subscribe`].
    pub fn new_subscriber(&self) -> Subscriber {
        Subscriber::new(self.mailbox_capacity)
    }

    /// Attach `subscriber` to `topic`, creating the topic entry on first use.
    ///
    /// Ignored when the subscriber's mailbox is already closed or when it is
    /// attached to a different topic. Subscribing twice to the same topic is
    /// a no-op.
    pub fn subscribe(&self, topic: &str, subscriber: &Subscriber) {
        let mut registry = self.registry.write();
        if subscriber.mailbox().is_closed() {
            debug!(topic, subscriber = %subscriber.id, "closed subscriber not registered");
            return;
        }
        if let Some(current) = registry.memberships.get(&subscriber.id) {
            if current != topic {
                debug!(
                    topic,
                    current = current.as_str(),
                    subscriber = %subscriber.id,
                    "subscriber already attached to another topic"
                );
            }
            return;
        }

        registry
            .topics
            .entry(topic.to_string())
            .or_insert_with(|| Topic::new(topic))
            .subscribe(subscriber);
        registry.memberships.insert(subscriber.id.clone(), topic.to_string());
        debug!(topic, subscriber = %subscriber.id, "subscribed");
    }

    /// Detach `subscriber` from `topic` and close its mailbox. The topic entry
    /// goes away with its last subscriber. Unknown topics or subscribers are
    /// ignored.
    pub fn unsubscribe(&self, topic: &str, subscriber: &Subscriber) {
        let mut registry = self.registry.write();
        let Some(entry) = registry.topics.get_mut(topic) else {
            return;
        };

        if let Some(removed) = entry.unsubscribe(&subscriber.id) {
            removed.mailbox().close();
            debug!(topic, subscriber = %subscriber.id, "unsubscribed");
        }

        if entry.is_empty() {
            registry.topics.remove(topic);
            debug!(topic, "removed empty topic");
        }
        if registry.memberships.get(&subscriber.id).map(String::as_str) == Some(topic) {
            registry.memberships.remove(&subscriber.id);
        }
    }

    /// Offer `message` to every subscriber of `topic`.
    ///
    /// Delivery is at-most-once: a subscriber whose mailbox is full misses the
    /// message and nobody is told. Publishing to a topic without subscribers
    /// does nothing.
    pub fn publish(&self, topic: &str, message: &str) {
        let registry = self.registry.read();
        let Some(entry) = registry.topics.get(topic) else {
            trace!(topic, "no subscribers");
            return;
        };

        let mut dropped = 0usize;
        for subscriber in entry.subscribers.values() {
            match subscriber.mailbox().try_enqueue(message) {
                Enqueue::Queued => {}
                Enqueue::Full => {
                    dropped += 1;
                    debug!(topic, subscriber = %subscriber.id, "mailbox full, message dropped");
                }
                Enqueue::Closed => {
                    dropped += 1;
                }
            }
        }

        trace!(topic, subscribers = entry.len(), dropped, "published");
    }

    /// Number of subscribers currently attached to `topic`.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.registry.read().topics.get(topic).map_or(0, Topic::len)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.registry.read().topics.contains_key(topic)
    }

    /// Number of topics with at least one subscriber.
    pub fn topic_count(&self) -> usize {
        self.registry.read().topics.len()
    }
}
