//! Topic management
//!
//! A `Topic` holds the subscribers currently attached to one topic name.
//! Subscriptions are keyed by `SubscriberId`, so subscribing twice is a
//! no-op. Callers synchronize access through the broker's registry lock.
//!
//! Topic names are opaque strings. The application uses two shapes:
//! `order:<id>` for a single order's status changes and
//! [`ADMIN_NEW_ORDERS`] for the admin dashboard feed.

use std::collections::HashMap;

use crate::client::{Subscriber, SubscriberId};

/// Topic receiving a message for every newly placed order.
pub const ADMIN_NEW_ORDERS: &str = "admin:new_orders";

/// Topic carrying status changes of one order.
pub fn order_topic(order_id: u64) -> String {
    format!("order:{order_id}")
}

#[derive(Debug, Default)]
pub struct Topic {
    pub name: String,
    pub subscribers: HashMap<SubscriberId, Subscriber>,
}

impl Topic {
    /// Create a new topic with the given name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            subscribers: HashMap::new(),
        }
    }

    /// Add a subscriber to the topic. Duplicate adds are ignored.
    pub fn subscribe(&mut self, subscriber: &Subscriber) {
        self.subscribers
            .entry(subscriber.id.clone())
            .or_insert_with(|| subscriber.clone());
    }

    /// Remove a subscriber, handing it back if it was attached.
    pub fn unsubscribe(&mut self, id: &SubscriberId) -> Option<Subscriber> {
        self.subscribers.remove(id)
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }
}
