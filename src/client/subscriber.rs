use std::sync::Arc;

use uuid::Uuid;

use crate::broker::Mailbox;

pub type SubscriberId = String;

/// A registered recipient of one topic's notifications.
///
/// The handle is cheap to clone; clones share the same mailbox. The broker
/// keeps one clone in its registry and the connection that owns the
/// subscription keeps another to drain it.
#[derive(Debug, Clone)]
pub struct Subscriber {
    /// Unique identifier used for registry membership (UUID v4).
    pub id: SubscriberId,

    mailbox: Arc<Mailbox>,
}

impl Subscriber {
    /// Create a subscriber with an open mailbox of the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            mailbox: Arc::new(Mailbox::new(capacity)),
        }
    }

    pub fn mailbox(&self) -> &Mailbox {
        &self.mailbox
    }

    /// Wait for the next notification; `None` once unsubscribed.
    pub async fn recv(&self) -> Option<String> {
        self.mailbox.recv().await
    }
}
