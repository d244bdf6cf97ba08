//! The `broker` module: topic registry, bounded mailboxes and fan-out.
//!
//! Public types:
//! - `Broker`: subscribe, unsubscribe and publish over the topic registry.
//! - `Mailbox`: the bounded queue behind every subscriber.
//!
//! Used by the order service (publishing) and by the SSE transport
//! (subscribing for the lifetime of a connection).

pub mod engine;
pub mod mailbox;
pub mod topic;

pub use engine::Broker;
pub use mailbox::{Enqueue, Mailbox, TryRecvError};
pub use topic::{ADMIN_NEW_ORDERS, order_topic};
