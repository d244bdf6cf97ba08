//! The `client` module defines how a connected client is represented in the
//! broker.
//!
//! It provides the `Subscriber` handle, which wraps the client's mailbox and
//! identifies it in the registry, and the `Subscription` guard, which keeps a
//! subscriber attached to a topic for exactly as long as the guard lives.

pub mod subscriber;
pub mod subscription;

pub use subscriber::{Subscriber, SubscriberId};
pub use subscription::Subscription;
