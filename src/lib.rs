//! # ordercast
//!
//! `ordercast` is the live-notification service of an order-tracking
//! application. Customers keep an order page open and receive status changes
//! as Server-Sent Events; the admin dashboard receives a stream of newly
//! placed orders. Everything is in-memory and best-effort: a notification that
//! cannot be delivered is simply dropped.
//!
//! ## Core Modules
//!
//! - `broker`: the topic registry, bounded per-subscriber mailboxes and fan-out.
//! - `client`: the subscriber handle and the scoped subscription guard.
//! - `config`: loading server, broker, store and logging settings.
//! - `orders`: the order model and the mutations that publish notifications.
//! - `persistence`: the order store (`sled`).
//! - `transport`: the HTTP API, the SSE stream adapter and the server loop.
//! - `utils`: logging setup and shared error types.

pub mod broker;
pub mod client;
pub mod config;
pub mod orders;
pub mod persistence;
pub mod transport;
pub mod utils;
