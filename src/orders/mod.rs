//! The `orders` module: the order model and the operations that change it.
//!
//! Status updates and new orders are the notification trigger points; see
//! `OrderService`.

pub mod model;
pub mod service;

pub use model::{NewOrder, ORDER_STATUSES, Order, OrderId};
pub use service::OrderService;

#[cfg(test)]
mod tests;
