//! The `persistence` module holds the order store the trigger points mutate.
//!
//! `OrderStore` is the seam the rest of the application depends on; the
//! shipped implementation uses `sled` as an embedded key-value store.

pub mod sled_store;

use crate::orders::model::{NewOrder, Order, OrderId};
use crate::utils::error::StoreError;

pub use sled_store::SledOrderStore;

/// Lookup and mutation of orders.
pub trait OrderStore: Send + Sync {
    /// Persist a new order in its initial status and return it with its id.
    fn create(&self, new_order: NewOrder) -> Result<Order, StoreError>;

    fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError>;

    /// All orders, oldest first.
    fn list(&self) -> Result<Vec<Order>, StoreError>;

    /// Overwrite the status of an existing order.
    fn update_status(&self, id: OrderId, status: &str) -> Result<Order, StoreError>;

    fn delete(&self, id: OrderId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests;
