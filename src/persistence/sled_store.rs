//! Order store backed by `sled`
//!
//! Orders live in a single `orders` tree. Keys are the big-endian bytes of the
//! order id so iteration yields orders in creation order; values are the
//! JSON-encoded `Order`. Ids come from `sled`'s monotonic id generator.

use chrono::Utc;
use sled::{Db, Tree};
use tracing::debug;

use crate::orders::model::{NewOrder, Order, OrderId, initial_status};
use crate::persistence::OrderStore;
use crate::utils::error::StoreError;

const ORDERS_TREE: &str = "orders";

#[derive(Clone)]
pub struct SledOrderStore {
    db: Db,
    orders: Tree,
}

impl SledOrderStore {
    /// Open or create a sled database at `path`.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        Self::from_db(db)
    }

    /// A store that lives only as long as the process; used by tests and
    /// throwaway runs.
    pub fn temporary() -> Result<Self, StoreError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: Db) -> Result<Self, StoreError> {
        let orders = db.open_tree(ORDERS_TREE)?;
        Ok(Self { db, orders })
    }

    fn write(&self, order: &Order) -> Result<(), StoreError> {
        let serialized = serde_json::to_vec(order)?;
        self.orders.insert(order.id.to_be_bytes(), serialized)?;
        Ok(())
    }
}

impl OrderStore for SledOrderStore {
    fn create(&self, new_order: NewOrder) -> Result<Order, StoreError> {
        // generate_id starts at zero; order numbers start at one
        let id = self.db.generate_id()? + 1;
        let order = Order {
            id,
            customer_name: new_order.customer_name,
            phone: new_order.phone,
            address: new_order.address,
            size: new_order.size,
            pizza_types: new_order.pizza_types,
            instructions: new_order.instructions,
            status: initial_status().to_string(),
            created_at: Utc::now(),
        };
        self.write(&order)?;
        debug!(order_id = id, "order stored");
        Ok(order)
    }

    fn get(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        match self.orders.get(id.to_be_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    fn list(&self) -> Result<Vec<Order>, StoreError> {
        self.orders
            .iter()
            .values()
            .map(|value| -> Result<Order, StoreError> {
                let bytes = value?;
                Ok(serde_json::from_slice(&bytes)?)
            })
            .collect()
    }

    /// Read-modify-write guarded by compare-and-swap, so a concurrent
    /// `delete` is never undone by a status change.
    fn update_status(&self, id: OrderId, status: &str) -> Result<Order, StoreError> {
        let key = id.to_be_bytes();
        loop {
            let current = self.orders.get(key)?.ok_or(StoreError::NotFound(id))?;
            let mut order: Order = serde_json::from_slice(&current)?;
            order.status = status.to_string();
            let updated = serde_json::to_vec(&order)?;

            match self.orders.compare_and_swap(key, Some(current), Some(updated))? {
                Ok(()) => return Ok(order),
                // changed or removed since the read; look again
                Err(_) => continue,
            }
        }
    }

    fn delete(&self, id: OrderId) -> Result<(), StoreError> {
        match self.orders.remove(id.to_be_bytes())? {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }
}

impl std::fmt::Debug for SledOrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledOrderStore")
            .field("db", &"sled::Db")
            .field("orders", &self.orders.len())
            .finish()
    }
}
