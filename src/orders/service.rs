//! Order mutations and their notification trigger points
//!
//! `OrderService` is the only place that publishes. A notification goes out
//! strictly after the store has accepted the change, and publishing cannot
//! fail the operation: `Broker::publish` has no error path.

use std::sync::Arc;

use tracing::info;

use crate::broker::{ADMIN_NEW_ORDERS, Broker, order_topic};
use crate::orders::model::{NewOrder, Order, OrderId, is_known_status};
use crate::persistence::OrderStore;
use crate::utils::error::OrderError;

#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    broker: Arc<Broker>,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, broker: Arc<Broker>) -> Self {
        Self { store, broker }
    }

    pub fn broker(&self) -> &Arc<Broker> {
        &self.broker
    }

    /// Validate and store a new order, then tell the admin feed about it.
    pub fn create_order(&self, new_order: NewOrder) -> Result<Order, OrderError> {
        new_order.validate().map_err(OrderError::Invalid)?;

        let order = self.store.create(new_order)?;
        info!(order_id = order.id, "order created");

        self.broker.publish(ADMIN_NEW_ORDERS, &new_order_message(&order));
        Ok(order)
    }

    /// Move an order to `status`, then notify that order's watchers with the
    /// new status text.
    pub fn update_status(&self, id: OrderId, status: &str) -> Result<Order, OrderError> {
        if !is_known_status(status) {
            return Err(OrderError::UnknownStatus(status.to_string()));
        }

        let order = self.store.update_status(id, status)?;
        info!(order_id = id, status, "order status updated");

        self.broker.publish(&order_topic(id), &order.status);
        Ok(order)
    }

    pub fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.store.get(id)?.ok_or(OrderError::NotFound(id))
    }

    /// Whether an order with this id exists; used to vet stream requests.
    pub fn order_exists(&self, id: OrderId) -> Result<bool, OrderError> {
        Ok(self.store.get(id)?.is_some())
    }

    pub fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.store.list()?)
    }

    pub fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        self.store.delete(id)?;
        info!(order_id = id, "order deleted");
        Ok(())
    }
}

/// Text pushed to the admin feed for a new order.
pub fn new_order_message(order: &Order) -> String {
    format!("New order #{} from {}", order.id, order.customer_name)
}

impl std::fmt::Debug for OrderService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderService")
            .field("broker", &self.broker)
            .finish_non_exhaustive()
    }
}
