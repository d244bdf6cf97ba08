use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order statuses in the order a pizza moves through them.
pub const ORDER_STATUSES: [&str; 5] = [
    "Order placed",
    "Preparing",
    "Baking",
    "Quality Check",
    "Ready",
];

pub const PIZZA_SIZES: [&str; 3] = ["Small", "Medium", "Large"];

pub const PIZZA_TYPES: [&str; 3] = ["Cheese", "Pepperoni", "Veggie"];

pub type OrderId = u64;

/// A persisted order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub size: String,
    pub pizza_types: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied by the customer when placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer_name: String,
    pub phone: String,
    pub address: String,
    pub size: String,
    pub pizza_types: Vec<String>,
    #[serde(default)]
    pub instructions: String,
}

impl NewOrder {
    /// Check the order against the catalogue. Returns a message describing
    /// the first problem found.
    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("customer_name is required".to_string());
        }
        if self.phone.trim().is_empty() {
            return Err("phone is required".to_string());
        }
        if self.address.trim().is_empty() {
            return Err("address is required".to_string());
        }
        if !PIZZA_SIZES.contains(&self.size.as_str()) {
            return Err(format!("unknown pizza size '{}'", self.size));
        }
        if self.pizza_types.is_empty() {
            return Err("at least one pizza type is required".to_string());
        }
        if let Some(unknown) = self
            .pizza_types
            .iter()
            .find(|t| !PIZZA_TYPES.contains(&t.as_str()))
        {
            return Err(format!("unknown pizza type '{unknown}'"));
        }
        Ok(())
    }
}

pub fn is_known_status(status: &str) -> bool {
    ORDER_STATUSES.contains(&status)
}

/// Status every new order starts in.
pub fn initial_status() -> &'static str {
    ORDER_STATUSES[0]
}
