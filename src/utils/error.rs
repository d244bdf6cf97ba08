//! The `error` module defines the error types shared across `ordercast`.
//!
//! Broker operations have no error path at all: unknown topics, repeated
//! unsubscribes and full mailboxes are no-ops. Errors only come
//! from the order store and from validating order mutations.

use thiserror::Error;

use crate::orders::OrderId;

/// Failures of the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("storage error: {0}")]
    Sled(#[from] sled::Error),

    #[error("corrupt order record: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Failures of order operations, as seen by callers of `OrderService`.
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("order {0} not found")]
    NotFound(OrderId),

    #[error("invalid order: {0}")]
    Invalid(String),

    #[error("unknown status '{0}'")]
    UnknownStatus(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for OrderError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Store(other),
        }
    }
}
