//! HTTP routes
//!
//! - `GET    /health`
//! - `GET    /statuses`              known order statuses, in order
//! - `GET    /orders`                all orders
//! - `POST   /orders`                place an order (publishes to the admin feed)
//! - `GET    /orders/{id}`
//! - `DELETE /orders/{id}`
//! - `PUT    /orders/{id}/status`    change status (publishes to `order:<id>`)
//! - `GET    /orders/{id}/events`    SSE stream of that order's status changes
//! - `GET    /events?order_id={id}`  same stream, id passed as a query parameter
//! - `GET    /admin/events`          SSE stream of newly placed orders

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use tracing::info;

use crate::broker::{ADMIN_NEW_ORDERS, Broker, order_topic};
use crate::client::Subscription;
use crate::orders::{NewOrder, ORDER_STATUSES, Order, OrderId, OrderService};
use crate::transport::error::AppError;
use crate::transport::message::{StatusList, StatusUpdate, StreamQuery};
use crate::transport::shutdown::Shutdown;
use crate::transport::sse::{NEW_ORDER_EVENT, STATUS_EVENT, sse_response};

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderService,
    pub broker: Arc<Broker>,
    pub shutdown: Shutdown,
    pub keep_alive: Duration,
}

impl AppState {
    /// The broker is taken from `orders` so handlers subscribe on the same
    /// instance the trigger points publish to.
    pub fn new(orders: OrderService, shutdown: Shutdown, keep_alive: Duration) -> Self {
        Self {
            broker: orders.broker().clone(),
            orders,
            shutdown,
            keep_alive,
        }
    }

    fn open_stream(&self, topic: String, event_name: &'static str) -> Response {
        let subscription = Subscription::open(self.broker.clone(), topic);
        info!(
            topic = subscription.topic(),
            subscriber = %subscription.subscriber().id,
            "stream opened"
        );
        sse_response(
            subscription,
            event_name,
            self.shutdown.clone(),
            self.keep_alive,
        )
    }
}

/// Build the axum router (separated for testing).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/statuses", get(statuses))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/:id", get(get_order).delete(delete_order))
        .route("/orders/:id/status", put(update_status))
        .route("/orders/:id/events", get(order_events))
        .route("/events", get(events_by_query))
        .route("/admin/events", get(admin_events))
        .with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn statuses() -> Json<StatusList> {
    Json(StatusList {
        statuses: ORDER_STATUSES.iter().map(|s| s.to_string()).collect(),
    })
}

async fn list_orders(State(state): State<AppState>) -> Result<Json<Vec<Order>>, AppError> {
    Ok(Json(state.orders.list_orders()?))
}

async fn create_order(
    State(state): State<AppState>,
    Json(new_order): Json<NewOrder>,
) -> Result<(StatusCode, Json<Order>), AppError> {
    let order = state.orders.create_order(new_order)?;
    Ok((StatusCode::CREATED, Json(order)))
}

async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Order>, AppError> {
    let id = parse_order_id(&id)?;
    Ok(Json(state.orders.get_order(id)?))
}

async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_order_id(&id)?;
    state.orders.delete_order(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> Result<Json<Order>, AppError> {
    let id = parse_order_id(&id)?;
    Ok(Json(state.orders.update_status(id, &update.status)?))
}

async fn order_events(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let id = parse_order_id(&id)?;
    stream_order(&state, id)
}

async fn events_by_query(
    State(state): State<AppState>,
    Query(query): Query<StreamQuery>,
) -> Result<Response, AppError> {
    let raw = query
        .order_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest("missing order_id".to_string()))?;
    let id = parse_order_id(&raw)?;
    stream_order(&state, id)
}

async fn admin_events(State(state): State<AppState>) -> Response {
    state.open_stream(ADMIN_NEW_ORDERS.to_string(), NEW_ORDER_EVENT)
}

// ============================================================================
// Helpers
// ============================================================================

/// Subscribe to an order's topic, but only for orders that exist.
fn stream_order(state: &AppState, id: OrderId) -> Result<Response, AppError> {
    if !state.orders.order_exists(id)? {
        return Err(AppError::NotFound(format!("order {id} not found")));
    }
    Ok(state.open_stream(order_topic(id), STATUS_EVENT))
}

fn parse_order_id(raw: &str) -> Result<OrderId, AppError> {
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid order id '{raw}'")))
}
