use serde::{Deserialize, Serialize};

/// Body of `PUT /orders/{id}/status`.
#[derive(Debug, Deserialize, Serialize)]
pub struct StatusUpdate {
    pub status: String,
}

/// Query of `GET /events`. `order_id` stays a string so a missing or blank
/// value can be answered with 400 by the handler itself.
#[derive(Debug, Default, Deserialize)]
pub struct StreamQuery {
    pub order_id: Option<String>,
}

/// JSON error body.
#[derive(Debug, Deserialize, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct StatusList {
    pub statuses: Vec<String>,
}
