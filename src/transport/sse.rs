//! SSE stream adapter
//!
//! Bridges one `Subscription` to one long-lived `text/event-stream`
//! response. Each mailbox message becomes one event. The stream ends when the
//! mailbox is closed or the server shuts down; when the client goes away,
//! hyper drops the response body and the stream with it.
//!
//! The subscription is owned by the stream state, so whichever of those
//! happens, dropping the state is what unsubscribes.

use std::convert::Infallible;
use std::time::Duration;

use axum::http::header;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{IntoResponse, Response};
use futures_util::stream::{self, Stream};
use tracing::debug;

use crate::client::Subscription;
use crate::transport::shutdown::Shutdown;

/// Event name used for order status changes.
pub const STATUS_EVENT: &str = "status";

/// Event name used on the admin feed.
pub const NEW_ORDER_EVENT: &str = "new_order";

/// Turn a subscription into a stream of SSE events named `event_name`.
pub fn event_stream(
    subscription: Subscription,
    event_name: &'static str,
    shutdown: Shutdown,
) -> impl Stream<Item = Result<Event, Infallible>> + Send + 'static {
    stream::unfold(
        (subscription, shutdown),
        move |(subscription, mut shutdown)| async move {
            let next = tokio::select! {
                message = subscription.recv() => message,
                _ = shutdown.cancelled() => {
                    debug!(topic = subscription.topic(), "stream ended by shutdown");
                    return None;
                }
            };

            match next {
                Some(text) => {
                    let event = Event::default().event(event_name).data(sanitize(&text));
                    Some((Ok(event), (subscription, shutdown)))
                }
                None => {
                    debug!(topic = subscription.topic(), "stream ended, mailbox closed");
                    None
                }
            }
        },
    )
}

/// Build the full streaming response for `subscription`.
pub fn sse_response(
    subscription: Subscription,
    event_name: &'static str,
    shutdown: Shutdown,
    keep_alive: Duration,
) -> Response {
    let stream = event_stream(subscription, event_name, shutdown);
    let sse = Sse::new(stream).keep_alive(KeepAlive::new().interval(keep_alive));

    (
        [
            (header::CONNECTION, "keep-alive"),
            (header::HeaderName::from_static("x-accel-buffering"), "no"),
        ],
        sse,
    )
        .into_response()
}

/// SSE cannot carry carriage returns; axum panics on them.
fn sanitize(text: &str) -> String {
    text.replace('\r', "")
}
