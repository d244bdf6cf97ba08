//! Server loop
//!
//! `run` is the single place where the process-wide `Broker` is created. It
//! is handed to the order service and, through it, to the router state.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::broker::Broker;
use crate::config::Settings;
use crate::orders::OrderService;
use crate::persistence::SledOrderStore;
use crate::transport::routes::{AppState, router};
use crate::transport::shutdown::{self, ShutdownTrigger};

pub type ServerError = Box<dyn std::error::Error + Send + Sync>;

/// Open the store, build the broker and serve HTTP until Ctrl-C.
pub async fn run(settings: Settings) -> Result<(), ServerError> {
    let broker = Arc::new(Broker::new(settings.broker.mailbox_capacity));
    let store = Arc::new(SledOrderStore::open(&settings.store.path)?);
    let orders = OrderService::new(store, broker);

    let (trigger, shutdown) = shutdown::channel();
    let keep_alive = Duration::from_secs(settings.broker.keep_alive_secs.max(1));
    let state = AppState::new(orders, shutdown, keep_alive);

    let listener = TcpListener::bind(settings.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Shutdown signal received. Closing streams.");
    };

    serve(listener, state, trigger, ctrl_c).await?;
    info!("Server stopped");
    Ok(())
}

/// Serve `state` on `listener` until `signal` resolves. Open event streams
/// are told to finish through `trigger` so graceful shutdown can complete.
pub async fn serve<F>(
    listener: TcpListener,
    state: AppState,
    trigger: ShutdownTrigger,
    signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            signal.await;
            trigger.trigger();
        })
        .await
}
