//! Server shutdown signal
//!
//! Graceful shutdown in axum waits for open responses to finish, and an SSE
//! response never finishes on its own. Every stream therefore also listens to
//! a `Shutdown` and ends itself once the trigger fires.

use tokio::sync::watch;

/// Create a connected trigger / listener pair.
pub fn channel() -> (ShutdownTrigger, Shutdown) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx }, Shutdown { rx })
}

#[derive(Debug)]
pub struct ShutdownTrigger {
    tx: watch::Sender<bool>,
}

impl ShutdownTrigger {
    /// Signal every listener. Calling it again has no further effect.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Cloneable listener half.
#[derive(Debug, Clone)]
pub struct Shutdown {
    rx: watch::Receiver<bool>,
}

impl Shutdown {
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolve once shutdown has been triggered. If the trigger is dropped
    /// without firing, this never resolves.
    pub async fn cancelled(&mut self) {
        if self.rx.wait_for(|triggered| *triggered).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
