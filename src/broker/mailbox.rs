//! Bounded per-subscriber mailbox
//!
//! A `Mailbox` is a small FIFO of pending text notifications. Producers (any
//! number of concurrent `Broker::publish` calls) use `try_enqueue`, which
//! never waits: a full mailbox rejects the message. The single consumer, the
//! stream adapter owning the subscription, awaits `recv`.
//!
//! Closing is terminal. Whatever is still queued is discarded, `recv` returns
//! `None` from then on and later enqueues are ignored.

use std::collections::VecDeque;

use parking_lot::Mutex;
use tokio::sync::Notify;

/// Default number of undelivered messages a mailbox holds.
pub const DEFAULT_CAPACITY: usize = 10;

/// Result of a non-blocking enqueue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueue {
    Queued,
    Full,
    Closed,
}

/// Error returned by [`Mailbox::try_recv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TryRecvError {
    Empty,
    Closed,
}

#[derive(Debug)]
struct State {
    queue: VecDeque<String>,
    closed: bool,
}

#[derive(Debug)]
pub struct Mailbox {
    state: Mutex<State>,
    capacity: usize,
    notify: Notify,
}

impl Mailbox {
    /// Create an open mailbox. A capacity of zero is raised to one so the
    /// mailbox can hold at least the latest undelivered message.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            state: Mutex::new(State {
                queue: VecDeque::with_capacity(capacity),
                closed: false,
            }),
            capacity,
            notify: Notify::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of messages waiting to be drained.
    pub fn len(&self) -> usize {
        self.state.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }

    /// Append `message` without waiting.
    pub fn try_enqueue(&self, message: impl Into<String>) -> Enqueue {
        {
            let mut state = self.state.lock();
            if state.closed {
                return Enqueue::Closed;
            }
            if state.queue.len() >= self.capacity {
                return Enqueue::Full;
            }
            state.queue.push_back(message.into());
        }
        self.notify.notify_one();
        Enqueue::Queued
    }

    /// Take the next message if one is ready.
    pub fn try_recv(&self) -> Result<String, TryRecvError> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(TryRecvError::Closed);
        }
        state.queue.pop_front().ok_or(TryRecvError::Empty)
    }

    /// Wait for the next message. Returns `None` once the mailbox is closed.
    ///
    /// Meant for a single consumer; `notify_one` stores a permit when nobody
    /// is waiting, so an enqueue racing with this call is never missed.
    pub async fn recv(&self) -> Option<String> {
        loop {
            match self.try_recv() {
                Ok(message) => return Some(message),
                Err(TryRecvError::Closed) => return None,
                Err(TryRecvError::Empty) => self.notify.notified().await,
            }
        }
    }

    /// Close the mailbox. Returns `true` only for the call that performed the
    /// open -> closed transition.
    pub fn close(&self) -> bool {
        {
            let mut state = self.state.lock();
            if state.closed {
                return false;
            }
            state.closed = true;
            state.queue.clear();
        }
        self.notify.notify_one();
        true
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
