//! Event publishing/subscription abstraction.
//!
//! The bus is the seam between the reconciliation engine's commit path and
//! reactive consumers (the low-stock notifier). It is intentionally
//! lightweight and transport-agnostic:
//!
//! - Broadcast semantics: each subscriber gets a copy of every message.
//! - Best-effort delivery: the commit path never blocks on consumers, and a
//!   failed or slow consumer cannot roll back committed inventory state.
//! - No persistence: the inventory store is the source of truth; the bus only
//!   distributes already-committed changes.

use std::sync::Arc;
use std::sync::mpsc::Receiver;
use std::time::Duration;

/// A subscription to the change-event stream.
///
/// Intended for single-threaded consumption: one worker owns the subscription
/// and drains it with `recv_timeout` so it can interleave shutdown checks.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Block until the next message is available.
    pub fn recv(&self) -> Result<M, std::sync::mpsc::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive a message without blocking.
    pub fn try_recv(&self) -> Result<M, std::sync::mpsc::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Block for up to `timeout` waiting for a message.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<M, std::sync::mpsc::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

/// Error returned when a bus implementation could not fan a message out.
///
/// Delivery is best-effort: the inventory write has already happened when the
/// engine publishes, so callers log this and move on rather than unwinding
/// committed state.
#[derive(Debug, thiserror::Error)]
#[error("event publish failed: {0}")]
pub struct PublishError(pub String);

/// Domain-agnostic pub/sub contract.
pub trait EventBus<M>: Send + Sync {
    fn publish(&self, message: M) -> Result<(), PublishError>;

    fn subscribe(&self) -> Subscription<M>;
}

impl<M, B> EventBus<M> for Arc<B>
where
    B: EventBus<M> + ?Sized,
{
    fn publish(&self, message: M) -> Result<(), PublishError> {
        (**self).publish(message)
    }

    fn subscribe(&self) -> Subscription<M> {
        (**self).subscribe()
    }
}
