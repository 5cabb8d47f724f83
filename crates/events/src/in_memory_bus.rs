//! In-memory event bus backed by std mpsc channels.

use std::sync::{Mutex, mpsc};

use crate::bus::{EventBus, PublishError, Subscription};

/// In-memory pub/sub bus.
///
/// - No IO / no async
/// - Best-effort fan-out
/// - Hung-up receivers are pruned on the next publish
#[derive(Debug)]
pub struct InMemoryEventBus<M> {
    senders: Mutex<Vec<mpsc::Sender<M>>>,
}

impl<M> InMemoryEventBus<M> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M> Default for InMemoryEventBus<M> {
    fn default() -> Self {
        Self {
            senders: Mutex::new(Vec::new()),
        }
    }
}

impl<M> EventBus<M> for InMemoryEventBus<M>
where
    M: Clone + Send + 'static,
{
    fn publish(&self, message: M) -> Result<(), PublishError> {
        let mut senders = self
            .senders
            .lock()
            .map_err(|_| PublishError("subscriber list lock poisoned".into()))?;

        // Prune senders whose receiving half has hung up.
        senders.retain(|tx| tx.send(message.clone()).is_ok());

        Ok(())
    }

    fn subscribe(&self) -> Subscription<M> {
        let (tx, rx) = mpsc::channel();

        // A poisoned lock leaves the subscription valid but disconnected;
        // its consumer simply sees the channel as empty.
        if let Ok(mut senders) = self.senders.lock() {
            senders.push(tx);
        }

        Subscription::new(rx)
    }
}
