//! Background worker that feeds the notifier from the event bus.
//!
//! The engine's commit path publishes and moves on; this thread drains the
//! subscription on its own time, so notification work can never block or
//! fail a commit.

use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use stockroom_core::CommittedBatch;
use stockroom_events::{EventBus, Subscription};

use crate::alert::AlertSender;
use crate::notifier::LowStockNotifier;

/// Handle to control and join the notifier worker.
#[derive(Debug)]
pub struct WorkerHandle {
    shutdown: mpsc::Sender<()>,
    join: Option<thread::JoinHandle<()>>,
}

impl WorkerHandle {
    /// Request graceful shutdown and wait for the worker to stop.
    pub fn shutdown(mut self) {
        let _ = self.shutdown.send(());
        if let Some(j) = self.join.take() {
            let _ = j.join();
        }
    }
}

/// Spawn the notifier's worker thread, subscribed to the given bus.
pub fn spawn<B, A>(bus: &B, notifier: LowStockNotifier<A>) -> WorkerHandle
where
    B: EventBus<CommittedBatch>,
    A: AlertSender + Send + 'static,
{
    let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();
    let sub: Subscription<CommittedBatch> = bus.subscribe();

    let join = thread::Builder::new()
        .name("stock-warning-notifier".to_string())
        .spawn(move || worker_loop(sub, shutdown_rx, notifier))
        .expect("failed to spawn notifier worker thread");

    WorkerHandle {
        shutdown: shutdown_tx,
        join: Some(join),
    }
}

fn worker_loop<A>(
    sub: Subscription<CommittedBatch>,
    shutdown_rx: mpsc::Receiver<()>,
    notifier: LowStockNotifier<A>,
) where
    A: AlertSender,
{
    let tick = Duration::from_millis(250);

    loop {
        // Shutdown check (non-blocking)
        if shutdown_rx.try_recv().is_ok() {
            break;
        }

        match sub.recv_timeout(tick) {
            Ok(batch) => notifier.handle(&batch),
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
}
