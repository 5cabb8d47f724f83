//! `stockroom-notifier` — low-stock alerting.
//!
//! Consumes committed inventory changes from the event bus and sends one
//! alert per commit batch that contains at-or-below-threshold quantities.

pub mod alert;
pub mod notifier;
pub mod worker;

pub use alert::{Alert, AlertError, AlertSender, LogAlertSender, RecordingAlertSender};
pub use notifier::LowStockNotifier;
pub use worker::{WorkerHandle, spawn};
