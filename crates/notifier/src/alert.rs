//! Outbound alert delivery seam.

use std::sync::Mutex;

use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
#[error("alert delivery failed: {0}")]
pub struct AlertError(pub String);

/// One outbound low-stock notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Delivery transport for alerts. A real mail client plugs in here; the
/// notifier itself never cares how the message leaves the process.
pub trait AlertSender: Send + Sync {
    fn send(&self, alert: &Alert) -> Result<(), AlertError>;
}

impl<A> AlertSender for std::sync::Arc<A>
where
    A: AlertSender + ?Sized,
{
    fn send(&self, alert: &Alert) -> Result<(), AlertError> {
        (**self).send(alert)
    }
}

/// Default sender: writes the alert to the structured log.
#[derive(Debug, Default)]
pub struct LogAlertSender;

impl AlertSender for LogAlertSender {
    fn send(&self, alert: &Alert) -> Result<(), AlertError> {
        info!(
            from = %alert.from,
            to = %alert.to,
            subject = %alert.subject,
            body = %alert.body,
            "low-stock alert"
        );
        Ok(())
    }
}

/// Captures alerts in memory; for tests.
#[derive(Debug, Default)]
pub struct RecordingAlertSender {
    sent: Mutex<Vec<Alert>>,
}

impl RecordingAlertSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Alert> {
        self.sent.lock().unwrap().clone()
    }
}

impl AlertSender for RecordingAlertSender {
    fn send(&self, alert: &Alert) -> Result<(), AlertError> {
        self.sent.lock().unwrap().push(alert.clone());
        Ok(())
    }
}
