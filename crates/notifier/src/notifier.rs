//! Low-stock notifier.
//!
//! Reactive consumer of committed inventory changes. Reads only; never
//! touches the store, never reports back to the commit path.

use tracing::{debug, error, info};

use stockroom_core::CommittedBatch;

use crate::alert::{Alert, AlertSender};

pub struct LowStockNotifier<A> {
    threshold: i64,
    from: String,
    to: String,
    sender: A,
}

impl<A: AlertSender> LowStockNotifier<A> {
    pub fn new(threshold: i64, from: impl Into<String>, to: impl Into<String>, sender: A) -> Self {
        Self {
            threshold,
            from: from.into(),
            to: to.into(),
            sender,
        }
    }

    /// Process one commit batch's worth of change events.
    ///
    /// Sends at most one alert per batch, enumerating every record whose new
    /// quantity is at or below the threshold. Delivery failures are logged
    /// and swallowed; the inventory commit is long since final.
    pub fn handle(&self, batch: &CommittedBatch) {
        let low: Vec<_> = batch
            .events
            .iter()
            .filter(|e| e.new_quantity <= self.threshold)
            .collect();

        if low.is_empty() {
            debug!("no low-stock products in committed batch");
            return;
        }

        info!(
            count = low.len(),
            threshold = self.threshold,
            "stock at or below threshold; sending alert"
        );

        let mut body = String::from(
            "You are receiving this email because you have opted in for stock alerts \n\n\
             The following products have low stock:\n\n",
        );
        for event in &low {
            body.push_str(&format!(
                " - Product ID: {}, Quantity: {}\n",
                event.id, event.new_quantity
            ));
        }

        let alert = Alert {
            from: self.from.clone(),
            to: self.to.clone(),
            subject: "Low Stock Alert: Low Stock Detected for Products".to_string(),
            body,
        };

        if let Err(err) = self.sender.send(&alert) {
            error!(error = %err, "failed to deliver low-stock alert");
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use stockroom_core::ChangeEvent;

    use crate::alert::{AlertError, RecordingAlertSender};

    use super::*;

    fn event(id: &str, new_quantity: i64) -> ChangeEvent {
        ChangeEvent {
            id: id.to_string(),
            previous_quantity: new_quantity + 1,
            new_quantity,
            occurred_at: Utc::now(),
        }
    }

    fn notifier(threshold: i64) -> LowStockNotifier<RecordingAlertSender> {
        LowStockNotifier::new(threshold, "alerts@localhost", "ops@localhost", RecordingAlertSender::new())
    }

    #[test]
    fn mixed_batch_alerts_only_low_ids() {
        let n = notifier(5);
        n.handle(&CommittedBatch {
            events: vec![event("low", 3), event("fine", 40)],
        });

        let sent = n.sender.sent();
        assert_eq!(sent.len(), 1);
        assert!(sent[0].body.contains("Product ID: low, Quantity: 3"));
        assert!(!sent[0].body.contains("fine"));
    }

    #[test]
    fn quantity_equal_to_threshold_triggers() {
        let n = notifier(5);
        n.handle(&CommittedBatch {
            events: vec![event("edge", 5)],
        });

        assert_eq!(n.sender.sent().len(), 1);
    }

    #[test]
    fn all_above_threshold_sends_nothing() {
        let n = notifier(5);
        n.handle(&CommittedBatch {
            events: vec![event("a", 6), event("b", 100)],
        });

        assert!(n.sender.sent().is_empty());
    }

    #[test]
    fn one_alert_per_batch_even_with_many_low_ids() {
        let n = notifier(5);
        n.handle(&CommittedBatch {
            events: vec![event("a", 0), event("b", 1), event("c", 2)],
        });

        let sent = n.sender.sent();
        assert_eq!(sent.len(), 1);
        for id in ["a", "b", "c"] {
            assert!(sent[0].body.contains(&format!("Product ID: {id},")));
        }
    }

    #[test]
    fn unchanged_quantity_at_threshold_still_alerts() {
        // A zero-delta commit of a low record is still a committed change.
        let n = notifier(5);
        n.handle(&CommittedBatch {
            events: vec![ChangeEvent {
                id: "A".to_string(),
                previous_quantity: 4,
                new_quantity: 4,
                occurred_at: Utc::now(),
            }],
        });

        assert_eq!(n.sender.sent().len(), 1);
    }

    #[test]
    fn delivery_failure_is_swallowed() {
        struct FailingSender;
        impl AlertSender for FailingSender {
            fn send(&self, _: &Alert) -> Result<(), AlertError> {
                Err(AlertError("smtp unreachable".to_string()))
            }
        }

        let n = LowStockNotifier::new(5, "a@x", "b@x", FailingSender);
        // Must not panic or propagate.
        n.handle(&CommittedBatch {
            events: vec![event("low", 0)],
        });
    }
}
