//! Integration tests for the full adjustment pipeline.
//!
//! Raw payload → validator → engine (store read/compute/commit) →
//! event bus → low-stock notifier.

use std::sync::Arc;
use std::time::{Duration, Instant};

use stockroom_core::{CommittedBatch, InventoryRecord, ReconcileError};
use stockroom_engine::{InventoryStore, ReconciliationEngine, validate};
use stockroom_events::InMemoryEventBus;
use stockroom_notifier::{LowStockNotifier, RecordingAlertSender, worker};

use crate::memory::InMemoryInventoryStore;

struct Pipeline {
    store: Arc<InMemoryInventoryStore>,
    engine: ReconciliationEngine<Arc<InMemoryInventoryStore>, Arc<InMemoryEventBus<CommittedBatch>>>,
    alerts: Arc<RecordingAlertSender>,
    worker: Option<stockroom_notifier::WorkerHandle>,
}

impl Pipeline {
    fn with_inventory(records: Vec<InventoryRecord>) -> Self {
        let store = Arc::new(InMemoryInventoryStore::seeded(records));
        let bus = Arc::new(InMemoryEventBus::new());
        let alerts = Arc::new(RecordingAlertSender::new());

        // Subscribe the notifier before anything can be published.
        let notifier =
            LowStockNotifier::new(5, "alerts@localhost", "ops@localhost", alerts.clone());
        let worker = worker::spawn(&bus, notifier);

        let engine = ReconciliationEngine::new(store.clone(), bus);
        Self {
            store,
            engine,
            alerts,
            worker: Some(worker),
        }
    }

    fn adjust(&self, raw: &str) -> Result<usize, String> {
        let batch = validate(raw.as_bytes()).map_err(|e| e.to_string())?;
        self.engine
            .reconcile(&batch)
            .map(|r| r.updated)
            .map_err(|e| e.to_string())
    }

    fn quantity(&self, id: &str) -> Option<i64> {
        self.store
            .scan_all()
            .unwrap()
            .into_iter()
            .find(|r| r.id == id)
            .map(|r| r.quantity)
    }

    /// The notifier is asynchronous; poll until it has caught up.
    fn wait_for_alerts(&self, count: usize) -> Vec<stockroom_notifier::Alert> {
        let deadline = Instant::now() + Duration::from_secs(2);
        loop {
            let sent = self.alerts.sent();
            if sent.len() >= count {
                return sent;
            }
            assert!(Instant::now() < deadline, "notifier did not catch up in time");
            std::thread::sleep(Duration::from_millis(10));
        }
    }
}

impl Drop for Pipeline {
    fn drop(&mut self) {
        if let Some(w) = self.worker.take() {
            w.shutdown();
        }
    }
}

#[test]
fn commit_flows_through_to_the_notifier() {
    let pipeline = Pipeline::with_inventory(vec![
        InventoryRecord::new("A", 10),
        InventoryRecord::new("B", 3),
    ]);

    let updated = pipeline
        .adjust(r#"{"products": [{"id": "A", "quantity": -2}, {"id": "B", "quantity": 1}]}"#)
        .unwrap();

    assert_eq!(updated, 2);
    assert_eq!(pipeline.quantity("A"), Some(8));
    assert_eq!(pipeline.quantity("B"), Some(4));

    // B landed at 4, which is at or below the threshold of 5.
    let alerts = pipeline.wait_for_alerts(1);
    assert_eq!(alerts.len(), 1);
    assert!(alerts[0].body.contains("Product ID: B, Quantity: 4"));
    assert!(!alerts[0].body.contains("Product ID: A"));
}

#[test]
fn rejection_reaches_neither_store_nor_notifier() {
    let pipeline = Pipeline::with_inventory(vec![InventoryRecord::new("A", 2)]);

    let err = pipeline
        .adjust(r#"{"products": [{"id": "A", "quantity": -5}]}"#)
        .unwrap_err();

    assert_eq!(
        err,
        ReconcileError::InsufficientStock(vec!["A".to_string()]).to_string()
    );
    assert_eq!(pipeline.quantity("A"), Some(2));

    // Give the worker a moment; nothing should ever arrive.
    std::thread::sleep(Duration::from_millis(50));
    assert!(pipeline.alerts.sent().is_empty());
}

#[test]
fn zero_delta_commit_still_alerts_on_a_low_record() {
    let pipeline = Pipeline::with_inventory(vec![InventoryRecord::new("A", 4)]);

    let updated = pipeline
        .adjust(r#"{"products": [{"id": "A", "quantity": 0}]}"#)
        .unwrap();

    assert_eq!(updated, 1);
    assert_eq!(pipeline.quantity("A"), Some(4));

    let alerts = pipeline.wait_for_alerts(1);
    assert!(alerts[0].body.contains("Product ID: A, Quantity: 4"));
}

#[test]
fn each_commit_batch_produces_at_most_one_alert() {
    let pipeline = Pipeline::with_inventory(vec![
        InventoryRecord::new("A", 3),
        InventoryRecord::new("B", 2),
        InventoryRecord::new("C", 50),
    ]);

    pipeline
        .adjust(
            r#"{"products": [{"id": "A", "quantity": 0}, {"id": "B", "quantity": 1}, {"id": "C", "quantity": -1}]}"#,
        )
        .unwrap();
    pipeline
        .adjust(r#"{"products": [{"id": "C", "quantity": -45}]}"#)
        .unwrap();

    // Two commits, each with low records: exactly two alerts.
    let alerts = pipeline.wait_for_alerts(2);
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].body.contains("Product ID: A, Quantity: 3"));
    assert!(alerts[0].body.contains("Product ID: B, Quantity: 3"));
    assert!(alerts[1].body.contains("Product ID: C, Quantity: 4"));
}
