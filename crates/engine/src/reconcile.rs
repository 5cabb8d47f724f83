//! Batch reconciliation engine.
//!
//! Matches a validated batch against a snapshot of the inventory, rejects
//! unknown/duplicate ids and would-be-negative quantities, and commits
//! all-or-nothing. Committed changes are published to the event bus as one
//! `CommittedBatch`; publishing is decoupled from the commit and can never
//! fail the batch.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use tracing::{info, warn};

use stockroom_core::{
    ChangeEvent, CommitResult, CommittedBatch, InventoryRecord, ReconcileError,
    ReconciliationBatch,
};
use stockroom_events::EventBus;

use crate::store::InventoryStore;

pub struct ReconciliationEngine<S, B> {
    store: S,
    bus: B,
}

impl<S, B> ReconciliationEngine<S, B>
where
    S: InventoryStore,
    B: EventBus<CommittedBatch>,
{
    pub fn new(store: S, bus: B) -> Self {
        Self { store, bus }
    }

    /// Reconcile one batch against current inventory.
    ///
    /// Rejections are terminal for the batch and leave the store untouched;
    /// there is no partial commit and no retry. Two concurrent batches over
    /// overlapping ids can race between snapshot and write-back; callers that
    /// need stronger isolation must serialize above this layer.
    pub fn reconcile(&self, batch: &ReconciliationBatch) -> Result<CommitResult, ReconcileError> {
        let snapshot = self.store.scan_all()?;

        // Consume-on-match pool: each record can satisfy at most one request.
        let mut pool: HashMap<String, InventoryRecord> = snapshot
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();
        let known: HashSet<String> = pool.keys().cloned().collect();

        let unknown = first_occurrences(
            batch.requests.iter().filter(|r| !known.contains(&r.id)),
        );
        if !unknown.is_empty() {
            info!(ids = ?unknown, "batch rejected: unknown product ids");
            return Err(ReconcileError::UnknownProductIds(unknown));
        }

        // Batch-wide duplicate check over the matched requests. Ordering of
        // the reported ids follows first occurrence in the batch.
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for req in &batch.requests {
            *counts.entry(req.id.as_str()).or_insert(0) += 1;
        }
        let duplicates: Vec<String> = first_occurrences(
            batch.requests.iter().filter(|r| counts[r.id.as_str()] > 1),
        );
        if !duplicates.is_empty() {
            info!(ids = ?duplicates, "batch rejected: duplicate product ids");
            return Err(ReconcileError::DuplicateProductIds(duplicates));
        }

        // Every id is now known and unique, so each request consumes exactly
        // one record from the pool.
        let now = Utc::now();
        let mut shortfall = Vec::new();
        let mut out_of_range = Vec::new();
        let mut updates = Vec::new();
        let mut events = Vec::new();
        for req in &batch.requests {
            let Some(record) = pool.remove(&req.id) else {
                continue;
            };

            // A negative overflow is mathematically below zero; a positive
            // one has no representable result. Neither may panic or wrap.
            let candidate = match record.quantity.checked_add(req.delta) {
                Some(c) => c,
                None if req.delta < 0 => {
                    shortfall.push(record.id);
                    continue;
                }
                None => {
                    out_of_range.push(record.id);
                    continue;
                }
            };
            if candidate < 0 {
                shortfall.push(record.id);
                continue;
            }

            events.push(ChangeEvent {
                id: record.id.clone(),
                previous_quantity: record.quantity,
                new_quantity: candidate,
                occurred_at: now,
            });
            updates.push(InventoryRecord {
                id: record.id,
                quantity: candidate,
            });
        }

        if !shortfall.is_empty() {
            info!(ids = ?shortfall, "batch rejected: insufficient stock");
            return Err(ReconcileError::InsufficientStock(shortfall));
        }
        if !out_of_range.is_empty() {
            info!(ids = ?out_of_range, "batch rejected: quantity out of range");
            return Err(ReconcileError::QuantityOutOfRange(out_of_range));
        }

        for record in &updates {
            self.store.upsert(record.clone())?;
        }

        let updated = updates.len();
        info!(updated, "inventory updated");

        // The commit already happened; a delivery problem here is the
        // notifier's loss, not the caller's.
        if let Err(err) = self.bus.publish(CommittedBatch { events }) {
            warn!(error = %err, "failed to publish committed batch");
        }

        Ok(CommitResult { updated })
    }
}

/// Collect ids in batch order, keeping only the first occurrence of each.
fn first_occurrences<'a, I>(requests: I) -> Vec<String>
where
    I: Iterator<Item = &'a stockroom_core::AdjustmentRequest>,
{
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for req in requests {
        if seen.insert(req.id.as_str()) {
            ids.push(req.id.clone());
        }
    }
    ids
}
