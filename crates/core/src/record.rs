use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product's current stock, as held by the inventory store.
///
/// `id` is immutable once created; `quantity` is mutated only by a committed
/// reconciliation batch and is never observed negative after a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: String,
    pub quantity: i64,
}

impl InventoryRecord {
    pub fn new(id: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// One client-submitted line item: positive delta = restock, negative = consumption.
///
/// Constructed per incoming batch by the validator, discarded once the batch resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentRequest {
    pub id: String,
    pub delta: i64,
}

/// The unit of atomicity: an ordered sequence of adjustment requests.
///
/// A batch either commits every resulting record update or commits none;
/// no partial-batch state is ever visible to readers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationBatch {
    pub requests: Vec<AdjustmentRequest>,
}

/// Emitted once per record actually updated by a committed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub id: String,
    pub previous_quantity: i64,
    pub new_quantity: i64,
    pub occurred_at: DateTime<Utc>,
}

/// One commit batch's worth of change events, delivered together on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommittedBatch {
    pub events: Vec<ChangeEvent>,
}

/// Summary returned to the caller after a successful commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitResult {
    pub updated: usize,
}
