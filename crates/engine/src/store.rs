//! Inventory store seam consumed by the engine and the reset operation.

use std::sync::Arc;

use stockroom_core::{InventoryRecord, StoreError};

/// Key-lookup/upsert interface over the authoritative inventory.
///
/// The engine cross-references every request against the complete id space,
/// so the contract exposes a full scan rather than point lookups; no
/// secondary index is assumed. Implementations must provide per-record
/// atomic upsert. Cross-batch isolation is *not* part of this contract.
pub trait InventoryStore: Send + Sync {
    /// Return every record currently in the store.
    fn scan_all(&self) -> Result<Vec<InventoryRecord>, StoreError>;

    /// Insert or replace the record with the same id.
    fn upsert(&self, record: InventoryRecord) -> Result<(), StoreError>;

    /// Remove the record with this id. Removing a missing id is an error.
    fn delete(&self, id: &str) -> Result<(), StoreError>;

    /// Insert a new record. Fails if the id already exists.
    fn create(&self, record: InventoryRecord) -> Result<(), StoreError>;
}

impl<S> InventoryStore for Arc<S>
where
    S: InventoryStore + ?Sized,
{
    fn scan_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        (**self).scan_all()
    }

    fn upsert(&self, record: InventoryRecord) -> Result<(), StoreError> {
        (**self).upsert(record)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        (**self).delete(id)
    }

    fn create(&self, record: InventoryRecord) -> Result<(), StoreError> {
        (**self).create(record)
    }
}
