//! In-memory inventory store.
//!
//! Backs dev and test deployments; the trait boundary keeps a persistent
//! backend swappable without touching the engine.

use std::collections::HashMap;
use std::sync::RwLock;

use stockroom_core::{InventoryRecord, StoreError};
use stockroom_engine::InventoryStore;

/// `RwLock<HashMap>`-backed store. Upserts are per-record atomic; no
/// cross-batch isolation is provided, matching the store contract.
#[derive(Debug, Default)]
pub struct InMemoryInventoryStore {
    inner: RwLock<HashMap<String, InventoryRecord>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience for boot-time seeding; replaces any existing record.
    pub fn seeded(records: Vec<InventoryRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            inner: RwLock::new(map),
        }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::new("store lock poisoned")
}

impl InventoryStore for InMemoryInventoryStore {
    fn scan_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let map = self.inner.read().map_err(poisoned)?;
        Ok(map.values().cloned().collect())
    }

    fn upsert(&self, record: InventoryRecord) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.insert(record.id.clone(), record);
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        map.remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::new(format!("no record with id {id}")))
    }

    fn create(&self, record: InventoryRecord) -> Result<(), StoreError> {
        let mut map = self.inner.write().map_err(poisoned)?;
        if map.contains_key(&record.id) {
            return Err(StoreError::new(format!(
                "record with id {} already exists",
                record.id
            )));
        }
        map.insert(record.id.clone(), record);
        Ok(())
    }
}
