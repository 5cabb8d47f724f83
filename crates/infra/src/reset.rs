//! Administrative reset: wipe the inventory and reload factory defaults.
//!
//! Gated by an exact-match credential pair. Per-item delete/create failures
//! are collected and logged but do not abort the operation; each item is
//! independently idempotent, so a partial wipe can simply be re-run.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info};

use stockroom_core::StoreError;
use stockroom_engine::InventoryStore;

use crate::seed::{SeedError, load_seed};

#[derive(Debug, Error)]
pub enum ResetError {
    /// Credential mismatch. Deliberately silent about which field was wrong.
    #[error("invalid username or password")]
    Unauthorized,

    /// The default dataset could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),

    /// The store could not be scanned at all.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a completed reset, including the items that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetReport {
    pub deleted: usize,
    pub inserted: usize,
    pub failures: Vec<String>,
}

pub struct ResetService<S> {
    expected_username: String,
    expected_password: String,
    seed_path: PathBuf,
    store: S,
}

impl<S: InventoryStore> ResetService<S> {
    pub fn new(
        expected_username: impl Into<String>,
        expected_password: impl Into<String>,
        seed_path: impl Into<PathBuf>,
        store: S,
    ) -> Self {
        Self {
            expected_username: expected_username.into(),
            expected_password: expected_password.into(),
            seed_path: seed_path.into(),
            store,
        }
    }

    /// Authenticate, then delete every existing record and insert the
    /// defaults from the seed file.
    pub fn reset(&self, username: &str, password: &str) -> Result<ResetReport, ResetError> {
        if username != self.expected_username || password != self.expected_password {
            info!("reset refused: credential mismatch");
            return Err(ResetError::Unauthorized);
        }

        let defaults = load_seed(&self.seed_path)?;
        let existing = self.store.scan_all()?;

        let mut report = ResetReport {
            deleted: 0,
            inserted: 0,
            failures: Vec::new(),
        };

        info!(count = existing.len(), "deleting existing inventory records");
        for record in existing {
            match self.store.delete(&record.id) {
                Ok(()) => report.deleted += 1,
                Err(err) => {
                    error!(id = %record.id, error = %err, "failed to delete record");
                    report.failures.push(format!("delete {}: {err}", record.id));
                }
            }
        }

        info!(count = defaults.len(), "inserting default inventory records");
        for record in defaults {
            let id = record.id.clone();
            match self.store.create(record) {
                Ok(()) => report.inserted += 1,
                Err(err) => {
                    error!(id = %id, error = %err, "failed to insert default record");
                    report.failures.push(format!("create {id}: {err}"));
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use stockroom_core::InventoryRecord;

    use crate::memory::InMemoryInventoryStore;

    use super::*;

    fn seed_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn wrong_credentials_leave_the_store_untouched() {
        let file = seed_file(r#"[{"id": "A", "quantity": 50}]"#);
        let store = Arc::new(InMemoryInventoryStore::seeded(vec![InventoryRecord::new("old", 1)]));
        let service = ResetService::new("admin", "secret", file.path(), store.clone());

        let err = service.reset("admin", "wrong").unwrap_err();
        assert!(matches!(err, ResetError::Unauthorized));
        assert_eq!(store.scan_all().unwrap(), vec![InventoryRecord::new("old", 1)]);
    }

    #[test]
    fn correct_credentials_wipe_and_reseed() {
        let file = seed_file(r#"[{"id": "A", "quantity": 50}, {"id": "B", "quantity": 20}]"#);
        let store = Arc::new(InMemoryInventoryStore::seeded(vec![
            InventoryRecord::new("old-1", 1),
            InventoryRecord::new("old-2", 2),
        ]));
        let service = ResetService::new("admin", "secret", file.path(), store.clone());

        let report = service.reset("admin", "secret").unwrap();

        assert_eq!(report.deleted, 2);
        assert_eq!(report.inserted, 2);
        assert!(report.failures.is_empty());

        let mut ids: Vec<String> = store
            .scan_all()
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[test]
    fn duplicate_seed_entry_is_reported_but_does_not_abort() {
        let file = seed_file(
            r#"[{"id": "A", "quantity": 50}, {"id": "A", "quantity": 9}, {"id": "B", "quantity": 20}]"#,
        );
        let store = Arc::new(InMemoryInventoryStore::new());
        let service = ResetService::new("admin", "secret", file.path(), store.clone());

        let report = service.reset("admin", "secret").unwrap();

        // Second "A" hits create-on-existing-id; B still lands.
        assert_eq!(report.inserted, 2);
        assert_eq!(report.failures.len(), 1);
        assert!(report.failures[0].contains("A"));
    }

    #[test]
    fn unreadable_seed_file_is_a_seed_error() {
        let store = Arc::new(InMemoryInventoryStore::new());
        let service = ResetService::new("admin", "secret", "nope/missing.json", store);

        assert!(matches!(
            service.reset("admin", "secret"),
            Err(ResetError::Seed(_))
        ));
    }
}
