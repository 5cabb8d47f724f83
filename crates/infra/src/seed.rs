//! Default-dataset loading for boot-time seeding and the reset operation.

use std::path::Path;

use thiserror::Error;

use stockroom_core::InventoryRecord;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("seed file {path} is not a valid record list: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the default inventory from a JSON file of `[{id, quantity}]` entries.
pub fn load_seed(path: impl AsRef<Path>) -> Result<Vec<InventoryRecord>, SeedError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: display,
        source,
    })
}
