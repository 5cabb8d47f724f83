//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod config;
pub mod error;
pub mod record;

pub use config::{AppConfig, DEFAULT_ALERT_THRESHOLD};
pub use error::{ReconcileError, StoreError, ValidationError};
pub use record::{
    AdjustmentRequest, ChangeEvent, CommitResult, CommittedBatch, InventoryRecord,
    ReconciliationBatch,
};
