//! `stockroom-engine` — request validation and batch reconciliation.
//!
//! Deterministic business rules over a store seam; no HTTP, no transport.

pub mod reconcile;
pub mod store;
pub mod validator;

pub use reconcile::ReconciliationEngine;
pub use store::InventoryStore;
pub use validator::validate;
