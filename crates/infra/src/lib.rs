//! Infrastructure layer: inventory store implementation, seed data,
//! administrative reset.

pub mod memory;
pub mod reset;
pub mod seed;

pub use memory::InMemoryInventoryStore;
pub use reset::{ResetError, ResetReport, ResetService};
pub use seed::{SeedError, load_seed};

#[cfg(test)]
mod integration_tests;
