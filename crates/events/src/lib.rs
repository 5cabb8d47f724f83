//! `stockroom-events` — change-event distribution.
//!
//! Carries committed-batch messages from the reconciliation engine to
//! reactive consumers; generic over the message type.

pub mod bus;
pub mod in_memory_bus;

pub use bus::{EventBus, PublishError, Subscription};
pub use in_memory_bus::InMemoryEventBus;
