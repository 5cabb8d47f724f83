//! `stockroom-api` — HTTP surface for the inventory-adjustment service.

pub mod app;

pub use app::{App, AppServices, build_app};
