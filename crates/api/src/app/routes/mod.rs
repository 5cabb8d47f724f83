pub mod inventory;
pub mod products;
pub mod reset;
