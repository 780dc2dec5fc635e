//! Inventory domain module.
//!
//! This crate contains business rules for the beverage catalog, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod item;
pub mod stock;
pub mod store;

pub use item::{BeverageStyle, Item, NewItem};
pub use store::ItemStore;
