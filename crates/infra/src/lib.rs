//! `brewstock-infra` — store implementations.
//!
//! The domain crates define the [`ItemStore`](brewstock_inventory::ItemStore)
//! contract; this crate provides the backends. Only an in-memory backend
//! exists today (dev/test and single-process deployments).

pub mod in_memory;

pub use in_memory::InMemoryItemStore;
