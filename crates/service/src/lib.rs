//! `brewstock-service` — catalog service façade.
//!
//! Orchestrates uniqueness checks, existence checks, and stock adjustment
//! over an [`ItemStore`](brewstock_inventory::ItemStore), translating each
//! stage into the shared error taxonomy.

pub mod stock_service;

pub use stock_service::StockService;
