use std::sync::Arc;

use brewstock_infra::InMemoryItemStore;
use brewstock_service::StockService;

/// Application services shared by all handlers.
#[derive(Debug)]
pub struct AppServices {
    stock: StockService<Arc<InMemoryItemStore>>,
}

impl AppServices {
    pub fn stock(&self) -> &StockService<Arc<InMemoryItemStore>> {
        &self.stock
    }
}

/// Wire the store and the service façade.
///
/// The catalog is process-local; swapping in a durable store only needs a
/// different [`ItemStore`](brewstock_inventory::ItemStore) implementation
/// here.
pub fn build_services() -> AppServices {
    let store = Arc::new(InMemoryItemStore::new());
    AppServices {
        stock: StockService::new(store),
    }
}
