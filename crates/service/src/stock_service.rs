use brewstock_core::{ItemId, StockError, StockResult};
use brewstock_inventory::{Item, ItemStore, NewItem};

/// Service façade over the catalog store.
///
/// Every request runs the same pipeline: validate input, resolve the item,
/// apply the mutation, persist, return the updated representation. Each
/// stage short-circuits with its own error kind, and errors pass through
/// untouched.
#[derive(Debug, Clone)]
pub struct StockService<S> {
    store: S,
}

impl<S: ItemStore> StockService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Register a new catalog item.
    ///
    /// The name must not already be registered. The store re-checks under
    /// its own lock, so a concurrent create of the same name still fails.
    pub fn create_item(&self, draft: NewItem) -> StockResult<Item> {
        draft.validate()?;

        match self.store.find_by_name(&draft.name) {
            Ok(existing) => Err(StockError::already_registered(existing.name())),
            Err(StockError::NotFound) => {
                let item = self.store.insert(draft)?;
                tracing::debug!(id = %item.id(), name = item.name(), "item registered");
                Ok(item)
            }
            Err(other) => Err(other),
        }
    }

    pub fn find_by_name(&self, name: &str) -> StockResult<Item> {
        self.store.find_by_name(name)
    }

    pub fn list_all(&self) -> Vec<Item> {
        self.store.list_all()
    }

    /// Verify the identifier exists, then delete it.
    pub fn delete_by_id(&self, id: ItemId) -> StockResult<()> {
        self.store.find_by_id(id)?;
        self.store.delete(id)?;
        tracing::debug!(%id, "item deleted");
        Ok(())
    }

    /// Raise the item's stock by `amount`, bounded by its maximum.
    ///
    /// A negative amount fails before the item is even resolved.
    pub fn increment_stock(&self, id: ItemId, amount: i64) -> StockResult<Item> {
        if amount < 0 {
            return Err(StockError::NegativeArgument(amount));
        }
        self.store.update(id, &mut |item| item.increment(amount))
    }

    /// Lower the item's stock by `amount`, bounded by zero.
    ///
    /// A negative amount fails before the item is even resolved.
    pub fn decrement_stock(&self, id: ItemId, amount: i64) -> StockResult<Item> {
        if amount < 0 {
            return Err(StockError::NegativeArgument(amount));
        }
        self.store.update(id, &mut |item| item.decrement(amount))
    }
}
