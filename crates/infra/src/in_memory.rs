use std::collections::BTreeMap;
use std::sync::RwLock;

use brewstock_core::{ItemId, StockError, StockResult};
use brewstock_inventory::{Item, ItemStore, NewItem};

/// In-memory catalog store.
///
/// One `RwLock` guards the whole catalog, so every trait call is atomic;
/// in particular `update` holds the write lock across the read-modify-write,
/// which is the per-identifier serialization the store contract requires.
#[derive(Debug)]
pub struct InMemoryItemStore {
    inner: RwLock<Catalog>,
}

#[derive(Debug, Default)]
struct Catalog {
    next_id: u64,
    // BTreeMap iteration order doubles as insertion order, since identifiers
    // are assigned monotonically.
    items: BTreeMap<ItemId, Item>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Catalog::default()),
        }
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn insert(&self, draft: NewItem) -> StockResult<Item> {
        let mut catalog = self.inner.write().unwrap_or_else(|e| e.into_inner());

        // Re-check uniqueness under the write lock; the service-level check
        // races with concurrent creates.
        if catalog.items.values().any(|i| i.name() == draft.name) {
            return Err(StockError::already_registered(draft.name));
        }

        catalog.next_id += 1;
        let id = ItemId::new(catalog.next_id);
        let item = Item::new(id, draft);
        catalog.items.insert(id, item.clone());

        tracing::debug!(%id, name = item.name(), "item inserted");
        Ok(item)
    }

    fn find_by_name(&self, name: &str) -> StockResult<Item> {
        let catalog = self.inner.read().unwrap_or_else(|e| e.into_inner());
        catalog
            .items
            .values()
            .find(|i| i.name() == name)
            .cloned()
            .ok_or(StockError::NotFound)
    }

    fn find_by_id(&self, id: ItemId) -> StockResult<Item> {
        let catalog = self.inner.read().unwrap_or_else(|e| e.into_inner());
        catalog.items.get(&id).cloned().ok_or(StockError::NotFound)
    }

    fn list_all(&self) -> Vec<Item> {
        let catalog = self.inner.read().unwrap_or_else(|e| e.into_inner());
        catalog.items.values().cloned().collect()
    }

    fn delete(&self, id: ItemId) -> StockResult<()> {
        let mut catalog = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match catalog.items.remove(&id) {
            Some(item) => {
                tracing::debug!(%id, name = item.name(), "item deleted");
                Ok(())
            }
            None => Err(StockError::NotFound),
        }
    }

    fn update(
        &self,
        id: ItemId,
        mutate: &mut dyn FnMut(&mut Item) -> StockResult<()>,
    ) -> StockResult<Item> {
        let mut catalog = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let stored = catalog.items.get_mut(&id).ok_or(StockError::NotFound)?;

        // Mutate a copy and commit only on success, so a failed mutation
        // can never leave a half-updated item behind.
        let mut candidate = stored.clone();
        mutate(&mut candidate)?;
        *stored = candidate.clone();
        Ok(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewstock_inventory::BeverageStyle;

    fn draft(name: &str) -> NewItem {
        NewItem {
            name: name.to_string(),
            brand: "Ambev".to_string(),
            style: BeverageStyle::Lager,
            quantity: 10,
            max: 50,
        }
    }

    #[test]
    fn insert_assigns_sequential_identifiers() {
        let store = InMemoryItemStore::new();
        let a = store.insert(draft("Brahma")).unwrap();
        let b = store.insert(draft("Skol")).unwrap();
        assert!(a.id() < b.id());
    }

    #[test]
    fn insert_rejects_duplicate_name_and_keeps_existing_item() {
        let store = InMemoryItemStore::new();
        let first = store.insert(draft("Brahma")).unwrap();

        let mut dup = draft("Brahma");
        dup.brand = "Someone else".to_string();
        let err = store.insert(dup).unwrap_err();
        assert_eq!(err, StockError::AlreadyRegistered("Brahma".to_string()));

        // The registered item is untouched.
        assert_eq!(store.find_by_id(first.id()).unwrap(), first);
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn name_matching_is_case_sensitive() {
        let store = InMemoryItemStore::new();
        store.insert(draft("Brahma")).unwrap();
        store.insert(draft("brahma")).unwrap();
        assert_eq!(store.find_by_name("brahma").unwrap().name(), "brahma");
    }

    #[test]
    fn find_by_name_misses_with_not_found() {
        let store = InMemoryItemStore::new();
        assert_eq!(store.find_by_name("Brahma"), Err(StockError::NotFound));
    }

    #[test]
    fn list_all_on_empty_store_is_empty_not_an_error() {
        let store = InMemoryItemStore::new();
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn list_all_preserves_insertion_order() {
        let store = InMemoryItemStore::new();
        for name in ["Brahma", "Skol", "Antarctica"] {
            store.insert(draft(name)).unwrap();
        }
        let names: Vec<_> = store.list_all().iter().map(|i| i.name().to_string()).collect();
        assert_eq!(names, ["Brahma", "Skol", "Antarctica"]);
    }

    #[test]
    fn delete_unknown_id_fails_and_leaves_store_unmodified() {
        let store = InMemoryItemStore::new();
        store.insert(draft("Brahma")).unwrap();

        let err = store.delete(ItemId::new(42)).unwrap_err();
        assert_eq!(err, StockError::NotFound);
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn delete_removes_the_item() {
        let store = InMemoryItemStore::new();
        let item = store.insert(draft("Brahma")).unwrap();
        store.delete(item.id()).unwrap();
        assert_eq!(store.find_by_id(item.id()), Err(StockError::NotFound));
    }

    #[test]
    fn update_persists_a_successful_mutation() {
        let store = InMemoryItemStore::new();
        let item = store.insert(draft("Brahma")).unwrap();

        let updated = store.update(item.id(), &mut |i| i.increment(5)).unwrap();
        assert_eq!(updated.quantity(), 15);
        assert_eq!(store.find_by_id(item.id()).unwrap().quantity(), 15);
    }

    #[test]
    fn update_rolls_back_on_mutation_failure() {
        let store = InMemoryItemStore::new();
        let item = store.insert(draft("Brahma")).unwrap();

        let err = store.update(item.id(), &mut |i| i.increment(1000)).unwrap_err();
        assert!(matches!(err, StockError::StockExceeded { .. }));
        assert_eq!(store.find_by_id(item.id()).unwrap().quantity(), 10);
    }

    #[test]
    fn update_unknown_id_fails_with_not_found() {
        let store = InMemoryItemStore::new();
        let err = store.update(ItemId::new(7), &mut |i| i.increment(1)).unwrap_err();
        assert_eq!(err, StockError::NotFound);
    }
}
