//! Store contract for the beverage catalog.

use std::sync::Arc;

use brewstock_core::{ItemId, StockResult};

use crate::item::{Item, NewItem};

/// Keyed collection of catalog items, addressable by identifier and by name.
///
/// Implementations must serialize `update` calls per identifier so that
/// concurrent read-modify-write adjustments of the same item cannot
/// interleave. All operations are synchronous; failures are domain errors,
/// never infrastructure panics.
pub trait ItemStore: Send + Sync {
    /// Assign the next identifier and persist the draft unchanged.
    ///
    /// Fails with `AlreadyRegistered` if an item with the same name exists
    /// (exact, case-sensitive match).
    fn insert(&self, draft: NewItem) -> StockResult<Item>;

    /// Fails with `NotFound` if no item has that name.
    fn find_by_name(&self, name: &str) -> StockResult<Item>;

    /// Fails with `NotFound` if no item has that identifier.
    fn find_by_id(&self, id: ItemId) -> StockResult<Item>;

    /// All items in identifier order. Empty store yields an empty vector.
    fn list_all(&self) -> Vec<Item>;

    /// Fails with `NotFound` if no item has that identifier, with no side
    /// effect; otherwise removes the item.
    fn delete(&self, id: ItemId) -> StockResult<()>;

    /// Atomically resolve, mutate, and persist a single item.
    ///
    /// If `mutate` fails, the stored item is left unmodified and the
    /// failure propagates unchanged.
    fn update(
        &self,
        id: ItemId,
        mutate: &mut dyn FnMut(&mut Item) -> StockResult<()>,
    ) -> StockResult<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn insert(&self, draft: NewItem) -> StockResult<Item> {
        (**self).insert(draft)
    }

    fn find_by_name(&self, name: &str) -> StockResult<Item> {
        (**self).find_by_name(name)
    }

    fn find_by_id(&self, id: ItemId) -> StockResult<Item> {
        (**self).find_by_id(id)
    }

    fn list_all(&self) -> Vec<Item> {
        (**self).list_all()
    }

    fn delete(&self, id: ItemId) -> StockResult<()> {
        (**self).delete(id)
    }

    fn update(
        &self,
        id: ItemId,
        mutate: &mut dyn FnMut(&mut Item) -> StockResult<()>,
    ) -> StockResult<Item> {
        (**self).update(id, mutate)
    }
}
