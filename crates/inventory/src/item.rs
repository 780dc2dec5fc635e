use serde::{Deserialize, Serialize};

use brewstock_core::{ItemId, StockError, StockResult};

/// Beverage style taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageStyle {
    Lager,
    Malzbier,
    Witbier,
    Weiss,
    PaleAle,
    Ipa,
    Stout,
}

/// Creation payload for a catalog item (no identifier yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub brand: String,
    pub style: BeverageStyle,
    pub quantity: i64,
    pub max: i64,
}

impl NewItem {
    /// Validate the payload before it is admitted into the catalog.
    ///
    /// Enforced here so every item starts out satisfying
    /// `0 <= quantity <= max`.
    pub fn validate(&self) -> StockResult<()> {
        if self.name.trim().is_empty() {
            return Err(StockError::validation("name cannot be empty"));
        }
        if self.brand.trim().is_empty() {
            return Err(StockError::validation("brand cannot be empty"));
        }
        if self.max <= 0 {
            return Err(StockError::validation("max must be positive"));
        }
        if self.quantity < 0 {
            return Err(StockError::validation("quantity cannot be negative"));
        }
        if self.quantity > self.max {
            return Err(StockError::validation("quantity cannot exceed max"));
        }
        Ok(())
    }
}

/// A beverage stock-keeping unit with a bounded quantity.
///
/// Fields are private so the `0 <= quantity <= max` invariant can only be
/// touched through [`Item::increment`] and [`Item::decrement`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    brand: String,
    style: BeverageStyle,
    quantity: i64,
    max: i64,
}

impl Item {
    /// Build an item from a validated draft and a store-assigned identifier.
    pub fn new(id: ItemId, draft: NewItem) -> Self {
        Self {
            id,
            name: draft.name,
            brand: draft.brand,
            style: draft.style,
            quantity: draft.quantity,
            max: draft.max,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn style(&self) -> BeverageStyle {
        self.style
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Inclusive upper bound for this item's quantity.
    pub fn max(&self) -> i64 {
        self.max
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        debug_assert!(quantity >= 0 && quantity <= self.max);
        self.quantity = quantity;
    }
}
