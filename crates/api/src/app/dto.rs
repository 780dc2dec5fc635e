use serde::Deserialize;

use brewstock_inventory::{BeverageStyle, Item, NewItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub brand: String,
    pub style: BeverageStyle,
    pub quantity: i64,
    pub max: i64,
}

impl CreateItemRequest {
    pub fn into_draft(self) -> NewItem {
        NewItem {
            name: self.name,
            brand: self.brand,
            style: self.style,
            quantity: self.quantity,
            max: self.max,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct QuantityRequest {
    pub quantity: i64,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id().as_u64(),
        "name": item.name(),
        "brand": item.brand(),
        "style": item.style(),
        "quantity": item.quantity(),
        "max": item.max(),
    })
}
