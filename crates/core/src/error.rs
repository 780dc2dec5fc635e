//! Domain error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the domain layer.
pub type StockResult<T> = Result<T, StockError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// bounds, conflicts). Infrastructure concerns belong elsewhere. Every kind
/// is recoverable by the caller; nothing here is process-fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StockError {
    /// A creation payload failed validation (e.g. empty name, max <= 0).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item with the same name is already registered.
    ///
    /// Covers both the store-level duplicate check and the service-level
    /// uniqueness check; they are the same condition surfaced at two layers,
    /// so they share one kind.
    #[error("an item named {0:?} is already registered")]
    AlreadyRegistered(String),

    /// No item matches the given identifier or name.
    #[error("item not found")]
    NotFound,

    /// An adjustment amount was negative.
    #[error("adjustment amount must not be negative, got {0}")]
    NegativeArgument(i64),

    /// Incrementing would push the quantity past the item's maximum.
    #[error("incrementing item {id} by {amount} would exceed its maximum")]
    StockExceeded { id: ItemId, amount: i64 },

    /// Decrementing would drop the quantity below zero.
    #[error("decrementing item {id} would drop its quantity below zero")]
    StockBelowMinimum { id: ItemId },
}

impl StockError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn already_registered(name: impl Into<String>) -> Self {
        Self::AlreadyRegistered(name.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
