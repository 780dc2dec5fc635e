//! Bounded stock adjustment.
//!
//! The only mutations of an item's quantity. Both operations reject a
//! negative amount before any bound is evaluated, and leave the item
//! unmodified on every failure path.

use brewstock_core::{StockError, StockResult};

use crate::item::Item;

impl Item {
    /// Raise the quantity by `amount`, keeping `quantity <= max`.
    ///
    /// The upper bound is inclusive: landing exactly on `max` succeeds.
    pub fn increment(&mut self, amount: i64) -> StockResult<()> {
        if amount < 0 {
            return Err(StockError::NegativeArgument(amount));
        }

        // Arithmetic overflow counts as exceeding the bound.
        let next = match self.quantity().checked_add(amount) {
            Some(n) if n <= self.max() => n,
            _ => {
                return Err(StockError::StockExceeded {
                    id: self.id(),
                    amount,
                });
            }
        };

        self.set_quantity(next);
        Ok(())
    }

    /// Lower the quantity by `amount`, keeping `quantity >= 0`.
    ///
    /// The lower bound is inclusive: landing exactly on zero succeeds.
    pub fn decrement(&mut self, amount: i64) -> StockResult<()> {
        if amount < 0 {
            return Err(StockError::NegativeArgument(amount));
        }

        let next = self.quantity() - amount;
        if next < 0 {
            return Err(StockError::StockBelowMinimum { id: self.id() });
        }

        self.set_quantity(next);
        Ok(())
    }
}
