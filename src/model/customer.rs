//! Customer bookkeeping: the points balance and the shopping cart.

use thiserror::Error;

use crate::model::ItemBasket;

/// Points granted to a fresh customer.
pub const INIT_POINTS: u32 = 1000;

/// Errors raised by point arithmetic.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PointsError {
    /// The balance cannot go negative.
    #[error("lack of points: balance is {have}, requested {need}")]
    Insufficient { have: u32, need: u32 },
}

/// A single customer's sequential state. Orders in flight are tracked by
/// the pipeline, not here.
#[derive(Debug, Clone)]
pub struct Customer {
    points: u32,
    cart: ItemBasket,
}

impl Default for Customer {
    fn default() -> Self {
        Self::new()
    }
}

impl Customer {
    pub fn new() -> Self {
        Self {
            points: INIT_POINTS,
            cart: ItemBasket::new(),
        }
    }

    /// Remaining points balance.
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Deducts `cost` points, returning the new balance.
    pub fn spend(&mut self, cost: u32) -> Result<u32, PointsError> {
        if cost > self.points {
            return Err(PointsError::Insufficient {
                have: self.points,
                need: cost,
            });
        }
        self.points -= cost;
        Ok(self.points)
    }

    /// Returns points to the balance (e.g. a refused purchase).
    pub fn refund(&mut self, amount: u32) -> u32 {
        self.points += amount;
        self.points
    }

    pub fn cart(&self) -> &ItemBasket {
        &self.cart
    }

    /// Merges items into the cart, adding quantities for items already
    /// present, and returns the updated cart.
    pub fn add_to_cart(&mut self, items: ItemBasket) -> &ItemBasket {
        for (name, qty) in items {
            *self.cart.entry(name).or_insert(0) += qty;
        }
        &self.cart
    }

    /// Empties the cart and hands back its previous contents.
    pub fn take_cart(&mut self) -> ItemBasket {
        std::mem::take(&mut self.cart)
    }

    pub fn reset_cart(&mut self) {
        self.cart.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spending_deducts_and_reports_the_balance() {
        let mut customer = Customer::new();
        assert_eq!(customer.spend(300), Ok(700));
        assert_eq!(customer.points(), 700);
    }

    #[test]
    fn overspending_is_refused_and_leaves_the_balance_alone() {
        let mut customer = Customer::new();
        let err = customer.spend(INIT_POINTS + 1);
        assert_eq!(
            err,
            Err(PointsError::Insufficient {
                have: INIT_POINTS,
                need: INIT_POINTS + 1,
            })
        );
        assert_eq!(customer.points(), INIT_POINTS);
    }

    #[test]
    fn cart_merges_quantities_per_item() {
        let mut customer = Customer::new();
        customer.add_to_cart(ItemBasket::from([("snack".into(), 2)]));
        customer.add_to_cart(ItemBasket::from([("snack".into(), 3), ("coffee".into(), 1)]));
        assert_eq!(customer.cart().get("snack"), Some(&5));
        assert_eq!(customer.cart().get("coffee"), Some(&1));
    }

    #[test]
    fn take_cart_empties_it() {
        let mut customer = Customer::new();
        customer.add_to_cart(ItemBasket::from([("meal".into(), 1)]));
        let cart = customer.take_cart();
        assert_eq!(cart.get("meal"), Some(&1));
        assert!(customer.cart().is_empty());
    }
}
