//! The item catalog: what the mall sells, at what price, and how much of
//! it is left in stock.

use std::fmt;

use thiserror::Error;

use crate::model::ItemBasket;

/// Number of distinct items the mall stocks.
pub const MAX_ITEMS: usize = 5;

/// Errors raised while pricing a basket or adjusting stock.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The named item is not sold here.
    #[error("no item named {0:?} in the catalog")]
    UnknownItem(String),

    /// Not enough stock to cover the requested quantity.
    #[error("lack of stock for {name}: want {want}, have {have}")]
    InsufficientStock { name: String, want: u32, have: u32 },
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Points required to buy one unit.
    pub price: u32,
    /// Units remaining in stock.
    pub stock: u32,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u32, stock: u32) -> Self {
        Self {
            name: name.into(),
            price,
            stock,
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} points, {} in stock)",
            self.name, self.price, self.stock
        )
    }
}

/// The fixed list of items for sale.
///
/// Stock counts are static apart from purchases; there is no catalog
/// management beyond that.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Default for Catalog {
    /// The standard storefront inventory.
    fn default() -> Self {
        Self::new(vec![
            Item::new("cellphone", 700, 10),
            Item::new("earphone", 30, 10),
            Item::new("snack", 2, 100),
            Item::new("coffee", 5, 100),
            Item::new("meal", 10, 50),
        ])
    }
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name == name)
    }

    /// Totals the cost of a basket in points, verifying along the way that
    /// every item exists and has enough stock. The catalog is not changed.
    pub fn price_basket(&self, basket: &ItemBasket) -> Result<u32, CatalogError> {
        let mut total = 0u32;
        for (name, &want) in basket {
            let item = self
                .get(name)
                .ok_or_else(|| CatalogError::UnknownItem(name.clone()))?;
            if item.stock < want {
                return Err(CatalogError::InsufficientStock {
                    name: name.clone(),
                    want,
                    have: item.stock,
                });
            }
            total += item.price * want;
        }
        Ok(total)
    }

    /// Removes a basket's quantities from stock. Validates the whole basket
    /// before touching anything, so a failure leaves the catalog unchanged.
    pub fn take_stock(&mut self, basket: &ItemBasket) -> Result<(), CatalogError> {
        self.price_basket(basket)?;
        for (name, want) in basket {
            if let Some(item) = self.get_mut(name) {
                item.stock -= want;
            }
        }
        Ok(())
    }

    /// Puts units back on the shelf.
    pub fn restock(&mut self, name: &str, count: u32) -> Result<(), CatalogError> {
        let item = self
            .get_mut(name)
            .ok_or_else(|| CatalogError::UnknownItem(name.to_string()))?;
        item.stock += count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basket(entries: &[(&str, u32)]) -> ItemBasket {
        entries
            .iter()
            .map(|&(name, qty)| (name.to_string(), qty))
            .collect()
    }

    #[test]
    fn default_catalog_has_the_full_inventory() {
        let catalog = Catalog::default();
        assert_eq!(catalog.items().len(), MAX_ITEMS);
        assert_eq!(catalog.get("snack").map(|i| i.price), Some(2));
    }

    #[test]
    fn pricing_sums_over_the_basket() {
        let catalog = Catalog::default();
        let total = catalog.price_basket(&basket(&[("snack", 2), ("coffee", 1)]));
        assert_eq!(total, Ok(9));
    }

    #[test]
    fn pricing_rejects_unknown_items() {
        let catalog = Catalog::default();
        let err = catalog.price_basket(&basket(&[("spaceship", 1)]));
        assert_eq!(err, Err(CatalogError::UnknownItem("spaceship".into())));
    }

    #[test]
    fn taking_stock_is_all_or_nothing() {
        let mut catalog = Catalog::default();
        let err = catalog.take_stock(&basket(&[("snack", 1), ("earphone", 11)]));
        assert_eq!(
            err,
            Err(CatalogError::InsufficientStock {
                name: "earphone".into(),
                want: 11,
                have: 10,
            })
        );
        // Nothing was deducted, not even the valid entry.
        assert_eq!(catalog.get("snack").map(|i| i.stock), Some(100));
    }

    #[test]
    fn restock_puts_units_back() {
        let mut catalog = Catalog::default();
        catalog.take_stock(&basket(&[("meal", 5)])).unwrap();
        assert_eq!(catalog.get("meal").map(|i| i.stock), Some(45));
        catalog.restock("meal", 5).unwrap();
        assert_eq!(catalog.get("meal").map(|i| i.stock), Some(50));
    }
}
