//! The purchase-confirmation collaborator in front of the pipeline.
//!
//! The pipeline itself validates nothing; this layer does. A buy-now runs
//! the full gauntlet — outstanding-order gate, catalog pricing and stock,
//! points balance — and only a basket that clears every check is submitted.
//! Every refusal is a typed [`StoreError`] returned to the caller with
//! nothing deducted and nothing submitted.

pub mod error;

pub use error::StoreError;

use tracing::{info, warn};

use crate::model::{Catalog, Customer, ItemBasket, OrderSnapshot};
use crate::pipeline::{PipelineClient, MAX_ORDERS};

/// One customer's storefront session: catalog, points, cart, and a handle
/// to the order pipeline.
#[derive(Debug)]
pub struct Storefront {
    catalog: Catalog,
    customer: Customer,
    pipeline: PipelineClient,
}

impl Storefront {
    /// Opens a session with the default catalog and a fresh customer.
    pub fn new(pipeline: PipelineClient) -> Self {
        Self::with_inventory(Catalog::default(), Customer::new(), pipeline)
    }

    pub fn with_inventory(catalog: Catalog, customer: Customer, pipeline: PipelineClient) -> Self {
        Self {
            catalog,
            customer,
            pipeline,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Remaining points balance.
    pub fn points(&self) -> u32 {
        self.customer.points()
    }

    /// Orders currently outstanding, read from the pipeline counter.
    pub fn order_count(&self) -> usize {
        self.pipeline.order_count()
    }

    /// Snapshot of the order slots, for listing the customer's orders.
    pub fn orders(&self) -> Vec<OrderSnapshot> {
        self.pipeline.snapshot()
    }

    /// Merges items into the cart.
    pub fn add_to_cart(&mut self, items: ItemBasket) -> &ItemBasket {
        self.customer.add_to_cart(items)
    }

    pub fn cart(&self) -> &ItemBasket {
        self.customer.cart()
    }

    pub fn reset_cart(&mut self) {
        self.customer.reset_cart();
    }

    /// Confirms a purchase and hands it to the pipeline.
    ///
    /// Checks, in order: the outstanding-order gate, item existence and
    /// stock, the points balance. Deductions happen only after every check
    /// passes. Returns the total cost in points.
    pub async fn buy_now(&mut self, basket: ItemBasket) -> Result<u32, StoreError> {
        if self.pipeline.order_count() >= MAX_ORDERS {
            warn!("order request denied, maximum order number is reached");
            return Err(StoreError::OrderLimitReached);
        }

        let total = self.catalog.price_basket(&basket)?;
        self.customer.spend(total)?;
        self.catalog.take_stock(&basket)?;

        info!(
            total,
            points = self.customer.points(),
            "purchase confirmed"
        );
        self.pipeline.submit_purchase(basket).await?;
        Ok(total)
    }

    /// Buys the cart's contents. The cart is emptied by the attempt, as
    /// with the original buy-now-from-cart flow, whether or not the
    /// purchase goes through.
    pub async fn checkout_cart(&mut self) -> Result<u32, StoreError> {
        let basket = self.customer.take_cart();
        self.buy_now(basket).await
    }
}
