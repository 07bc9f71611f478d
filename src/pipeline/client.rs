//! The cloneable handle collaborators use to reach the pipeline.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::model::{ItemBasket, OrderSnapshot};
use crate::pipeline::error::PipelineError;
use crate::pipeline::slots::SlotTable;

/// Client side of the order pipeline.
///
/// Wraps the purchase-request channel plus read-only views of the slot
/// table and the outstanding-order counter. Clone freely; the coordinator
/// keeps running until every clone is dropped.
#[derive(Debug, Clone)]
pub struct PipelineClient {
    purchases: mpsc::Sender<ItemBasket>,
    table: Arc<SlotTable>,
    outstanding: Arc<AtomicUsize>,
}

impl PipelineClient {
    pub(crate) fn new(
        purchases: mpsc::Sender<ItemBasket>,
        table: Arc<SlotTable>,
        outstanding: Arc<AtomicUsize>,
    ) -> Self {
        Self {
            purchases,
            table,
            outstanding,
        }
    }

    /// Hands a purchase request to the coordinator, waiting until it is
    /// ready to take it.
    ///
    /// The pipeline performs no validation of item existence, price, or
    /// stock; that is the caller's job before submitting. The only error
    /// this can surface is a closed pipeline — anything the coordinator
    /// rejects afterwards (empty payload, occupied slot) is logged and
    /// dropped on its side.
    pub async fn submit_purchase(&self, items: ItemBasket) -> Result<(), PipelineError> {
        self.purchases
            .send(items)
            .await
            .map_err(|_| PipelineError::Closed)
    }

    /// Number of orders currently outstanding for the customer.
    ///
    /// Collaborators use this to gate new purchases against
    /// [`MAX_ORDERS`](crate::pipeline::MAX_ORDERS) before submitting.
    pub fn order_count(&self) -> usize {
        self.outstanding.load(Ordering::SeqCst)
    }

    /// Read-only snapshot of every slot for the display layer. Eventually
    /// consistent with the last coordinator-applied mutation.
    pub fn snapshot(&self) -> Vec<OrderSnapshot> {
        self.table.snapshot()
    }
}
