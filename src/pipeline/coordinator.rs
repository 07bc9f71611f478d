//! The order coordinator: a single task serializing every order-lifecycle
//! mutation.
//!
//! The loop multiplexes exactly two event sources — purchase requests from
//! collaborators and completion signals from delivery workers — and that
//! `select!` is its only suspension point. No event is ever retried: a
//! request that fails its precondition is logged and dropped, and the loop
//! carries on. This is a best-effort simulator, not a transactional system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::model::ItemBasket;
use crate::pipeline::delivery::DeliveryWorker;
use crate::pipeline::slots::SlotTable;
use crate::pipeline::{PipelineConfig, MAX_ORDERS};

pub(crate) struct Coordinator {
    purchases: mpsc::Receiver<ItemBasket>,
    table: Arc<SlotTable>,
    /// Orders currently outstanding for the customer. Written only here;
    /// read by [`PipelineClient::order_count`](crate::pipeline::PipelineClient::order_count).
    outstanding: Arc<AtomicUsize>,
    config: PipelineConfig,
    /// Round-robin slot cursor. Advances `(cursor + 1) % MAX_ORDERS` after
    /// each successful acceptance, regardless of which slots are free; it
    /// never searches.
    cursor: usize,
}

impl Coordinator {
    pub(crate) fn new(
        purchases: mpsc::Receiver<ItemBasket>,
        table: Arc<SlotTable>,
        outstanding: Arc<AtomicUsize>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            purchases,
            table,
            outstanding,
            config,
            cursor: 0,
        }
    }

    pub(crate) async fn run(mut self) {
        info!("order coordinator started");

        // Workers report back on their own channel; the coordinator keeps a
        // sender so the channel outlives gaps between deliveries.
        let (completion_tx, mut completions) = mpsc::channel::<usize>(1);

        loop {
            tokio::select! {
                request = self.purchases.recv() => match request {
                    Some(items) => self.handle_purchase(items, &completion_tx),
                    // All clients dropped: stop accepting.
                    None => break,
                },
                Some(index) = completions.recv() => self.handle_completion(index),
            }
        }

        // Wait out the deliveries still in flight before exiting.
        drop(completion_tx);
        while let Some(index) = completions.recv().await {
            self.handle_completion(index);
        }

        info!(
            outstanding = self.outstanding.load(Ordering::SeqCst),
            "order coordinator stopped"
        );
    }

    /// Accepts a purchase into the cursor's slot and spawns its delivery.
    ///
    /// An empty payload or a non-free target slot drops the request: no
    /// slot is allocated, no worker spawned, the counter and cursor are
    /// untouched.
    fn handle_purchase(&mut self, items: ItemBasket, completion_tx: &mpsc::Sender<usize>) {
        if items.is_empty() {
            warn!("purchase request with no items, dropping");
            return;
        }

        let index = self.cursor;
        match self.table.accept(index, items) {
            Ok(status) => {
                let worker = DeliveryWorker::new(index, status, self.config.phase_delay);
                tokio::spawn(worker.run(completion_tx.clone()));
                let count = self.outstanding.fetch_add(1, Ordering::SeqCst) + 1;
                self.cursor = (self.cursor + 1) % MAX_ORDERS;
                info!(slot = index, outstanding = count, "order accepted");
            }
            Err(e) => error!(slot = index, error = %e, "purchase dropped"),
        }
    }

    /// Reclaims the slot a worker has finished with.
    fn handle_completion(&mut self, index: usize) {
        match self.table.finalize(index) {
            Ok(()) => {
                let count = self.outstanding.fetch_sub(1, Ordering::SeqCst) - 1;
                info!(slot = index, outstanding = count, "delivery complete");
            }
            Err(e) => error!(slot = index, error = %e, "completion dropped"),
        }
    }
}
