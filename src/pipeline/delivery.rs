//! The delivery worker: one task per accepted order.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::model::OrderStatus;
use crate::pipeline::slots::StatusCell;

/// Status values a delivery passes through, in visit order. The final
/// `Empty` write is the worker's own: it hands the status field back before
/// signaling, and the coordinator only verifies it.
pub(crate) const DELIVERY_PHASES: [OrderStatus; 4] = [
    OrderStatus::Shipped,
    OrderStatus::OutForDelivery,
    OrderStatus::Arrived,
    OrderStatus::Empty,
];

/// Simulates one order's delivery timeline.
///
/// A worker is bound to a single slot and owns that slot's status field
/// from `Accepted` until its completion signal is finalized. It is not
/// interruptible: once spawned it runs every phase and sends its slot
/// index on the completion channel exactly once.
pub(crate) struct DeliveryWorker {
    index: usize,
    status: StatusCell,
    phase_delay: Duration,
}

impl DeliveryWorker {
    pub(crate) fn new(index: usize, status: StatusCell, phase_delay: Duration) -> Self {
        Self {
            index,
            status,
            phase_delay,
        }
    }

    pub(crate) async fn run(self, completions: mpsc::Sender<usize>) {
        debug!(slot = self.index, "delivery started");
        for status in DELIVERY_PHASES {
            sleep(self.phase_delay).await;
            self.status.store(status);
            debug!(slot = self.index, status = %status, "delivery phase");
        }
        if completions.send(self.index).await.is_err() {
            warn!(slot = self.index, "coordinator gone, completion signal lost");
        }
    }
}
