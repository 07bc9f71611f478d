//! The concurrency core: a bounded accept/dispatch/complete loop.
//!
//! One coordinator task owns the order lifecycle; one delivery worker task
//! runs per outstanding order, bounded by [`MAX_ORDERS`]. All inter-task
//! communication goes over two capacity-1 hand-off channels (purchase
//! requests in, completion signals back). Each slot in the table is a
//! single-writer resource whose writer identity is tracked explicitly —
//! see [`slots`].

mod coordinator;
mod delivery;

pub mod client;
pub mod error;
pub mod slots;

pub use client::PipelineClient;
pub use error::{PipelineError, SlotError};
pub use slots::{SlotTable, SlotWriter, StatusCell};

use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;

use coordinator::Coordinator;

/// Maximum number of orders a customer has outstanding at the same time.
pub const MAX_ORDERS: usize = 7;

/// Fixed pipeline parameters.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Pause between delivery phases. Each delivery runs four phases.
    pub phase_delay: Duration,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            phase_delay: Duration::from_secs(5),
        }
    }
}

/// A running order pipeline: the spawned coordinator plus its client.
///
/// # Example
///
/// ```ignore
/// let pipeline = OrderPipeline::start(PipelineConfig::default());
/// pipeline.client.submit_purchase(basket).await?;
/// // ... later, once extra client clones are dropped:
/// pipeline.shutdown().await?;
/// ```
pub struct OrderPipeline {
    pub client: PipelineClient,
    coordinator: JoinHandle<()>,
}

impl OrderPipeline {
    /// Builds the slot table and channels and spawns the coordinator task.
    pub fn start(config: PipelineConfig) -> Self {
        let (purchase_tx, purchase_rx) = mpsc::channel(1);
        let table = Arc::new(SlotTable::new());
        let outstanding = Arc::new(AtomicUsize::new(0));

        let coordinator = Coordinator::new(
            purchase_rx,
            Arc::clone(&table),
            Arc::clone(&outstanding),
            config,
        );
        let handle = tokio::spawn(coordinator.run());

        Self {
            client: PipelineClient::new(purchase_tx, table, outstanding),
            coordinator: handle,
        }
    }

    /// Closes the request channel and waits for the coordinator to drain
    /// every in-flight delivery and exit.
    ///
    /// Client clones held elsewhere must be dropped first; the coordinator
    /// keeps accepting as long as any sender is alive.
    pub async fn shutdown(self) -> Result<(), PipelineError> {
        info!("shutting down order pipeline");
        drop(self.client);
        self.coordinator
            .await
            .map_err(|e| PipelineError::Runtime(e.to_string()))
    }
}
