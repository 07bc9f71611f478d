//! Error types for the order pipeline.

use thiserror::Error;

use crate::model::OrderStatus;
use crate::pipeline::slots::SlotWriter;

/// Errors surfaced to pipeline callers.
///
/// Everything that can go wrong *inside* the pipeline (see [`SlotError`])
/// is logged by the coordinator and dropped; callers only ever see that
/// the pipeline itself has gone away.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PipelineError {
    /// The coordinator is no longer receiving requests.
    #[error("order pipeline closed")]
    Closed,

    /// The coordinator task failed to join during shutdown.
    #[error("coordinator task failed: {0}")]
    Runtime(String),
}

/// Integrity failures detected on the slot table.
///
/// These never cross the pipeline boundary: the coordinator logs the error,
/// drops the offending event, and carries on. One order is lost; the loop
/// is not.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SlotError {
    /// An acceptance targeted a slot that is not free. The round-robin
    /// cursor has wrapped past `MAX_ORDERS` outstanding orders.
    #[error("slot {index} is not free (status {status}, writer {writer:?})")]
    Occupied {
        index: usize,
        status: OrderStatus,
        writer: SlotWriter,
    },

    /// A completion signal targeted a slot whose worker has not finished
    /// its status sequence, or that has no worker bound at all.
    #[error("slot {index} is not finalized (status {status}, writer {writer:?})")]
    NotFinalized {
        index: usize,
        status: OrderStatus,
        writer: SlotWriter,
    },

    /// The slot index does not exist in the table.
    #[error("slot index {0} out of range")]
    OutOfRange(usize),
}
