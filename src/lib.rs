//! # Mallsim
//!
//! > **A bounded order-processing pipeline for a toy retail simulator.**
//!
//! Orders are accepted into a fixed-capacity slot table, each accepted
//! order is handed to an independent delivery task that walks it through a
//! timed status sequence, and completion is reported back to a central
//! coordinator that reclaims the slot.
//!
//! ## Concurrency Model
//!
//! One coordinator task plus one delivery task per outstanding order,
//! bounded by [`pipeline::MAX_ORDERS`]. All communication goes over two
//! capacity-1 hand-off channels; the coordinator's `select!` over them is
//! its only suspension point. Each slot is a single-writer resource: the
//! coordinator owns it while free, a bound worker owns the status field
//! from `Accepted` until the coordinator finalizes its completion signal.
//! That handoff is tracked explicitly in slot state rather than guarded by
//! a lock around the whole table.
//!
//! Nothing inside the pipeline retries or propagates failures: an
//! inconsistent event is logged and dropped, one order is lost, and the
//! loop carries on.
//!
//! ## Module Tour
//!
//! - **[`pipeline`]** — the core: slot table, coordinator loop, delivery
//!   workers, and the [`PipelineClient`](pipeline::PipelineClient) handle.
//! - **[`model`]** — pure data: order status and snapshots, the item
//!   catalog, customer points and cart.
//! - **[`storefront`]** — the purchase-confirmation collaborator that
//!   validates baskets (stock, points, order limit) before submitting.
//! - **[`telemetry`]** — `tracing` subscriber bootstrap.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod model;
pub mod pipeline;
pub mod storefront;
pub mod telemetry;
