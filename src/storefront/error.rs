//! Error types for the storefront.

use thiserror::Error;

use crate::model::{CatalogError, PointsError};
use crate::pipeline::PipelineError;

/// Reasons a purchase is refused before it reaches the pipeline.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// The customer already has the maximum number of orders outstanding.
    #[error("order request denied: maximum order number is reached, try later")]
    OrderLimitReached,

    /// The basket names an unknown item or asks for more than is in stock.
    #[error("catalog refused the basket: {0}")]
    Catalog(#[from] CatalogError),

    /// The customer cannot afford the basket.
    #[error("points refused the basket: {0}")]
    Points(#[from] PointsError),

    /// The pipeline is no longer accepting requests.
    #[error("pipeline unavailable: {0}")]
    Pipeline(#[from] PipelineError),
}
