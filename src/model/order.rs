//! Order status and purchase payload types.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// Delivery status of one order slot.
///
/// `Empty` marks a free slot. The remaining variants trace an order's
/// delivery timeline in the order a delivery worker visits them.
///
/// The enum is `repr(u8)` so a slot's status can live in an atomic cell
/// shared between the coordinator and the worker bound to that slot; see
/// [`StatusCell`](crate::pipeline::StatusCell).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum OrderStatus {
    Empty = 0,
    Accepted = 1,
    Shipped = 2,
    OutForDelivery = 3,
    Arrived = 4,
}

impl OrderStatus {
    /// Raw value stored in a slot's atomic status cell.
    pub(crate) fn as_raw(self) -> u8 {
        self as u8
    }

    /// Inverse of [`OrderStatus::as_raw`]. Only ever fed values produced by
    /// `as_raw`, so every valid discriminant maps back; anything else reads
    /// as `Empty`.
    pub(crate) fn from_raw(raw: u8) -> Self {
        match raw {
            1 => OrderStatus::Accepted,
            2 => OrderStatus::Shipped,
            3 => OrderStatus::OutForDelivery,
            4 => OrderStatus::Arrived,
            _ => OrderStatus::Empty,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            OrderStatus::Empty => "NONE",
            OrderStatus::Accepted => "ACCEPTED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::OutForDelivery => "OUT FOR DELIVERY",
            OrderStatus::Arrived => "ARRIVED",
        };
        f.write_str(text)
    }
}

/// Items to buy: item name mapped to quantity.
///
/// This is the purchase-request payload. The requester builds it, the
/// coordinator moves it into a slot, and it is cleared when the slot is
/// reclaimed.
pub type ItemBasket = HashMap<String, u32>;

/// Read-only view of one order slot, as handed to the display layer.
///
/// Snapshots are eventually consistent with the last coordinator-applied
/// mutation; no stronger iteration guarantee is made.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSnapshot {
    pub status: OrderStatus,
    pub items: ItemBasket,
}
