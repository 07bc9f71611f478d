//! Pure data structures for the retail simulation: order status, purchase
//! payloads, the item catalog, and the customer's points/cart bookkeeping.

pub mod customer;
pub mod item;
pub mod order;

pub use customer::*;
pub use item::*;
pub use order::*;
