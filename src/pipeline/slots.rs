//! The fixed-capacity order slot table.
//!
//! Each slot is a single-writer resource. Who may write it is tracked
//! explicitly as part of slot state: the coordinator owns a slot while it
//! is free, hands write access to a delivery worker on acceptance, and
//! takes it back only when it finalizes that worker's completion signal.
//! The status field is the one piece both sides touch across tasks, so it
//! lives in an atomic cell; everything else is written by the coordinator
//! alone.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::model::{ItemBasket, OrderSnapshot, OrderStatus};
use crate::pipeline::error::SlotError;
use crate::pipeline::MAX_ORDERS;

/// Shared handle to one slot's status field.
///
/// Exactly one task writes it at any time — the coordinator until it binds
/// a worker, then that worker until the coordinator finalizes the slot.
/// Snapshot readers may load it at any point and see the latest write.
#[derive(Debug, Clone)]
pub struct StatusCell(Arc<AtomicU8>);

impl StatusCell {
    pub(crate) fn new() -> Self {
        Self(Arc::new(AtomicU8::new(OrderStatus::Empty.as_raw())))
    }

    pub fn load(&self) -> OrderStatus {
        OrderStatus::from_raw(self.0.load(Ordering::SeqCst))
    }

    pub(crate) fn store(&self, status: OrderStatus) {
        self.0.store(status.as_raw(), Ordering::SeqCst);
    }
}

/// Which side currently holds write access to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotWriter {
    /// The slot is free (or being finalized); only the coordinator writes.
    Coordinator,
    /// A delivery worker is bound and owns the status field.
    Worker,
}

/// Coordinator-owned part of a slot: the item map plus the writer tag.
#[derive(Debug)]
struct SlotRecord {
    items: ItemBasket,
    writer: SlotWriter,
}

#[derive(Debug)]
struct Slot {
    status: StatusCell,
    record: Mutex<SlotRecord>,
}

impl Slot {
    fn new() -> Self {
        Self {
            status: StatusCell::new(),
            record: Mutex::new(SlotRecord {
                items: ItemBasket::new(),
                writer: SlotWriter::Coordinator,
            }),
        }
    }

    fn record(&self) -> MutexGuard<'_, SlotRecord> {
        // Writers never panic while holding the lock, but a poisoned guard
        // is still usable state here.
        self.record.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Arena of [`MAX_ORDERS`] order slots, indexed `0..MAX_ORDERS`.
///
/// A slot index is reused only after the full cycle: accepted, delivered,
/// finalized. At most `MAX_ORDERS` orders are ever outstanding.
#[derive(Debug)]
pub struct SlotTable {
    slots: Vec<Slot>,
}

impl Default for SlotTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotTable {
    pub fn new() -> Self {
        Self {
            slots: (0..MAX_ORDERS).map(|_| Slot::new()).collect(),
        }
    }

    fn slot(&self, index: usize) -> Result<&Slot, SlotError> {
        self.slots.get(index).ok_or(SlotError::OutOfRange(index))
    }

    /// Status of one slot, as last written.
    pub fn status(&self, index: usize) -> Result<OrderStatus, SlotError> {
        Ok(self.slot(index)?.status.load())
    }

    /// Binds an order to a slot: installs the items, hands the status field
    /// to a worker, and marks the slot `Accepted`. Returns the status cell
    /// for the worker to drive.
    ///
    /// Fails unless the slot is fully finalized — empty status, empty item
    /// map, and write access held by the coordinator. Coordinator-only.
    pub(crate) fn accept(
        &self,
        index: usize,
        items: ItemBasket,
    ) -> Result<StatusCell, SlotError> {
        let slot = self.slot(index)?;
        let mut record = slot.record();
        let status = slot.status.load();
        if status != OrderStatus::Empty
            || record.writer != SlotWriter::Coordinator
            || !record.items.is_empty()
        {
            return Err(SlotError::Occupied {
                index,
                status,
                writer: record.writer,
            });
        }
        record.items = items;
        record.writer = SlotWriter::Worker;
        slot.status.store(OrderStatus::Accepted);
        Ok(slot.status.clone())
    }

    /// Reclaims a slot after its worker signals completion: verifies the
    /// worker already drove the status back to `Empty`, clears the item
    /// map, and revokes the worker's write access. Coordinator-only.
    pub(crate) fn finalize(&self, index: usize) -> Result<(), SlotError> {
        let slot = self.slot(index)?;
        let mut record = slot.record();
        let status = slot.status.load();
        if record.writer != SlotWriter::Worker || status != OrderStatus::Empty {
            return Err(SlotError::NotFinalized {
                index,
                status,
                writer: record.writer,
            });
        }
        record.items.clear();
        record.writer = SlotWriter::Coordinator;
        Ok(())
    }

    /// Clones the current status and items of every slot.
    pub fn snapshot(&self) -> Vec<OrderSnapshot> {
        self.slots
            .iter()
            .map(|slot| OrderSnapshot {
                status: slot.status.load(),
                items: slot.record().items.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snack() -> ItemBasket {
        ItemBasket::from([("snack".into(), 2)])
    }

    #[test]
    fn a_fresh_table_is_all_empty() {
        let table = SlotTable::new();
        let snapshot = table.snapshot();
        assert_eq!(snapshot.len(), MAX_ORDERS);
        for slot in snapshot {
            assert_eq!(slot.status, OrderStatus::Empty);
            assert!(slot.items.is_empty());
        }
    }

    #[test]
    fn accept_installs_items_and_binds_a_worker() {
        let table = SlotTable::new();
        let cell = table.accept(0, snack()).unwrap();
        assert_eq!(cell.load(), OrderStatus::Accepted);
        assert_eq!(table.snapshot()[0].items, snack());
    }

    #[test]
    fn accept_refuses_an_occupied_slot() {
        let table = SlotTable::new();
        table.accept(0, snack()).unwrap();
        let err = table.accept(0, snack()).unwrap_err();
        assert_eq!(
            err,
            SlotError::Occupied {
                index: 0,
                status: OrderStatus::Accepted,
                writer: SlotWriter::Worker,
            }
        );
    }

    #[test]
    fn finalize_requires_the_worker_to_have_finished() {
        let table = SlotTable::new();
        let cell = table.accept(0, snack()).unwrap();

        // Mid-flight: worker still owns a non-empty status.
        cell.store(OrderStatus::Shipped);
        assert_eq!(
            table.finalize(0),
            Err(SlotError::NotFinalized {
                index: 0,
                status: OrderStatus::Shipped,
                writer: SlotWriter::Worker,
            })
        );

        cell.store(OrderStatus::Empty);
        table.finalize(0).unwrap();
        assert!(table.snapshot()[0].items.is_empty());
    }

    #[test]
    fn finalize_refuses_a_slot_with_no_worker_bound() {
        let table = SlotTable::new();
        let err = table.finalize(3).unwrap_err();
        assert_eq!(
            err,
            SlotError::NotFinalized {
                index: 3,
                status: OrderStatus::Empty,
                writer: SlotWriter::Coordinator,
            }
        );
    }

    #[test]
    fn a_finalized_slot_is_reusable() {
        let table = SlotTable::new();
        let cell = table.accept(0, snack()).unwrap();
        cell.store(OrderStatus::Empty);
        table.finalize(0).unwrap();
        table.accept(0, snack()).unwrap();
        assert_eq!(table.status(0), Ok(OrderStatus::Accepted));
    }

    #[test]
    fn out_of_range_indices_are_typed_errors() {
        let table = SlotTable::new();
        assert_eq!(
            table.accept(MAX_ORDERS, snack()).unwrap_err(),
            SlotError::OutOfRange(MAX_ORDERS)
        );
        assert_eq!(
            table.finalize(MAX_ORDERS).unwrap_err(),
            SlotError::OutOfRange(MAX_ORDERS)
        );
    }
}
