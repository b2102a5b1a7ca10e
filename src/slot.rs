//! Single-value handoff slot for `no_std` environments.
//!
//! A capacity-1 cell built on `critical-section`, shared between one producer
//! and one consumer. The producer overwrites, the consumer takes and clears,
//! so only the latest value is ever observed. Thread/interrupt safe via
//! critical sections.

use core::cell::Cell;

use critical_section::Mutex;

/// A single-value slot shared between a producer and a consumer context.
///
/// Unlike a queue, the slot never backs up: publishing replaces any value
/// still waiting. This is the right shape for a command stream where only the
/// most recent command matters. Synchronization uses critical sections,
/// making the slot suitable for filling from an interrupt handler and
/// draining from the main loop.
pub struct Slot<T> {
    inner: Mutex<Cell<Option<T>>>,
}

impl<T> Slot<T> {
    /// Create a new empty slot.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(None)),
        }
    }

    /// Get a sender handle for this slot.
    pub const fn sender(&self) -> SlotSender<'_, T> {
        SlotSender { slot: self }
    }

    /// Get a receiver handle for this slot.
    ///
    /// Only one receiver should drain the slot; multiple receivers would
    /// compete for the pending value.
    pub const fn receiver(&self) -> SlotReceiver<'_, T> {
        SlotReceiver { slot: self }
    }

    /// Publish a value, replacing any value not yet taken.
    pub fn publish(&self, value: T) {
        critical_section::with(|cs| {
            self.inner.borrow(cs).set(Some(value));
        });
    }

    /// Take the pending value, leaving the slot empty.
    ///
    /// Returns `None` if nothing has been published since the last take.
    pub fn take(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).take())
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for a [`Slot`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct SlotSender<'a, T> {
    slot: &'a Slot<T>,
}

impl<T> SlotSender<'_, T> {
    /// Publish a value, replacing any value not yet taken.
    pub fn publish(&self, value: T) {
        self.slot.publish(value);
    }
}

/// A receiver handle for a [`Slot`].
///
/// This is a lightweight reference that can be cloned and passed around.
#[derive(Clone, Copy)]
pub struct SlotReceiver<'a, T> {
    slot: &'a Slot<T>,
}

impl<T> SlotReceiver<'_, T> {
    /// Take the pending value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.slot.take()
    }
}
