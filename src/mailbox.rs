//! Single-slot mailbox shared between an interrupt handler and the main loop.
//!
//! Holds at most one value. Posting overwrites whatever is pending (last
//! wins), taking resets the slot to its default. Both are interrupt safe via
//! critical sections.

use core::cell::Cell;

use critical_section::Mutex;

/// A single-slot, last-wins mailbox.
///
/// The default value of `T` means "empty".
pub struct Mailbox<T: Copy> {
    slot: Mutex<Cell<T>>,
    empty: T,
}

impl<T: Copy> Mailbox<T> {
    /// Create a mailbox whose empty state is `empty`.
    pub const fn new(empty: T) -> Self {
        Self {
            slot: Mutex::new(Cell::new(empty)),
            empty,
        }
    }

    /// Store a value, replacing any pending one.
    pub fn post(&self, value: T) {
        critical_section::with(|cs| self.slot.borrow(cs).set(value));
    }

    /// Read the pending value and reset the slot to empty.
    pub fn take(&self) -> T {
        critical_section::with(|cs| self.slot.borrow(cs).replace(self.empty))
    }

    /// Read the pending value without consuming it.
    pub fn peek(&self) -> T {
        critical_section::with(|cs| self.slot.borrow(cs).get())
    }
}

impl<T: Copy + Default> Default for Mailbox<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
