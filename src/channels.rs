//! Single-slot reading handoff between the two tasks.
//!
//! Built on an `embassy-sync` [`Signal`]: a one-element cell where every
//! write replaces whatever is there and a waiter is woken on each write.
//! The producer never blocks; the consumer sleeps until a reading exists.
//!
//! ```text
//! ┌──────────────────┐  publish()   ┌──────┐   recv()    ┌────────────────────┐
//! │ Acquisition task │─────────────▶│ slot │────────────▶│ Presentation task  │
//! │ (every 2 s)      │  overwrite   └──────┘  take+clear │ (blocks, no poll)  │
//! └──────────────────┘                                   └────────────────────┘
//! ```
//!
//! Unread readings are overwritten; only the newest sample matters.

use std::sync::Arc;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use crate::app::reading::Reading;

type Slot = Signal<CriticalSectionRawMutex, Reading>;

/// Create a connected sender/receiver pair over a fresh, empty slot.
///
/// Neither half is `Clone`, so the slot has exactly one writer and one reader.
pub fn reading_channel() -> (ReadingSender, ReadingReceiver) {
    let slot = Arc::new(Slot::new());
    (
        ReadingSender { slot: slot.clone() },
        ReadingReceiver { slot },
    )
}

/// Write half, owned by the acquisition task.
pub struct ReadingSender {
    slot: Arc<Slot>,
}

impl ReadingSender {
    /// Overwrite the slot with `reading`. Never blocks, never fails; any
    /// unread value is discarded.
    pub fn publish(&self, reading: Reading) {
        self.slot.signal(reading);
    }
}

/// Read half, owned by the presentation task.
pub struct ReadingReceiver {
    slot: Arc<Slot>,
}

impl ReadingReceiver {
    /// Park the calling thread until a reading is available, then take it.
    pub fn recv(&self) -> Reading {
        futures_lite::future::block_on(self.slot.wait())
    }

    /// Take the reading if one is waiting, without blocking.
    pub fn try_recv(&self) -> Option<Reading> {
        self.slot.try_take()
    }
}
