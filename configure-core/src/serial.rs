//! Process-wide configure serials.
//!
//! Every configuration, whichever window it belongs to, takes its serial from the same counter,
//! so serials are strictly increasing in creation order across the whole process. The counter
//! can only move forward: there is no setter and no reset.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identifier tagging a configuration. The first serial ever handed out is `1`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Serial(u32);

impl Serial {
    /// Never issued; useful as "nothing issued yet".
    pub const ZERO: Serial = Serial(0);

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for Serial {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Serial> for u32 {
    fn from(serial: Serial) -> Self {
        serial.0
    }
}

impl fmt::Display for Serial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A forward-only counter. Only the negotiation thread writes to it; the atomic lets the static
/// live without a lock.
#[derive(Debug)]
pub struct SerialCounter {
    serial: AtomicU32,
}

impl SerialCounter {
    const fn new() -> Self {
        Self::starting_after(0)
    }

    const fn starting_after(last: u32) -> Self {
        Self {
            serial: AtomicU32::new(last),
        }
    }

    /// Returns the next serial.
    ///
    /// # Panics
    ///
    /// Panics once `u32::MAX` has been issued. Wrapping would make later serials compare older
    /// than the ones still pending.
    pub fn next_serial(&self) -> Serial {
        let last = self
            .serial
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| last.checked_add(1))
            .expect("configure serials exhausted");
        Serial(last + 1)
    }

    /// The most recently issued serial, or [`Serial::ZERO`] when none was issued yet.
    pub fn last_issued(&self) -> Serial {
        Serial(self.serial.load(Ordering::Acquire))
    }
}

/// The counter shared by every window and every kind of configuration.
pub static SERIAL_COUNTER: SerialCounter = SerialCounter::new();

/// Shorthand for `SERIAL_COUNTER.next_serial()`.
///
/// # Panics
///
/// Panics when the process has run out of serials.
pub fn next_serial() -> Serial {
    SERIAL_COUNTER.next_serial()
}

/// Shorthand for `SERIAL_COUNTER.last_issued()`.
pub fn last_issued() -> Serial {
    SERIAL_COUNTER.last_issued()
}
