//! Published attitude state shared across tasks.
//!
//! [`SharedTilt`] holds the last filtered reading behind a blocking
//! critical-section mutex.  The sampling task is the single writer; the
//! console worker (and any future telemetry consumer) reads it.  The three
//! axis values are replaced as one unit, and the same critical section also
//! covers the iteration's four PWM writes, so no reader ever observes a
//! triple — or an LED state — mixed from two iterations.
//!
//! On ESP-IDF the critical section is the FreeRTOS one; on the host,
//! `critical-section/std` provides the implementation for tests.

use core::cell::Cell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

/// Filtered attitude: the truncating 4-sample mean of each axis.
///
/// Derived once per loop iteration and replaced, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TiltReading {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

impl TiltReading {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };
}

/// The last-known filtered reading, guarded by one mutual-exclusion domain.
pub struct SharedTilt {
    inner: Mutex<CriticalSectionRawMutex, Cell<TiltReading>>,
}

impl SharedTilt {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(Cell::new(TiltReading::ZERO)),
        }
    }

    /// Latest published reading.
    pub fn read(&self) -> TiltReading {
        self.inner.lock(Cell::get)
    }

    /// Replace the published reading and run `f` inside the same critical
    /// section.
    ///
    /// The control loop passes its PWM writes as `f`, so the state update
    /// and the actuator commands of one iteration are a single atomic unit.
    /// `f` must not block — the section is held for a handful of register
    /// writes only.
    pub fn publish_and<R>(&self, reading: TiltReading, f: impl FnOnce() -> R) -> R {
        self.inner.lock(|cell| {
            cell.set(reading);
            f()
        })
    }
}

impl Default for SharedTilt {
    fn default() -> Self {
        Self::new()
    }
}
