//! Error types for the accelerometer sampling path.
//!
//! The control loop is the only fallible domain path: PWM duty writes are
//! infallible once configured, and peripheral bring-up reports its own
//! local error from `drivers::hw_init`. `SensorError` is `Copy` so it can
//! be cheaply passed out of the sampling task without allocation.

use core::fmt;

/// Failures on the accelerometer's SPI path.
///
/// A sampling failure is fatal to the control loop: silently skipping a beat
/// would leave the published state out of step with the deadline schedule, so
/// the loop surfaces the error and stops instead of retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// An SPI transaction failed.
    BusFault,
    /// WHO_AM_I returned an unexpected identity byte.
    WrongChipId(u8),
    /// The scripted/simulated source ran out of samples (host targets only).
    Exhausted,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusFault => write!(f, "SPI transaction failed"),
            Self::WrongChipId(id) => write!(f, "unexpected WHO_AM_I: 0x{id:02X}"),
            Self::Exhausted => write!(f, "sample source exhausted"),
        }
    }
}

impl std::error::Error for SensorError {}
