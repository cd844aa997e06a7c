//! Port traits — the boundary between the control loop and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ TiltLoop (domain)
//! ```
//!
//! Driven adapters (the accelerometer, the LED PWM channels, the console
//! transport) implement these traits.  The [`TiltLoop`](crate::control::tilt::TiltLoop)
//! and [`ConsoleSupervisor`](crate::supervisor::ConsoleSupervisor) consume
//! them via generics, so the domain core never touches hardware directly.

use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Raw sample (produced once per loop iteration)
// ───────────────────────────────────────────────────────────────

/// One instantaneous 3-axis accelerometer reading.
///
/// Values are the sensor's native signed 8-bit output, roughly ±2 g full
/// scale.  A sample is consumed immediately by the filter and never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisSample {
    pub x: i8,
    pub y: i8,
    pub z: i8,
}

// ───────────────────────────────────────────────────────────────
// Accelerometer port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the control loop calls this once per iteration.
pub trait AccelPort {
    /// Perform one bus transaction and return the instantaneous reading.
    ///
    /// An error is fatal to the caller's schedule — there is no retry.
    fn read_sample(&mut self) -> Result<AxisSample, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// LED PWM port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// The four edge-LED channels, in the same index order as the PWM hardware.
///
/// The channels form two complementary pairs: `Front`/`Back` driven by the
/// filtered y axis, `Left`/`Right` by the filtered x axis.  For a given axis
/// sign, exactly one channel of its pair is driven and the other is forced
/// to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LedChannel {
    /// Pitch forward (y < 0).
    Front = 0,
    /// Roll left (x < 0).
    Left = 1,
    /// Pitch backward (y >= 0).
    Back = 2,
    /// Roll right (x >= 0).
    Right = 3,
}

impl LedChannel {
    /// All four channels in hardware index order.
    pub const ALL: [Self; 4] = [Self::Front, Self::Left, Self::Back, Self::Right];

    /// Channel index as used by the PWM hardware (0 – 3).
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Write-side port: the control loop commands duty magnitudes through this.
///
/// Infallible: once a channel is configured the duty register write cannot
/// fail, matching the underlying LEDC semantics.
pub trait PwmPort {
    /// Drive `ch` at `duty` (0 = off, up to
    /// [`DUTY_FULL_SCALE`](crate::pins::DUTY_FULL_SCALE) = fully lit).
    fn set_duty(&mut self, ch: LedChannel, duty: u8);

    /// Blank every channel. The control loop calls this on its fatal exit
    /// so a dead sampling task never leaves stale tilt indication lit.
    fn all_off(&mut self) {
        for ch in LedChannel::ALL {
            self.set_duty(ch, 0);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Console transport port (driven adapter: host link → supervisor)
// ───────────────────────────────────────────────────────────────

/// Readiness probe for the console transport.
///
/// Becomes ready asynchronously when a host attaches to the USB link; the
/// supervisor spawns the console worker only while this reports `true`, and
/// the worker exits on its own once it reports `false`.
pub trait LinkPort {
    fn is_ready(&self) -> bool;
}

impl<T: LinkPort + ?Sized> LinkPort for &T {
    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}
