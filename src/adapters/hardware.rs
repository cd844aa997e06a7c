//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the accelerometer driver and the LED PWM driver, exposing them
//! through [`AccelPort`] and [`PwmPort`]. This is the only module the
//! control loop touches hardware through; on non-espidf targets the
//! underlying drivers use cfg-gated simulation stubs.

use embedded_hal::spi::SpiDevice;

use crate::app::ports::{AccelPort, AxisSample, LedChannel, PwmPort};
use crate::drivers::led_pwm::LedPwm;
use crate::drivers::lis302dl::Lis302dl;
use crate::error::SensorError;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<SPI> {
    accel: Lis302dl<SPI>,
    leds: LedPwm,
}

impl<SPI: SpiDevice> HardwareAdapter<SPI> {
    /// Take ownership of an already-initialised accelerometer and the LED
    /// driver.
    pub fn new(accel: Lis302dl<SPI>, leds: LedPwm) -> Self {
        Self { accel, leds }
    }
}

// ── AccelPort implementation ──────────────────────────────────

impl<SPI: SpiDevice> AccelPort for HardwareAdapter<SPI> {
    fn read_sample(&mut self) -> Result<AxisSample, SensorError> {
        self.accel.read_axes()
    }
}

// ── PwmPort implementation ────────────────────────────────────

impl<SPI: SpiDevice> PwmPort for HardwareAdapter<SPI> {
    fn set_duty(&mut self, ch: LedChannel, duty: u8) {
        self.leds.set(ch, duty);
    }

    fn all_off(&mut self) {
        self.leds.all_off();
    }
}
