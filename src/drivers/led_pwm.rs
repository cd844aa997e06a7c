//! Edge indicator LED driver (four LEDC PWM channels).
//!
//! One channel per board edge. The control loop commands duties on the
//! 0–128 full scale; this driver rescales them to the 8-bit LEDC range.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives real LEDC channels via hw_init helpers.
//! On host/test: tracks duties in-memory only.

use crate::app::ports::LedChannel;
use crate::drivers::hw_init;
use crate::pins;

pub struct LedPwm {
    duties: [u8; 4],
}

impl LedPwm {
    pub fn new() -> Self {
        Self { duties: [0; 4] }
    }

    /// Set one channel's duty on the control loop's 0–128 scale.
    ///
    /// Values above full scale are clamped.
    pub fn set(&mut self, ch: LedChannel, duty: u8) {
        let duty = duty.min(pins::DUTY_FULL_SCALE as u8);
        self.set_duty_hw(ch, duty);
        self.duties[ch.index()] = duty;
    }

    pub fn all_off(&mut self) {
        for ch in LedChannel::ALL {
            self.set(ch, 0);
        }
    }

    fn set_duty_hw(&self, ch: LedChannel, duty: u8) {
        let duty_8bit = ((duty as u16) * 255 / pins::DUTY_FULL_SCALE) as u8;
        hw_init::ledc_set(ch.index() as u32, duty_8bit);
    }

    /// Last commanded duty for a channel (0–128 scale).
    pub fn duty(&self, ch: LedChannel) -> u8 {
        self.duties[ch.index()]
    }
}

impl Default for LedPwm {
    fn default() -> Self {
        Self::new()
    }
}
