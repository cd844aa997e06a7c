//! Hardware drivers: raw peripheral access and device protocols.

pub mod hw_init;
pub mod led_pwm;
pub mod lis302dl;
pub mod task_pin;
