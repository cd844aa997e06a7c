//! GPIO / peripheral pin assignments for the TiltLED main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// LIS302DL accelerometer (SPI2, mode 3, 5 MHz)
// ---------------------------------------------------------------------------

/// SPI clock.
pub const ACCEL_SCLK_GPIO: i32 = 12;
/// SPI MOSI (controller out).
pub const ACCEL_MOSI_GPIO: i32 = 11;
/// SPI MISO (controller in).
pub const ACCEL_MISO_GPIO: i32 = 13;
/// Chip select, active low.
pub const ACCEL_CS_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Edge indicator LEDs (LEDC PWM, one channel per board edge)
// ---------------------------------------------------------------------------

/// Front edge LED — lit when the board pitches forward (y < 0).
pub const LED_FRONT_GPIO: i32 = 4;
/// Left edge LED — lit when the board rolls left (x < 0).
pub const LED_LEFT_GPIO: i32 = 5;
/// Back edge LED — lit when the board pitches backward (y >= 0).
pub const LED_BACK_GPIO: i32 = 6;
/// Right edge LED — lit when the board rolls right (x >= 0).
pub const LED_RIGHT_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the edge LEDs (1 kHz — flicker-free).
pub const LED_PWM_FREQ_HZ: u32 = 1_000;
/// Full-scale duty magnitude coming out of the control loop.
///
/// The filtered axis mean of four signed 8-bit samples is at most 128 in
/// magnitude, so the loop's duty command is 0 – 128 and is rescaled to the
/// 8-bit LEDC range by the LED driver.
pub const DUTY_FULL_SCALE: u16 = 128;
