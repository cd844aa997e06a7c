//! System configuration parameters
//!
//! All tunable parameters for the TiltLED firmware.  Values can be
//! overridden at build time or by a host-side provisioning tool; the
//! defaults reproduce the reference board behaviour.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Timing ---
    /// Accelerometer sampling period (milliseconds). The control loop runs
    /// on absolute deadlines spaced by this period.
    pub sample_period_ms: u32,
    /// Supervisor poll interval for the console worker (milliseconds).
    /// Independent of, and coarser than, the sampling period.
    pub shell_poll_interval_ms: u32,
    /// Console telemetry refresh period (milliseconds).
    pub console_refresh_ms: u32,

    // --- Task layout ---
    /// FreeRTOS priority for the sampling task. Higher than the default
    /// pthread priority so the deadline schedule preempts housekeeping work.
    pub control_task_priority: u8,
    /// FreeRTOS priority for the console worker.
    pub shell_task_priority: u8,
    /// Stack size for the sampling task (KiB).
    pub control_task_stack_kb: usize,
    /// Stack size for the console worker (KiB).
    pub shell_task_stack_kb: usize,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Timing
            sample_period_ms: 250,       // 4 Hz
            shell_poll_interval_ms: 500, // 2 Hz
            console_refresh_ms: 1000,    // 1 Hz

            // Task layout
            control_task_priority: 10,
            shell_task_priority: 5,
            control_task_stack_kb: 8,
            shell_task_stack_kb: 12,
        }
    }
}
