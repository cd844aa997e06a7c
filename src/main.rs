//! TiltLED Firmware — Main Entry Point
//!
//! Hexagonal architecture across three tasks:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter            UsbLink                          │
//! │  (Accel + Pwm ports)        (Link port)                      │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ──────────────────      │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │  TiltLoop (core 1, high priority)                    │    │
//! │  │  sample → filter → { publish + PWM } every 250 ms    │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │  ConsoleSupervisor (main task) → console worker      │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use log::info;

use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use esp_idf_hal::spi::{SpiDeviceDriver, SpiDriver, SpiDriverConfig, config as spi_config};

use tiltled::adapters::console::{UsbLink, run_console};
use tiltled::adapters::hardware::HardwareAdapter;
use tiltled::app::state::SharedTilt;
use tiltled::config::SystemConfig;
use tiltled::control::tilt::TiltLoop;
use tiltled::drivers::led_pwm::LedPwm;
use tiltled::drivers::lis302dl::Lis302dl;
use tiltled::drivers::task_pin::{Core, TaskSpec, spawn_pinned};
use tiltled::drivers::hw_init;
use tiltled::supervisor::ConsoleSupervisor;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  TiltLED v{}                        ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }

    let config = SystemConfig::default();

    // ── 3. Accelerometer on SPI2 (mode 3, 5 MHz) ──────────────
    // Pin assignments mirror crate::pins.
    let peripherals = Peripherals::take()?;
    let bus = SpiDriver::new(
        peripherals.spi2,
        peripherals.pins.gpio12, // SCLK
        peripherals.pins.gpio11, // MOSI
        Some(peripherals.pins.gpio13), // MISO
        &SpiDriverConfig::new(),
    )?;
    let device = SpiDeviceDriver::new(
        bus,
        Some(peripherals.pins.gpio10), // CS
        &spi_config::Config::new()
            .baudrate(5.MHz().into())
            .data_mode(embedded_hal::spi::MODE_3),
    )?;

    let mut accel = Lis302dl::new(device);
    accel.init()?;
    info!("LIS302DL online");

    let mut hw = HardwareAdapter::new(accel, LedPwm::new());

    // ── 4. Shared state + control task ────────────────────────
    let shared = Arc::new(SharedTilt::new());

    let period = Duration::from_millis(u64::from(config.sample_period_ms));
    let loop_shared = shared.clone();
    let _control = spawn_pinned(
        TaskSpec {
            core: Core::App,
            priority: config.control_task_priority,
            stack_kb: config.control_task_stack_kb,
            name: "tilt-ctrl\0",
        },
        move || {
            let tilt = TiltLoop::new(loop_shared, period);
            // A sampling failure is already logged inside run(), which also
            // blanks all four channels before the task ends.
            let _ = tilt.run(&mut hw);
        },
    );

    // ── 5. Console supervisor on the main task ────────────────
    let refresh = Duration::from_millis(u64::from(config.console_refresh_ms));
    let shell_spec = TaskSpec {
        core: Core::Pro,
        priority: config.shell_task_priority,
        stack_kb: config.shell_task_stack_kb,
        name: "console\0",
    };
    let worker_shared = shared.clone();
    let spawn_shell = move || {
        let shared = worker_shared.clone();
        spawn_pinned(shell_spec, move || {
            run_console(shared, UsbLink::new(), refresh);
        })
    };

    info!("System ready.");
    let supervisor = ConsoleSupervisor::new(
        UsbLink::new(),
        spawn_shell,
        Duration::from_millis(u64::from(config.shell_poll_interval_ms)),
    );
    supervisor.run()
}
