//! Console adapter — USB serial link readiness plus the console worker.
//!
//! `UsbLink` answers "is a host attached right now". The worker body
//! `run_console` periodically prints the published tilt reading for as
//! long as the link stays up, then returns so the supervisor can reclaim
//! its thread.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: queries the USB-Serial-JTAG peripheral's connection state.
//! On host/test: reads a static `AtomicBool` for injection.

use std::sync::Arc;
use std::time::Duration;

use log::info;

use crate::app::ports::LinkPort;
use crate::app::state::SharedTilt;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_LINK_READY: AtomicBool = AtomicBool::new(false);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_link_ready(ready: bool) {
    SIM_LINK_READY.store(ready, Ordering::Relaxed);
}

/// USB serial console link.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsbLink;

impl UsbLink {
    pub fn new() -> Self {
        Self
    }
}

impl LinkPort for UsbLink {
    #[cfg(target_os = "espidf")]
    fn is_ready(&self) -> bool {
        // SAFETY: connection-state query on the always-present
        // USB-Serial-JTAG peripheral; no prior configuration required.
        unsafe { esp_idf_svc::sys::usb_serial_jtag_is_connected() }
    }

    #[cfg(not(target_os = "espidf"))]
    fn is_ready(&self) -> bool {
        SIM_LINK_READY.load(Ordering::Relaxed)
    }
}

/// Console worker body.
///
/// Prints the current filtered reading at `refresh` intervals while the
/// link reports ready. Returns once the link drops; the supervisor joins
/// the thread and respawns a fresh worker on the next attach.
pub fn run_console(shared: Arc<SharedTilt>, link: impl LinkPort, refresh: Duration) {
    info!("console worker started");
    while link.is_ready() {
        let r = shared.read();
        info!("tilt: x={:4} y={:4} z={:4}", r.x, r.y, r.z);
        std::thread::sleep(refresh);
    }
    info!("console link down, worker exiting");
}
