//! Core-pinned thread spawning for ESP32-S3 dual-core.
//!
//! ESP-IDF implements `std::thread` via pthreads, which are thin wrappers
//! around FreeRTOS tasks. `esp_pthread_set_cfg()` sets thread-local
//! configuration applying to the *next* `pthread_create()` from the calling
//! thread, so the config→spawn pair must not be interleaved with other
//! thread creation on the same thread. On non-ESP targets only the stack
//! size is honoured.

use std::thread::JoinHandle;

/// CPU core identifiers for the ESP32-S3 Xtensa LX7 dual-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 0 (PRO_CPU) — USB/console plumbing.
    Pro = 0,
    /// Core 1 (APP_CPU) — the deadline-scheduled sampling loop.
    App = 1,
}

/// Placement and sizing for one spawned task.
///
/// `name` must be null-terminated (e.g. `"tilt-ctrl\0"`) since it is handed
/// to FreeRTOS as a C string.
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    pub core: Core,
    pub priority: u8,
    pub stack_kb: usize,
    pub name: &'static str,
}

impl TaskSpec {
    fn display_name(&self) -> &'static str {
        self.name.trim_end_matches('\0')
    }
}

/// Spawn a thread per `spec`: pinned to the given core with explicit
/// FreeRTOS priority and stack size.
#[cfg(target_os = "espidf")]
pub fn spawn_pinned(spec: TaskSpec, f: impl FnOnce() + Send + 'static) -> JoinHandle<()> {
    unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = spec.core as i32;
        cfg.prio = spec.priority as i32;
        cfg.stack_size = (spec.stack_kb * 1024) as i32;
        cfg.thread_name = spec.name.as_ptr() as *const _;
        let ret = esp_idf_sys::esp_pthread_set_cfg(&cfg);
        assert!(
            ret == esp_idf_sys::ESP_OK as i32,
            "esp_pthread_set_cfg failed: {ret}"
        );
    }

    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        spec.display_name(),
        spec.core,
        spec.priority,
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(spec.display_name().into())
        .spawn(f)
        .expect("spawn_pinned: thread creation failed")
}

/// Simulation fallback — ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_pinned(spec: TaskSpec, f: impl FnOnce() + Send + 'static) -> JoinHandle<()> {
    log::info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        spec.display_name(),
        spec.stack_kb
    );

    std::thread::Builder::new()
        .name(spec.display_name().into())
        .stack_size(spec.stack_kb * 1024)
        .spawn(f)
        .expect("spawn_pinned(sim): thread creation failed")
}
