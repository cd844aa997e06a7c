//! Mock hardware adapter for integration tests.
//!
//! Serves a scripted sample sequence through [`AccelPort`] and records
//! every PWM command so tests can assert on the full duty history without
//! touching real SPI/LEDC registers.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tiltled::app::ports::{AccelPort, AxisSample, LedChannel, LinkPort, PwmPort};
use tiltled::error::SensorError;

// ── PWM call record ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub struct DutyCall {
    pub ch: LedChannel,
    pub duty: u8,
}

// ── MockTiltHw ────────────────────────────────────────────────

pub struct MockTiltHw {
    samples: VecDeque<AxisSample>,
    pub duties: [u8; 4],
    pub calls: Vec<DutyCall>,
}

#[allow(dead_code)]
impl MockTiltHw {
    pub fn scripted(samples: &[(i8, i8, i8)]) -> Self {
        Self {
            samples: samples
                .iter()
                .map(|&(x, y, z)| AxisSample { x, y, z })
                .collect(),
            duties: [0; 4],
            calls: Vec::new(),
        }
    }

    pub fn duty(&self, ch: LedChannel) -> u8 {
        self.duties[ch.index()]
    }

    pub fn samples_left(&self) -> usize {
        self.samples.len()
    }
}

impl AccelPort for MockTiltHw {
    fn read_sample(&mut self) -> Result<AxisSample, SensorError> {
        self.samples.pop_front().ok_or(SensorError::Exhausted)
    }
}

impl PwmPort for MockTiltHw {
    fn set_duty(&mut self, ch: LedChannel, duty: u8) {
        self.duties[ch.index()] = duty;
        self.calls.push(DutyCall { ch, duty });
    }
}

// ── FlagLink ──────────────────────────────────────────────────

/// Console link whose readiness is flipped externally by the test.
#[derive(Clone)]
pub struct FlagLink(pub Arc<AtomicBool>);

#[allow(dead_code)]
impl FlagLink {
    pub fn new(ready: bool) -> Self {
        Self(Arc::new(AtomicBool::new(ready)))
    }

    pub fn set_ready(&self, ready: bool) {
        self.0.store(ready, Ordering::Relaxed);
    }
}

impl LinkPort for FlagLink {
    fn is_ready(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}
