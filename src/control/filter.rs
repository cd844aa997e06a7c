//! Moving-average filter over the accelerometer history.
//!
//! Each axis keeps the four most recent samples in a fixed-capacity ring and
//! reports their truncating integer mean.  Four samples at the 4 Hz sampling
//! rate gives a one-second smoothing window — enough to suppress hand tremor
//! without making the LEDs feel laggy.

use heapless::HistoryBuffer;

use crate::app::ports::AxisSample;
use crate::app::state::TiltReading;

/// Samples retained per axis.
pub const FILTER_DEPTH: usize = 4;

/// Fixed-capacity history of one axis, newest-evicts-oldest.
#[derive(Default)]
pub struct AxisHistory {
    ring: HistoryBuffer<i8, FILTER_DEPTH>,
}

impl AxisHistory {
    pub fn new() -> Self {
        Self {
            ring: HistoryBuffer::new(),
        }
    }

    /// Record a sample, evicting the oldest once the ring is full.
    pub fn push(&mut self, sample: i8) {
        self.ring.write(sample);
    }

    /// Truncating integer mean of the history.
    ///
    /// The sum is always divided by the full capacity, so during the warm-up
    /// window the missing slots count as zero.  This reproduces the
    /// zero-initialised buffers of the reference board and biases the first
    /// three readings toward zero; callers that need unbiased output should
    /// discard the first [`FILTER_DEPTH`] readings.
    pub fn mean(&self) -> i8 {
        let sum: i32 = self.ring.oldest_ordered().map(|&v| i32::from(v)).sum();
        (sum / FILTER_DEPTH as i32) as i8
    }

    /// Number of samples recorded so far, capped at [`FILTER_DEPTH`].
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.len() == 0
    }

    /// Retained samples, oldest first.
    pub fn oldest_first(&self) -> impl Iterator<Item = i8> + '_ {
        self.ring.oldest_ordered().copied()
    }
}

/// Three per-axis histories, pushed together once per loop iteration.
#[derive(Default)]
pub struct TiltFilter {
    x: AxisHistory,
    y: AxisHistory,
    z: AxisHistory,
}

impl TiltFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one sample on every axis and return the new filtered means.
    pub fn push(&mut self, sample: AxisSample) -> TiltReading {
        self.x.push(sample.x);
        self.y.push(sample.y);
        self.z.push(sample.z);
        TiltReading {
            x: self.x.mean(),
            y: self.y.mean(),
            z: self.z.mean(),
        }
    }
}
