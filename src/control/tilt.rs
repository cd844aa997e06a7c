//! The fixed-period sampling loop.
//!
//! Every period (250 ms by default) the loop reads one accelerometer sample,
//! pushes it through the moving-average filter, then — inside a single
//! critical section — publishes the filtered reading and reprograms the four
//! edge-LED channels from the sign and magnitude of the filtered x/y axes.
//!
//! Scheduling is by **absolute deadline**: each wake target is the previous
//! target plus the period, anchored once at start.  Per-iteration processing
//! time therefore never accumulates drift; an isolated overrun is absorbed
//! (the wait returns immediately) without rescheduling from "now".

use std::thread;
use std::time::{Duration, Instant};

use log::{error, info};

use crate::app::ports::{AccelPort, LedChannel, PwmPort};
use crate::app::state::SharedTilt;
use crate::control::filter::TiltFilter;
use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Absolute-deadline timer
// ───────────────────────────────────────────────────────────────

/// Drift-free periodic timer.
///
/// The deadline sequence is fixed at construction: deadline *i* is
/// `start + i * period`, regardless of how long each iteration's work took
/// or how late a wait returned.
pub struct CycleTimer {
    period: Duration,
    next: Instant,
}

impl CycleTimer {
    /// Anchor the schedule at the current instant.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// The deadline the next [`wait`](Self::wait) will sleep toward.
    pub fn next_deadline(&self) -> Instant {
        self.next + self.period
    }

    /// Advance to the next deadline and return it without sleeping.
    ///
    /// Exposed separately from [`wait`](Self::wait) so the schedule
    /// arithmetic is testable without real time passing.
    pub fn advance(&mut self) -> Instant {
        self.next += self.period;
        self.next
    }

    /// Suspend the calling thread until the next absolute deadline.
    ///
    /// If the deadline has already passed (overrun), returns immediately;
    /// the following deadline is still computed from the original schedule.
    pub fn wait(&mut self) {
        let deadline = self.advance();
        let now = Instant::now();
        if let Some(remaining) = deadline.checked_duration_since(now).filter(|d| !d.is_zero()) {
            thread::sleep(remaining);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Duty mapping
// ───────────────────────────────────────────────────────────────

/// Split a filtered axis value into its complementary channel pair's duties:
/// `(negative-side duty, positive-side duty)`.
///
/// Exactly one side carries the magnitude; the other is forced to zero.
/// Zero takes the non-negative branch, so a level board drives both sides
/// at zero through the positive channel's branch.
pub fn duty_split(value: i8) -> (u8, u8) {
    let v = i16::from(value);
    if v < 0 {
        ((-v) as u8, 0)
    } else {
        (0, v as u8)
    }
}

/// Reprogram all four channels from a filtered reading.
///
/// Must run inside the publication critical section so the LED state and the
/// shared reading always belong to the same iteration.
fn apply_duties(pwm: &mut impl PwmPort, x: i8, y: i8) {
    let (front, back) = duty_split(y);
    pwm.set_duty(LedChannel::Front, front);
    pwm.set_duty(LedChannel::Back, back);

    let (left, right) = duty_split(x);
    pwm.set_duty(LedChannel::Left, left);
    pwm.set_duty(LedChannel::Right, right);
}

// ───────────────────────────────────────────────────────────────
// The loop itself
// ───────────────────────────────────────────────────────────────

/// Owns the filter, the shared-state handle, and the deadline timer.
///
/// Hardware is passed per call (a single adapter satisfies both ports),
/// mirroring the port-injection style used across the firmware.
pub struct TiltLoop {
    filter: TiltFilter,
    shared: std::sync::Arc<SharedTilt>,
    timer: CycleTimer,
}

impl TiltLoop {
    pub fn new(shared: std::sync::Arc<SharedTilt>, period: Duration) -> Self {
        Self {
            filter: TiltFilter::new(),
            shared,
            timer: CycleTimer::new(period),
        }
    }

    /// One iteration: sample → filter → { publish + PWM } atomically.
    ///
    /// Does not sleep; [`run`](Self::run) handles the cadence.
    pub fn step(&mut self, hw: &mut (impl AccelPort + PwmPort)) -> Result<(), SensorError> {
        let sample = hw.read_sample()?;
        let reading = self.filter.push(sample);

        // Single critical section: the published triple and the four duty
        // writes are one atomic unit per iteration.
        self.shared.publish_and(reading, || {
            apply_duties(hw, reading.x, reading.y);
        });
        Ok(())
    }

    /// Run forever at the configured cadence.
    ///
    /// Returns only on a sampling failure, which is fatal: skipping a beat
    /// silently would desynchronise the published state from the schedule.
    /// All four channels are blanked on the way out so a dead loop never
    /// leaves stale tilt indication lit.
    pub fn run(mut self, hw: &mut (impl AccelPort + PwmPort)) -> Result<(), SensorError> {
        info!(
            "tilt loop running ({} ms period)",
            self.timer.period().as_millis()
        );
        loop {
            if let Err(e) = self.step(hw) {
                error!("accelerometer read failed ({e}) — stopping tilt loop");
                hw.all_off();
                return Err(e);
            }
            self.timer.wait();
        }
    }
}
