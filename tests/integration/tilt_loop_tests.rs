//! End-to-end control loop tests: scripted samples in, published readings
//! and duty commands out.

use std::sync::Arc;
use std::time::Duration;

use tiltled::app::ports::LedChannel;
use tiltled::app::state::{SharedTilt, TiltReading};
use tiltled::control::tilt::{TiltLoop, duty_split};
use tiltled::error::SensorError;

use crate::mock_hw::MockTiltHw;

const PERIOD: Duration = Duration::from_millis(250);

#[test]
fn reference_scenario_publishes_mean_and_duties() {
    let shared = Arc::new(SharedTilt::new());
    let mut hw = MockTiltHw::scripted(&[
        (-50, 10, 0),
        (-60, 20, 0),
        (-40, 30, 0),
        (-70, 0, 0),
    ]);
    let mut tilt = TiltLoop::new(shared.clone(), PERIOD);

    for _ in 0..4 {
        tilt.step(&mut hw).unwrap();
    }

    assert_eq!(shared.read(), TiltReading { x: -55, y: 15, z: 0 });

    // x = -55: rolled left. y = 15: pitched back.
    assert_eq!(hw.duty(LedChannel::Left), 55);
    assert_eq!(hw.duty(LedChannel::Right), 0);
    assert_eq!(hw.duty(LedChannel::Back), 15);
    assert_eq!(hw.duty(LedChannel::Front), 0);
}

#[test]
fn first_iteration_already_publishes_a_warmup_mean() {
    let shared = Arc::new(SharedTilt::new());
    let mut hw = MockTiltHw::scripted(&[(-40, 40, 0)]);
    let mut tilt = TiltLoop::new(shared.clone(), PERIOD);

    tilt.step(&mut hw).unwrap();

    // One sample over a zero-filled window of four.
    assert_eq!(shared.read(), TiltReading { x: -10, y: 10, z: 0 });
    assert_eq!(hw.duty(LedChannel::Left), 10);
    assert_eq!(hw.duty(LedChannel::Back), 10);
    assert_eq!(hw.duty(LedChannel::Front), 0);
    assert_eq!(hw.duty(LedChannel::Right), 0);
}

#[test]
fn every_iteration_reprograms_all_four_channels() {
    let shared = Arc::new(SharedTilt::new());
    let mut hw = MockTiltHw::scripted(&[(100, -100, 0), (100, -100, 0)]);
    let mut tilt = TiltLoop::new(shared.clone(), PERIOD);

    tilt.step(&mut hw).unwrap();
    assert_eq!(hw.calls.len(), 4);
    tilt.step(&mut hw).unwrap();
    assert_eq!(hw.calls.len(), 8);
}

#[test]
fn duties_always_match_the_published_reading() {
    let shared = Arc::new(SharedTilt::new());
    let script: &[(i8, i8, i8)] = &[
        (127, 127, 127),
        (-128, -128, -128),
        (0, 0, 0),
        (33, -77, 5),
        (-1, 1, 0),
    ];
    let mut hw = MockTiltHw::scripted(script);
    let mut tilt = TiltLoop::new(shared.clone(), PERIOD);

    for _ in 0..script.len() {
        tilt.step(&mut hw).unwrap();
        let r = shared.read();

        let (front, back) = duty_split(r.y);
        let (left, right) = duty_split(r.x);
        assert_eq!(hw.duty(LedChannel::Front), front);
        assert_eq!(hw.duty(LedChannel::Back), back);
        assert_eq!(hw.duty(LedChannel::Left), left);
        assert_eq!(hw.duty(LedChannel::Right), right);
    }
}

#[test]
fn opposing_channels_are_never_lit_together() {
    let shared = Arc::new(SharedTilt::new());
    let script: &[(i8, i8, i8)] = &[
        (60, -60, 0),
        (-60, 60, 0),
        (127, -128, 0),
        (0, 0, 0),
    ];
    let mut hw = MockTiltHw::scripted(script);
    let mut tilt = TiltLoop::new(shared.clone(), PERIOD);

    for _ in 0..script.len() {
        tilt.step(&mut hw).unwrap();
        assert!(hw.duty(LedChannel::Front) == 0 || hw.duty(LedChannel::Back) == 0);
        assert!(hw.duty(LedChannel::Left) == 0 || hw.duty(LedChannel::Right) == 0);
    }
}

#[test]
fn failing_step_leaves_state_and_outputs_untouched() {
    let shared = Arc::new(SharedTilt::new());
    let mut hw = MockTiltHw::scripted(&[(-50, 10, 0)]);
    let mut tilt = TiltLoop::new(shared.clone(), PERIOD);

    tilt.step(&mut hw).unwrap();
    let published = shared.read();
    let duties = hw.duties;

    // Script exhausted: the next step fails before any PWM write.
    assert_eq!(tilt.step(&mut hw), Err(SensorError::Exhausted));
    assert_eq!(shared.read(), published);
    assert_eq!(hw.duties, duties);
}

#[test]
fn fatal_exit_blanks_every_channel() {
    let shared = Arc::new(SharedTilt::new());
    let mut hw = MockTiltHw::scripted(&[(-50, 10, 0)]);
    // Short period so the run loop reaches the failing read quickly.
    let tilt = TiltLoop::new(shared.clone(), Duration::from_millis(1));

    assert_eq!(tilt.run(&mut hw), Err(SensorError::Exhausted));

    // The last published reading survives, but no LED stays lit.
    assert_eq!(shared.read(), TiltReading { x: -12, y: 2, z: 0 });
    assert_eq!(hw.duties, [0; 4]);
}
