//! Concurrency test for the published reading: a reader racing the
//! sampling writer must never observe a triple mixed from two publishes.

use std::sync::Arc;
use std::thread;

use tiltled::app::state::{SharedTilt, TiltReading};

#[test]
fn readers_never_observe_a_torn_triple() {
    let shared = Arc::new(SharedTilt::new());

    // Writer publishes only triples with x == y == z.
    let writer = {
        let shared = shared.clone();
        thread::spawn(move || {
            for _ in 0..200 {
                for v in 0i8..=100 {
                    shared.publish_and(TiltReading { x: v, y: v, z: v }, || {});
                }
            }
        })
    };

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..50_000 {
                    let r = shared.read();
                    assert!(
                        r.x == r.y && r.y == r.z,
                        "torn read: ({}, {}, {})",
                        r.x,
                        r.y,
                        r.z
                    );
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
}
