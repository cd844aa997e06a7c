//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  All tests run on the host (x86_64) with no
//! real hardware required.

// Links the host critical-section implementation into the test binary.
use critical_section as _;

mod mock_hw;
mod state_tests;
mod supervisor_tests;
mod tilt_loop_tests;
