//! Domain-facing port traits and the published shared state.

pub mod ports;
pub mod state;
