//! The sampling/filtering control core.

pub mod filter;
pub mod tilt;
