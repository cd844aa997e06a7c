//! Adapters binding the domain ports to concrete hardware and transports.

pub mod console;
pub mod hardware;
