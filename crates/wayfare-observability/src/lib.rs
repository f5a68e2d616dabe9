//! Tracing instrumentation for Wayfare.

pub mod spans;
pub mod tracing_setup;

pub use tracing_setup::init_tracing;
