//! Process bootstrap: logging, configuration and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use wiring::{wire_dependencies, WiringError};
