//! Recipebook: recipe authoring wizard.
//!
//! Bootstrap and the terminal screen live here; domain, use cases and
//! adapters are the `rb-core`, `rb-app` and `rb-infra` crates.

pub mod bootstrap;
pub mod screen;
