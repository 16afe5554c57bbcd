//! Recipebook Application Orchestration Layer
//!
//! This crate contains business logic use cases and runtime orchestration.

pub mod deps;
pub mod usecases;

pub use deps::AppDeps;
pub use usecases::{WizardSession, WizardSessionError};
