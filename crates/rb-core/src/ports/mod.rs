//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.

mod clock;
pub mod document_store;
pub mod errors;
pub mod navigation;
pub mod wizard_event;

pub use clock::*;
pub use document_store::{DocumentFields, DocumentStorePort};
pub use errors::DocumentStoreError;
pub use navigation::NavigationPort;
pub use wizard_event::WizardEventPort;
