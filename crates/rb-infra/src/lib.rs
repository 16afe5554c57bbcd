pub mod config;
pub mod document_store;
pub mod fs;
pub mod time;

pub use config::load_config;
pub use document_store::{FileDocumentStore, InMemoryDocumentStore};
pub use time::SystemClock;
