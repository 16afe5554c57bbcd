//! Document store adapters.

pub mod file;
pub mod memory;

pub use file::FileDocumentStore;
pub use memory::InMemoryDocumentStore;

use rb_core::ports::document_store::name_matches;
use rb_core::ports::DocumentFields;

/// Sorted, de-duplicated names of the documents matching `partial`.
fn matching_names<'a>(documents: impl Iterator<Item = &'a DocumentFields>, partial: &str) -> Vec<String> {
    let mut names: Vec<String> = documents
        .filter_map(|fields| name_matches(fields, partial))
        .collect();
    names.sort();
    names.dedup();
    names
}
