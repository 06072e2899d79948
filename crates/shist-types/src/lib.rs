//! Core data model shared by the shist readers, engine and CLI.

mod entry;

pub use entry::Entry;
