//! Movies Catalogue Server Library
//!
//! This library exposes the internal modules for testing and potential reuse.

pub mod catalogue;
pub mod catalogue_store;
pub mod config;
pub mod server;
pub mod sqlite_persistence;

// Re-export commonly used types for convenience
pub use catalogue_store::{CatalogueStore, SqliteCatalogueStore};
pub use server::{run_server, RequestsLoggingLevel};
