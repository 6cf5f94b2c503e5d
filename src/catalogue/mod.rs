//! Catalogue operations.
//!
//! Each operation is one unit of work against the store handle it is given.

mod error;
pub mod forms;
pub mod genres;
pub mod movies;
pub mod people;
pub mod reconcile;

pub use error::{CatalogueError, CatalogueResult};
