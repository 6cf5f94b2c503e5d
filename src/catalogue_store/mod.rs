mod models;
mod schema;
mod store;
mod trait_def;
pub mod validation;

pub use models::*;
pub use schema::CATALOGUE_VERSIONED_SCHEMAS;
pub use store::{ConcurrencyConflict, SqliteCatalogueStore};
pub use trait_def::CatalogueStore;
