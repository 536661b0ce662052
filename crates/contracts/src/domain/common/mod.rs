//! Common types and traits for all catalog collections

pub mod catalog_record;
pub mod category;

// Re-exports
pub use catalog_record::{CatalogRecord, Votable};
pub use category::Category;
