pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod query;

pub use catalog::{Catalog, CatalogSource, HttpSource, JsonFileSource};
pub use error::CatalogError;
pub use models::{Locale, PropertyRecord};
pub use query::{query, FilterCriteria, SortKey};
