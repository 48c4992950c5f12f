use thiserror::Error;

/// Reasons a catalog cannot be used. All of these are fatal at startup.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch catalog: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Catalog does not match the property schema: {0}")]
    Schema(#[from] serde_json::Error),

    #[error("Record at position {index} has an empty {field}")]
    MissingIdentity { index: usize, field: &'static str },

    #[error("Duplicate property id: {0}")]
    DuplicateId(String),

    #[error("Duplicate property slug: {0}")]
    DuplicateSlug(String),

    #[error("Property {id}: invalid {field} ({reason})")]
    InvalidValue {
        id: String,
        field: &'static str,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
