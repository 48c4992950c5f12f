pub mod file;
pub mod http;
pub mod snapshot;
pub mod traits;

pub use file::JsonFileSource;
pub use http::HttpSource;
pub use snapshot::{alternate_paths, detail_path, Catalog, HOME_FEATURED_LIMIT};
pub use traits::CatalogSource;
