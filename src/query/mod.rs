pub mod criteria;
pub mod engine;

pub use criteria::{FilterCriteria, SortKey};
pub use engine::query;
