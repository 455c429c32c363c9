pub mod diff;
pub mod fetch;
pub mod store;
pub mod transform;

pub use diff::{CatalogDiff, diff};
pub use fetch::{CatalogClient, PageSource, fetch_all};
