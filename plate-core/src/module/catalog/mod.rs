///! Plate catalog
///!
///! Expands every dataset record, grades each plate, and offers the
///! filtered and ordered views the browser renders.

pub mod builder;
pub mod filter;
pub mod types;

pub use builder::build_catalog;
pub use filter::{CatalogFilter, SortOrder};
pub use types::{Catalog, CatalogEntry, SkippedRecord};
