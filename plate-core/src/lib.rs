pub mod error;
pub mod module;

pub use error::{ExpandError, ExpandResult};
pub use module::catalog::{build_catalog, Catalog, CatalogEntry, CatalogFilter};
pub use module::plate::{classify_level, expand, matches_keyword};
