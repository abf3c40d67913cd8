pub mod types;

pub use types::{DesirabilityLevel, Dataset, PlateRange, PlateStatus, RangeRecord};
