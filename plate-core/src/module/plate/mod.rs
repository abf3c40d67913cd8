///! Plate number domain logic
///!
///! Expands compact range notation into concrete plate numbers and
///! grades each plate by how repetitive or sequential its digits are.

pub mod classify;
pub mod expand;
pub mod matcher;

pub use classify::classify_level;
pub use expand::{bounds_of, expand, MAX_RANGE_SIZE};
pub use matcher::{contains_digit_four, is_numeric_only, matches_keyword, KeywordMatcher};
