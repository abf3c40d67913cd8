//! Error types for range expansion.

use thiserror::Error;

/// Result type for expansion operations.
pub type ExpandResult<T> = Result<T, ExpandError>;

/// A range record whose boundaries cannot describe a block of plates.
///
/// Classification and keyword matching never fail, so this is the only
/// error the core produces.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// Start and end boundaries differ in length.
    #[error("invalid range {start} ~ {end}: boundaries differ in length")]
    LengthMismatch {
        /// Start boundary.
        start: String,
        /// End boundary.
        end: String,
    },

    /// The varying segment is not a decimal number.
    #[error("invalid range: varying segment '{segment}' of '{boundary}' is not numeric")]
    NonDigit {
        /// Boundary the segment was read from.
        boundary: String,
        /// The offending segment.
        segment: String,
    },

    /// End boundary sorts before the start boundary.
    #[error("invalid range {start} ~ {end}: end is before start")]
    Descending {
        /// Start boundary.
        start: String,
        /// End boundary.
        end: String,
    },

    /// Single-prefix boundary has no two-character suffix to enumerate.
    #[error("invalid range '{start}': too short for a two-digit suffix")]
    TooShort {
        /// The boundary.
        start: String,
    },

    /// The range denotes more plates than can reasonably be listed.
    #[error("invalid range {start} ~ {end}: spans more than {limit} plates")]
    TooWide {
        /// Start boundary.
        start: String,
        /// End boundary.
        end: String,
        /// Maximum number of plates a single range may expand to.
        limit: u64,
    },
}
