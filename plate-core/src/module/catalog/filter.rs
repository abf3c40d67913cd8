///! Catalog filter toggles

use plate_common::DesirabilityLevel;
use serde::{Deserialize, Serialize};

use crate::module::plate::matcher::{contains_digit_four, is_numeric_only, KeywordMatcher};

use super::types::CatalogEntry;

/// Filter toggles, all off by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    /// Search keyword, empty matches everything
    pub keyword: String,
    /// 仅数字: keep plates with five digits in a row
    pub numeric_only: bool,
    /// 不含4: drop plates containing the digit 4
    pub exclude_four: bool,
    /// 豹子号: keep triple level and above
    pub triple_or_better: bool,
    /// 递增减: keep sequential plates only
    pub incremental_only: bool,
}

impl CatalogFilter {
    pub fn with_keyword(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            ..Self::default()
        }
    }

    /// Check a single entry. Prefer [`Catalog::filtered`](super::Catalog::filtered)
    /// for whole lists, which compiles the keyword once.
    pub fn accepts(&self, entry: &CatalogEntry<'_>) -> bool {
        self.accepts_with(&KeywordMatcher::new(&self.keyword), entry)
    }

    pub(crate) fn accepts_with(&self, matcher: &KeywordMatcher, entry: &CatalogEntry<'_>) -> bool {
        if !matcher.is_match(&entry.key) {
            return false;
        }
        if self.numeric_only && !is_numeric_only(&entry.key) {
            return false;
        }
        if self.exclude_four && contains_digit_four(&entry.key) {
            return false;
        }
        if self.triple_or_better && entry.level < DesirabilityLevel::Triple {
            return false;
        }
        if self.incremental_only && entry.level != DesirabilityLevel::Sequential {
            return false;
        }
        true
    }
}

/// Order of a catalog view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Plate number ascending
    #[default]
    Plate,
    /// Best level first, plate number within a level
    Level,
}
