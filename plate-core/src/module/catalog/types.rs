///! Catalog data types

use std::collections::BTreeMap;

use plate_common::{DesirabilityLevel, RangeRecord};

use crate::error::ExpandError;
use crate::module::plate::matcher::KeywordMatcher;

use super::filter::{CatalogFilter, SortOrder};

/// One concrete plate paired with the record it was expanded from
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry<'a> {
    /// Plate number, e.g. "AD12345"
    pub key: String,
    /// Grade computed from the plate's digits
    pub level: DesirabilityLevel,
    /// Source record, untouched
    pub record: &'a RangeRecord,
}

/// A dataset record that could not be expanded
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// Position of the record in the dataset
    pub index: usize,
    pub error: ExpandError,
}

/// Every plate of a dataset, sorted by plate number
#[derive(Debug, Clone, Default)]
pub struct Catalog<'a> {
    pub entries: Vec<CatalogEntry<'a>>,
    pub skipped: Vec<SkippedRecord>,
}

impl<'a> Catalog<'a> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries accepted by `filter`, in plate order
    pub fn filtered(&self, filter: &CatalogFilter) -> Vec<&CatalogEntry<'a>> {
        let matcher = KeywordMatcher::new(&filter.keyword);
        self.entries
            .iter()
            .filter(|entry| filter.accepts_with(&matcher, entry))
            .collect()
    }

    /// Entries accepted by `filter`, arranged in `order`
    pub fn view(&self, filter: &CatalogFilter, order: SortOrder) -> Vec<&CatalogEntry<'a>> {
        let mut entries = self.filtered(filter);
        if order == SortOrder::Level {
            // stable, so plates of one level keep their plate order
            entries.sort_by(|a, b| b.level.cmp(&a.level));
        }
        entries
    }

    /// Number of entries per level
    pub fn level_histogram(&self) -> BTreeMap<DesirabilityLevel, usize> {
        let mut histogram = BTreeMap::new();
        for entry in &self.entries {
            *histogram.entry(entry.level).or_insert(0) += 1;
        }
        histogram
    }
}
