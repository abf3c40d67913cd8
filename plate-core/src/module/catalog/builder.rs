///! Catalog construction

use plate_common::RangeRecord;
use tracing::{info, warn};

use crate::module::plate::{classify_level, expand};

use super::types::{Catalog, CatalogEntry, SkippedRecord};

/// Expand and grade every record of a dataset.
///
/// Records are independent: one that fails to expand is logged, listed in
/// [`Catalog::skipped`] and left out, while the rest are still processed.
/// Entries come back sorted by plate number.
pub fn build_catalog(records: &[RangeRecord]) -> Catalog<'_> {
    let mut catalog = Catalog::default();

    for (index, record) in records.iter().enumerate() {
        let range = record.range();
        let plates = match expand(&range) {
            Ok(plates) => plates,
            Err(error) => {
                warn!("Skipping dataset record #{} ({}): {}", index, range, error);
                catalog.skipped.push(SkippedRecord { index, error });
                continue;
            }
        };

        catalog.entries.extend(plates.into_iter().map(|key| CatalogEntry {
            level: classify_level(&key),
            key,
            record,
        }));
    }

    catalog
        .entries
        .sort_by_cached_key(|entry| (entry.key.to_ascii_uppercase(), entry.key.clone()));

    info!(
        "Built catalog: {} plates from {} records ({} skipped)",
        catalog.entries.len(),
        records.len(),
        catalog.skipped.len()
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpandError;
    use crate::module::catalog::{CatalogFilter, SortOrder};
    use plate_common::{Dataset, DesirabilityLevel};

    fn create_test_dataset() -> Dataset {
        let json = r#"{"numberScopes":[
            {"start":"AD11100","end":"AD11111","office":"沪公交管","type":"小型新能源汽车","time":"2024-05-01 09:00:00"},
            {"start":"A4440","end":"A44400","office":"沪公交管","type":"小型汽车","time":"2024-05-02 09:00:00"},
            {"start":"AB12300","office":"沪公交管","type":"小型汽车","time":"2024-05-03 09:00:00","batch":"B-7"}
        ]}"#;
        Dataset::from_json(json).unwrap()
    }

    #[test]
    fn test_build_skips_bad_record() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        assert_eq!(catalog.len(), 12 + 100);
        assert_eq!(catalog.skipped.len(), 1);
        assert_eq!(catalog.skipped[0].index, 1);
        assert!(matches!(
            catalog.skipped[0].error,
            ExpandError::LengthMismatch { .. }
        ));
    }

    #[test]
    fn test_build_sorted_and_graded() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        assert!(catalog.entries.windows(2).all(|w| w[0].key <= w[1].key));
        assert_eq!(catalog.entries[0].key, "AB12300");
        assert_eq!(catalog.entries[0].level, DesirabilityLevel::Sequential);

        let penta = catalog.entries.iter().find(|e| e.key == "AD11111").unwrap();
        assert_eq!(penta.level, DesirabilityLevel::Penta);
    }

    #[test]
    fn test_build_keeps_source_record() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        let entry = catalog.entries.iter().find(|e| e.key == "AB12355").unwrap();
        assert_eq!(entry.record, &dataset.number_scopes[2]);
        assert_eq!(entry.record.extra.get("batch").and_then(|v| v.as_str()), Some("B-7"));

        let entry = catalog.entries.iter().find(|e| e.key == "AD11105").unwrap();
        assert!(entry.record.is_new_energy());
    }

    #[test]
    fn test_filter_keyword() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        let hits = catalog.filtered(&CatalogFilter::with_keyword("d111*1"));
        let keys: Vec<&str> = hits.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["AD11101", "AD11111"]);
    }

    #[test]
    fn test_filter_toggles() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        let filter = CatalogFilter {
            triple_or_better: true,
            ..CatalogFilter::default()
        };
        assert!(catalog
            .filtered(&filter)
            .iter()
            .all(|e| e.level >= DesirabilityLevel::Triple));

        let filter = CatalogFilter {
            exclude_four: true,
            ..CatalogFilter::default()
        };
        let hits = catalog.filtered(&filter);
        assert!(hits.iter().all(|e| !e.key.contains('4')));
        assert!(!hits.iter().any(|e| e.key == "AB12344"));

        let filter = CatalogFilter {
            incremental_only: true,
            ..CatalogFilter::default()
        };
        assert!(catalog
            .filtered(&filter)
            .iter()
            .all(|e| e.level == DesirabilityLevel::Sequential));

        let filter = CatalogFilter {
            numeric_only: true,
            ..CatalogFilter::default()
        };
        assert_eq!(catalog.filtered(&filter).len(), catalog.len());
    }

    #[test]
    fn test_accepts_single_entry() {
        let record = RangeRecord::new("A12399", None);
        let entry = CatalogEntry {
            key: "A12399".to_string(),
            level: classify_level("A12399"),
            record: &record,
        };
        assert!(CatalogFilter::with_keyword("123").accepts(&entry));
        assert!(!CatalogFilter::with_keyword("124").accepts(&entry));
    }

    #[test]
    fn test_view_by_level() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        let view = catalog.view(&CatalogFilter::default(), SortOrder::Level);
        assert_eq!(view.len(), catalog.len());
        assert_eq!(view[0].key, "AD11111");
        assert!(view.windows(2).all(|w| w[0].level >= w[1].level));
    }

    #[test]
    fn test_level_histogram() {
        let dataset = create_test_dataset();
        let catalog = build_catalog(&dataset.number_scopes);

        let histogram = catalog.level_histogram();
        assert_eq!(histogram.values().sum::<usize>(), catalog.len());
        assert_eq!(histogram.get(&DesirabilityLevel::Penta), Some(&1));
    }
}
