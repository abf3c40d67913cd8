///! Plain-text listing of the catalog

use chrono::NaiveDate;
use plate_common::{DesirabilityLevel, PlateStatus};
use plate_core::module::catalog::{Catalog, CatalogEntry};

use crate::config::ViewFilter;
use crate::store::FavoriteStore;

/// Days after issue at which a record is considered stale
const FRESHNESS_DAYS: i64 = 100;

/// Pick the entries to show: catalog filter first, then the user's marks
pub fn select_entries<'c, 'a>(
    catalog: &'c Catalog<'a>,
    filter: &ViewFilter,
    store: &FavoriteStore,
) -> Vec<&'c CatalogEntry<'a>> {
    catalog
        .view(&filter.catalog, filter.order)
        .into_iter()
        .filter(|entry| match store.status(&entry.key) {
            Some(PlateStatus::Excluded) => !filter.hide_excluded,
            Some(PlateStatus::Favored) => true,
            None => !filter.favorites_only,
        })
        .collect()
}

/// Render the listing, one plate per line, with a summary footer
pub fn render_listing(entries: &[&CatalogEntry<'_>], store: &FavoriteStore, today: NaiveDate) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|entry| render_row(entry, store.status(&entry.key), today))
        .collect();

    let summary: Vec<String> = DesirabilityLevel::ALL
        .iter()
        .rev()
        .map(|level| {
            let count = entries.iter().filter(|e| e.level == *level).count();
            format!("L{}: {}", level, count)
        })
        .collect();

    lines.push(format!("Total: {} ({})", entries.len(), summary.join(", ")));
    lines.join("\n") + "\n"
}

fn render_row(entry: &CatalogEntry<'_>, status: Option<PlateStatus>, today: NaiveDate) -> String {
    let marker = match status {
        Some(PlateStatus::Favored) => '♥',
        Some(PlateStatus::Excluded) => '×',
        None => ' ',
    };
    let energy = if entry.record.is_new_energy() { "EV" } else { "  " };
    let freshness = freshness(&entry.record.time, today)
        .map(|f| format!("{:>3.0}%", f * 100.0))
        .unwrap_or_else(|| "   -".to_string());

    format!(
        "{} {} {} {} | {} | {} | {} {}",
        marker,
        spaced(&entry.key),
        level_stars(entry.level),
        energy,
        entry.record.office,
        entry.record.category,
        issue_date(&entry.record.time),
        freshness,
    )
}

/// "A11111" -> "A 1 1 1 1 1"
pub fn spaced(plate: &str) -> String {
    plate.chars().map(String::from).collect::<Vec<_>>().join(" ")
}

pub fn level_stars(level: DesirabilityLevel) -> String {
    let filled = level.value() as usize;
    "★".repeat(filled) + &"☆".repeat(DesirabilityLevel::Penta.value() as usize - filled)
}

/// Date part of the dataset's issue time
pub fn issue_date(time: &str) -> &str {
    time.get(..10).unwrap_or(time)
}

/// How recently a record was issued, 1.0 on the day and 0.0 after 100 days
pub fn freshness(time: &str, today: NaiveDate) -> Option<f64> {
    let date = NaiveDate::parse_from_str(issue_date(time), "%Y-%m-%d").ok()?;
    let days = today.signed_duration_since(date).num_days();
    Some(((FRESHNESS_DAYS - days) as f64 / FRESHNESS_DAYS as f64).clamp(0.0, 1.0))
}
