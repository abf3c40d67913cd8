use plate_browser::config::BrowserConfig;
use plate_browser::dataset::load_dataset;
use plate_browser::store::FavoriteStore;
use plate_browser::view::{render_listing, select_entries};
use plate_core::build_catalog;

use anyhow::Result;
use chrono::Local;

fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.toml".to_string());
    let config = BrowserConfig::load_or_default(&config_path)?;

    // Initialize logging
    let _logging_guard = plate_browser::logging::init_logging(
        &config.log_dir,
        "plate-browser",
        &config.log_level,
    )?;

    tracing::info!("Plate browser starting...");
    tracing::info!("Using dataset {} and store {}", config.dataset, config.store);

    let dataset = load_dataset(&config.dataset)?;

    let mut store = FavoriteStore::load(&config.store)?;
    if store.apply(&config.actions) > 0 {
        store.save()?;
    }

    let catalog = build_catalog(&dataset.number_scopes);
    if !catalog.skipped.is_empty() {
        tracing::warn!("{} dataset records could not be expanded", catalog.skipped.len());
    }

    let entries = select_entries(&catalog, &config.filter, &store);
    tracing::info!("Showing {} of {} plates", entries.len(), catalog.len());

    print!("{}", render_listing(&entries, &store, Local::now().date_naive()));

    Ok(())
}
