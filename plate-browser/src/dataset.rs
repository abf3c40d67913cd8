use anyhow::{Context, Result};
use plate_common::Dataset;
use std::path::Path;
use tracing::info;

/// Load the plate dataset from a JSON file
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file {:?}", path))?;
    let dataset = Dataset::from_json(&content)
        .with_context(|| format!("Failed to parse dataset file {:?}", path))?;

    info!("Loaded {} range records from {:?}", dataset.number_scopes.len(), path);
    Ok(dataset)
}
