use crate::error::CollectionError;
use crate::portfolio::Collection;
use std::fs;
use std::path::Path;

/// Load a collection from a JSON file
pub fn load_collection(path: &Path) -> Result<Collection, CollectionError> {
    let content = fs::read_to_string(path)?;
    let collection: Collection = serde_json::from_str(&content)?;
    log::info!(
        "Loaded {} cards and {} sealed products from {}",
        collection.cards.len(),
        collection.sealed.len(),
        path.display()
    );
    Ok(collection)
}

/// Write a collection as pretty JSON, creating the parent directory if needed
pub fn save_collection(path: &Path, collection: &Collection) -> Result<(), CollectionError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
            log::info!("Created directory: {}", parent.display());
        }
    }

    let json = serde_json::to_string_pretty(collection)?;
    fs::write(path, json)?;
    log::info!("Saved collection to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "files_tests.rs"]
mod tests;
