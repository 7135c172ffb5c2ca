use std::fs;
use std::path::Path;

use crate::catalog::MealCatalog;
use crate::error::Result;
use crate::models::ProfileRecord;
use crate::state::Favorites;

/// Load a meal catalog from a JSON file.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MealCatalog> {
    let content = fs::read_to_string(path.as_ref())?;
    let catalog = MealCatalog::from_json(&content)?;
    tracing::info!(path = %path.as_ref().display(), meals = catalog.len(), "loaded meal catalog");
    Ok(catalog)
}

/// Load a profile record exported by the profile service.
pub fn load_profile_record<P: AsRef<Path>>(path: P) -> Result<ProfileRecord> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Load favorites from a JSON id list. A missing file means no favorites yet.
pub fn load_favorites<P: AsRef<Path>>(path: P) -> Result<Favorites> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Favorites::new());
    }

    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Save favorites as a JSON id list.
pub fn save_favorites<P: AsRef<Path>>(path: P, favorites: &Favorites) -> Result<()> {
    let json = serde_json::to_string_pretty(favorites)?;
    fs::write(path, json)?;
    Ok(())
}
