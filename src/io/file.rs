use std::path::Path;

use crate::io::DataError;
use crate::model::Catalog;

/// Save a catalog snapshot to a JSON file.
pub fn save_catalog(catalog: &Catalog, path: &Path) -> Result<(), DataError> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json).map_err(|e| DataError::io(path, e))?;
    tracing::info!(path = %path.display(), "Saved dataset snapshot");
    Ok(())
}

/// Load a catalog snapshot from a JSON file.
///
/// Unknown enum values fail the whole load. Unresolved references are
/// accepted and logged; the views show fallback names for them.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataError> {
    let json = std::fs::read_to_string(path).map_err(|e| DataError::io(path, e))?;
    let catalog: Catalog = serde_json::from_str(&json).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for dangling in catalog.dangling_references() {
        tracing::warn!(path = %path.display(), "{dangling}");
    }
    tracing::info!(
        path = %path.display(),
        projects = catalog.projects.len(),
        work_items = catalog.work_items.len(),
        users = catalog.users.len(),
        "Loaded dataset snapshot"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::seed;

    #[test]
    fn snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        let catalog = seed::sample_catalog();
        save_catalog(&catalog, &path).unwrap();
        assert_eq!(load_catalog(&path).unwrap(), catalog);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn unknown_enum_value_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        let json = r#"{
            "projects": [{
                "id": "P", "code": "P", "name": "n",
                "start_date": "2024-01-01", "planned_end_date": "2024-01-02",
                "status": "archived", "priority": "low"
            }]
        }"#;
        std::fs::write(&path, json).unwrap();
        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, DataError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }

    #[test]
    fn dangling_references_still_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.json");
        let mut catalog = seed::sample_catalog();
        catalog.users.clear();
        save_catalog(&catalog, &path).unwrap();
        let loaded = load_catalog(&path).unwrap();
        assert_eq!(loaded.work_items.len(), 3);
        assert_eq!(loaded.dangling_references().len(), 3);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(load_catalog(&path).unwrap().is_empty());
    }
}
