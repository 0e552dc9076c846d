//! Persisted user preferences (lives in the OS config directory).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::RECENT_LIMIT;

/// Top-level view shown in the central panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Dashboard,
    Projects,
    WorkItems,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Projects, Section::WorkItems];

    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Projects => "Projects",
            Section::WorkItems => "Work items",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Snapshot opened at start-up; the built-in sample data when `None`.
    pub dataset_path: Option<PathBuf>,
    pub last_section: Section,
    /// Entries listed under "Recent work items".
    pub recent_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dataset_path: None,
            last_section: Section::Dashboard,
            recent_limit: RECENT_LIMIT,
        }
    }
}

/// Loads and saves [`AppSettings`] at a fixed path.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store under the platform config directory, or the working directory
    /// when none can be determined.
    pub fn from_config_dir() -> Self {
        let path = directories::ProjectDirs::from("", "", "WorkTracker")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .unwrap_or_else(|| PathBuf::from("settings.json"));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable settings fall back to defaults.
    pub fn load(&self) -> AppSettings {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return AppSettings::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Cannot read settings");
                return AppSettings::default();
            }
        };
        match serde_json::from_str(&json) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt settings");
                AppSettings::default()
            }
        }
    }

    /// Best effort; failures are logged and otherwise ignored.
    pub fn save(&self, settings: &AppSettings) {
        let json = match serde_json::to_string_pretty(settings) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(error = %e, "Cannot serialize settings");
                return;
            }
        };
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), error = %e, "Cannot create config directory");
                return;
            }
        }
        if let Err(e) = std::fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), error = %e, "Cannot save settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json"));
        assert_eq!(store.load(), AppSettings::default());
    }

    #[test]
    fn corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert_eq!(SettingsStore::at(path).load(), AppSettings::default());
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "last_section": "work_items" }"#).unwrap();
        let settings = SettingsStore::at(path).load();
        assert_eq!(settings.last_section, Section::WorkItems);
        assert_eq!(settings.recent_limit, RECENT_LIMIT);
        assert!(settings.dataset_path.is_none());
    }

    #[test]
    fn save_creates_parent_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("nested").join("settings.json"));
        let settings = AppSettings {
            dataset_path: Some(PathBuf::from("/tmp/data.json")),
            last_section: Section::Projects,
            recent_limit: 8,
        };
        store.save(&settings);
        assert_eq!(store.load(), settings);
    }
}
