//! Window settings stored as settings.json in the app data directory
//!
//! Only window geometry lives here. The enhance toggles are session-only.

use crate::constants::SETTINGS_FILE_NAME;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,
}

impl Settings {
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE_NAME)
    }

    /// Load settings. `Ok(None)` when no file exists yet.
    pub fn try_load(data_dir: &Path) -> Result<Option<Self>, SettingsError> {
        let path = Self::path(data_dir);
        let contents = match std::fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(SettingsError::Io { path, source }),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| SettingsError::Parse { path, source })
    }

    pub fn load(data_dir: &Path) -> Self {
        match Self::try_load(data_dir) {
            Ok(Some(settings)) => {
                debug!(path = %Self::path(data_dir).display(), "Settings loaded");
                settings
            }
            Ok(None) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
            Err(e) => {
                warn!(error = %e, "Failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn try_save(&self, data_dir: &Path) -> Result<(), SettingsError> {
        let path = Self::path(data_dir);
        let json = serde_json::to_string_pretty(self).map_err(SettingsError::Serialize)?;
        std::fs::write(&path, json).map_err(|source| SettingsError::Io { path, source })
    }

    pub fn save(&self, data_dir: &Path) {
        if let Err(e) = self.try_save(data_dir) {
            warn!(error = %e, "Failed to save settings");
        }
    }

    pub fn window_pos(&self) -> Option<egui::Pos2> {
        match (self.window_x, self.window_y) {
            (Some(x), Some(y)) => Some(egui::pos2(x, y)),
            _ => None,
        }
    }

    pub fn window_size(&self) -> Option<egui::Vec2> {
        match (self.window_w, self.window_h) {
            (Some(w), Some(h)) => Some(egui::vec2(w, h)),
            _ => None,
        }
    }

    pub fn set_window_geometry(&mut self, pos: Option<egui::Pos2>, size: Option<egui::Vec2>) {
        if let Some(pos) = pos {
            self.window_x = Some(pos.x);
            self.window_y = Some(pos.y);
        }
        if let Some(size) = size {
            self.window_w = Some(size.x);
            self.window_h = Some(size.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::try_load(dir.path()).unwrap().is_none());
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn save_then_load_keeps_geometry() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = Settings::default();
        settings.set_window_geometry(Some(egui::pos2(10.0, 20.0)), Some(egui::vec2(480.0, 320.0)));
        settings.try_save(dir.path()).unwrap();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_pos(), Some(egui::pos2(10.0, 20.0)));
        assert_eq!(loaded.window_size(), Some(egui::vec2(480.0, 320.0)));
    }

    #[test]
    fn corrupt_file_is_parse_error_and_load_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(Settings::path(dir.path()), "{ not json").unwrap();

        let err = Settings::try_load(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn unknown_and_missing_fields_are_tolerated() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            Settings::path(dir.path()),
            r#"{ "window_w": 500.0, "google_search": true }"#,
        )
        .unwrap();

        let loaded = Settings::load(dir.path());
        assert_eq!(loaded.window_w, Some(500.0));
        assert_eq!(loaded.window_size(), None);
    }

    #[test]
    fn partial_geometry_is_ignored() {
        let settings = Settings {
            window_x: Some(1.0),
            ..Default::default()
        };
        assert_eq!(settings.window_pos(), None);
    }

    #[test]
    fn save_into_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let err = Settings::default().try_save(&missing).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
