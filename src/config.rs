//! User settings, persisted as JSON in the OS config directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::TableSize;

const APP_NAME: &str = "SopMilestoneDashboard";

/// Which view the window opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartView {
    #[default]
    Entry,
    Dashboard,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Overrides the directory the project data is stored in.
    pub data_dir: Option<PathBuf>,
    pub start_view: StartView,
    /// Write dashboard widget reordering back to storage.
    pub persist_widget_order: bool,
    /// Initial timeline table width in pixels.
    pub table_width: f32,
    /// Initial timeline table height in pixels.
    pub table_height: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        let size = TableSize::default();
        Self {
            data_dir: None,
            start_view: StartView::Entry,
            persist_widget_order: false,
            table_width: size.width,
            table_height: size.height,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, writing defaults on first run.
    pub fn load() -> Self {
        let path = settings_path();
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(&path);
            return settings;
        }
        Self::load_from(&path)
    }

    /// Read settings from `path`. A missing or malformed file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                tracing::debug!("No settings at {:?}: {}", path, e);
                return Self::default();
            }
        };
        match serde_json::from_str(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) {
        let result = serde_json::to_string_pretty(self)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
                }
                std::fs::write(path, json).map_err(|e| e.to_string())
            });
        if let Err(e) = result {
            tracing::warn!("Failed to write settings {:?}: {}", path, e);
        }
    }

    /// Directory for the key-value store.
    pub fn resolved_data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from(".").join("data"))
    }

    pub fn table_size(&self) -> TableSize {
        TableSize::new(self.table_width, self.table_height)
    }
}

fn settings_path() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.config_dir().join("settings.json"))
        .unwrap_or_else(|| PathBuf::from(".").join("settings.json"))
}
